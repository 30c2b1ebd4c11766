//! Textual knowledge graph types.
//!
//! Every stage of the toolkit exchanges [IdMap]s: parsers produce them,
//! processors transform them and the schema writer persists them.
//! [IdMap] is ordered so that anything derived from it (entity ids, json files)
//! is deterministic.
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// identifier -> text mapping.
pub type IdMap = BTreeMap<String, String>;

/// The three mappings of the standardised schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextualKg {
    pub entity_id2name: IdMap,
    pub entity_id2description: IdMap,
    pub relation_id2name: IdMap,
}

/// Combined, borrowed view on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityView<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl TextualKg {
    pub fn new(entity_id2name: IdMap, entity_id2description: IdMap, relation_id2name: IdMap) -> Self {
        Self {
            entity_id2name,
            entity_id2description,
            relation_id2name,
        }
    }

    /// Sorted union of identifiers having a name or a description.
    pub fn entity_ids(&self) -> Vec<&str> {
        entity_ids(&self.entity_id2name, &self.entity_id2description)
    }

    /// Returns [None] if the entity has neither a name nor a description.
    pub fn entity(&self, id: &str) -> Option<EntityView<'_>> {
        let name = self.entity_id2name.get_key_value(id);
        let description = self.entity_id2description.get_key_value(id);

        let key = name.or(description).map(|(k, _)| k.as_str())?;
        Some(EntityView {
            id: key,
            name: name.map(|(_, v)| v.as_str()),
            description: description.map(|(_, v)| v.as_str()),
        })
    }

    pub fn relation_name(&self, id: &str) -> Option<&str> {
        self.relation_id2name.get(id).map(String::as_str)
    }

    /// Iterate over every entity of the union, in identifier order.
    pub fn entities(&self) -> impl Iterator<Item = EntityView<'_>> {
        self.entity_ids()
            .into_iter()
            .filter_map(move |id| self.entity(id))
    }
}

/// Sorted union of the keys of both mappings.
pub fn entity_ids<'a>(names: &'a IdMap, descriptions: &'a IdMap) -> Vec<&'a str> {
    names
        .keys()
        .chain(descriptions.keys())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{IdMap, TextualKg};

    fn map(pairs: &[(&str, &str)]) -> IdMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn entity_ids_union_sorted() {
        let kg = TextualKg::new(
            map(&[("Q3", "c"), ("Q1", "a")]),
            map(&[("Q2", "d2"), ("Q1", "d1")]),
            IdMap::new(),
        );
        assert_eq!(kg.entity_ids(), vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn entity_view() {
        let kg = TextualKg::new(
            map(&[("Q1", "Foo")]),
            map(&[("Q1", "d1"), ("Q2", "d2")]),
            map(&[("P1", "instance of")]),
        );

        let q1 = kg.entity("Q1").unwrap();
        assert_eq!(q1.name, Some("Foo"));
        assert_eq!(q1.description, Some("d1"));

        let q2 = kg.entity("Q2").unwrap();
        assert_eq!(q2.id, "Q2");
        assert_eq!(q2.name, None);
        assert_eq!(q2.description, Some("d2"));

        assert!(kg.entity("Q9").is_none());
        assert_eq!(kg.relation_name("P1"), Some("instance of"));
        assert_eq!(kg.entities().count(), 2);
    }
}
