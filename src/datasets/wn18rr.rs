//! WN18RR raw files.
//!
//! ```text
//! wordnet-mlj12-definitions.txt   <entity_id>\t<synset_name>\t<definition>
//! relations.dict                  [<index>\t]<relation_id>
//! ```
use std::path::Path;

use log::info;

use crate::cleaning::{clean_wn18rr_entity, clean_wn18rr_relation};
use crate::error::Error;
use crate::io::tsv::{read_records, IdMapBuilder};
use crate::kg::IdMap;

use super::{relation_dictionary, DatasetParser};

pub const DEFINITIONS: &str = "wordnet-mlj12-definitions.txt";
pub const RELATIONS: &str = "relations.dict";

/// Entity names (cleaned synset names) and descriptions (definitions), keyed by entity id.
pub fn entity_mappings(definitions: &Path) -> Result<(IdMap, IdMap), Error> {
    let records = read_records(definitions, 3..=3)?;

    let mut names = IdMapBuilder::new(definitions);
    let mut descriptions = IdMapBuilder::new(definitions);
    for record in &records {
        let synset = record.get(1).unwrap_or_default();
        let definition = record.get(2).unwrap_or_default();
        names.insert(record.id(), clean_wn18rr_entity(synset))?;
        descriptions.insert(record.id(), definition.to_string())?;
    }

    let (names, descriptions) = (names.build(), descriptions.build());
    info!("wn18rr: {} entities", names.len());
    Ok((names, descriptions))
}

pub fn relation_mapping(relations: &Path) -> Result<IdMap, Error> {
    relation_dictionary(relations, clean_wn18rr_relation)
}

/// WN18RR parser, over a folder holding [DEFINITIONS] and [RELATIONS].
#[derive(Debug, Default, Clone, Copy)]
pub struct Wn18rr;

impl DatasetParser for Wn18rr {
    fn entity_mappings(&self, src: &Path) -> Result<(IdMap, IdMap), Error> {
        entity_mappings(&src.join(DEFINITIONS))
    }

    fn relation_mapping(&self, src: &Path) -> Result<IdMap, Error> {
        relation_mapping(&src.join(RELATIONS))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    #[test]
    fn definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFINITIONS);
        let mut f = File::create(&path).unwrap();
        write!(
            f,
            "02084071\t__dog_NN_1\ta member of the genus Canis\n\
             04326896\t__stool_NN_2\ta simple seat without a back or arms\n\
             malformed line\n\
             09044862\t__united_states_NN_1\tNorth American republic\n"
        )
        .unwrap();

        let (names, descriptions) = entity_mappings(&path).unwrap();
        assert_eq!(names.len(), 3);
        assert_eq!(names["02084071"], "dog");
        assert_eq!(names["09044862"], "united states");
        assert_eq!(descriptions["04326896"], "a simple seat without a back or arms");
    }

    #[test]
    fn conflicting_definitions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFINITIONS);
        let mut f = File::create(&path).unwrap();
        write!(
            f,
            "02084071\t__dog_NN_1\ta member of the genus Canis\n\
             02084071\t__dog_NN_1\tman's best friend\n"
        )
        .unwrap();

        let err = entity_mappings(&path).unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier { id, .. } if id == "02084071"));
    }

    #[test]
    fn relations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RELATIONS);
        let mut f = File::create(&path).unwrap();
        write!(f, "0\t_hypernym\n1\t_derivationally_related_form\n").unwrap();

        let relations = Wn18rr.relation_mapping(dir.path()).unwrap();
        assert_eq!(relations["_hypernym"], "hypernym");
        assert_eq!(
            relations["_derivationally_related_form"],
            "derivationally related form"
        );
    }
}
