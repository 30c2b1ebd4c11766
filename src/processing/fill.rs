//! Gap filling.
//!
//! Some entities have a name but no description, or the opposite.
//! Both mappings are completed over the union of their identifiers.
use crate::kg::{entity_ids, IdMap};

/// Complete `names` and `descriptions` with `placeholder` so that both share the same identifiers.
///
/// Existing values are never replaced, empty strings included.
/// Inputs are left untouched, new mappings are returned.
pub fn fill_missing_entries(names: &IdMap, descriptions: &IdMap, placeholder: &str) -> (IdMap, IdMap) {
    let ids = entity_ids(names, descriptions);

    let complete = |source: &IdMap| -> IdMap {
        ids.iter()
            .map(|id| {
                let value = source
                    .get(*id)
                    .cloned()
                    .unwrap_or_else(|| placeholder.to_string());
                (id.to_string(), value)
            })
            .collect()
    };

    (complete(names), complete(descriptions))
}
