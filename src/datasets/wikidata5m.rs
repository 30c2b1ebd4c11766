//! Wikidata5M raw files.
//!
//! Every file lists an identifier followed by one or more alternatives,
//! the first one is kept:
//!
//! ```text
//! wikidata5m_entity.txt     Q42\tDouglas Adams\tDouglas Noël Adams\t...
//! wikidata5m_text.txt       Q42\tDouglas Noël Adams was an English author...
//! wikidata5m_relation.txt   P31\tinstance of\tis a\t...
//! ```
use std::path::Path;

use log::info;

use crate::cleaning::first_alternative;
use crate::error::Error;
use crate::io::tsv::{read_records, IdMapBuilder};
use crate::kg::IdMap;

use super::DatasetParser;

pub const ENTITIES: &str = "wikidata5m_entity.txt";
pub const TEXTS: &str = "wikidata5m_text.txt";
pub const RELATIONS: &str = "wikidata5m_relation.txt";

/// identifier -> first alternative.
pub fn first_alternative_mapping(path: &Path) -> Result<IdMap, Error> {
    let records = read_records(path, 2..=usize::MAX)?;
    let mut map = IdMapBuilder::new(path);
    for record in &records {
        let alternatives = record.fields[1..].iter().map(String::as_str);
        let value = first_alternative(alternatives).unwrap_or_default();
        map.insert(record.id(), value.to_string())?;
    }
    Ok(map.build())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Wikidata5m;

impl DatasetParser for Wikidata5m {
    fn entity_mappings(&self, src: &Path) -> Result<(IdMap, IdMap), Error> {
        let names = first_alternative_mapping(&src.join(ENTITIES))?;
        let descriptions = first_alternative_mapping(&src.join(TEXTS))?;
        info!(
            "wikidata5m: {} names, {} descriptions",
            names.len(),
            descriptions.len()
        );
        Ok((names, descriptions))
    }

    fn relation_mapping(&self, src: &Path) -> Result<IdMap, Error> {
        first_alternative_mapping(&src.join(RELATIONS))
    }
}
