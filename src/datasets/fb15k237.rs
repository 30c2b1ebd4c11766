//! FB15k-237 raw files.
//!
//! ```text
//! FB15k_mid2name.txt          <mid>\t<name>
//! FB15k_mid2description.txt   <mid>\t<description>
//! relations.dict              [<index>\t]<relation_path>     (optional)
//! train.txt, valid.txt, test.txt
//! ```
//!
//! When there is no relation dictionary, relations are collected from the splits.
use std::path::Path;

use log::info;

use crate::cleaning::{clean_fb15k237_entity, clean_fb15k237_relation};
use crate::error::Error;
use crate::io::tsv::{read_records, IdMapBuilder};
use crate::kg::IdMap;

use super::{relation_dictionary, relations_from_triplets, DatasetParser, SPLITS};

pub const NAMES: &str = "FB15k_mid2name.txt";
pub const DESCRIPTIONS: &str = "FB15k_mid2description.txt";
pub const RELATIONS: &str = "relations.dict";

/// `<mid>\t<text>[\t...]`, extra columns are ignored.
fn mid_mapping(path: &Path, clean: fn(&str) -> String) -> Result<IdMap, Error> {
    let records = read_records(path, 2..=usize::MAX)?;
    let mut map = IdMapBuilder::new(path);
    for record in &records {
        map.insert(record.id(), clean(record.get(1).unwrap_or_default()))?;
    }
    Ok(map.build())
}

pub fn entity_names(path: &Path) -> Result<IdMap, Error> {
    mid_mapping(path, clean_fb15k237_entity)
}

pub fn entity_descriptions(path: &Path) -> Result<IdMap, Error> {
    mid_mapping(path, str::to_string)
}

pub fn relation_mapping(relations: &Path) -> Result<IdMap, Error> {
    relation_dictionary(relations, clean_fb15k237_relation)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Fb15k237;

impl DatasetParser for Fb15k237 {
    fn entity_mappings(&self, src: &Path) -> Result<(IdMap, IdMap), Error> {
        let names = entity_names(&src.join(NAMES))?;
        let descriptions = entity_descriptions(&src.join(DESCRIPTIONS))?;
        info!(
            "fb15k237: {} names, {} descriptions",
            names.len(),
            descriptions.len()
        );
        Ok((names, descriptions))
    }

    fn relation_mapping(&self, src: &Path) -> Result<IdMap, Error> {
        let dictionary = src.join(RELATIONS);
        if dictionary.exists() {
            return relation_mapping(&dictionary);
        }

        info!("fb15k237: no {RELATIONS}, collecting relations from splits");
        let splits: Vec<_> = SPLITS
            .iter()
            .map(|split| src.join(format!("{split}.txt")))
            .filter(|path| path.exists())
            .collect();
        relations_from_triplets(&splits, clean_fb15k237_relation)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        write!(f, "{}", content).unwrap();
    }

    #[test]
    fn entities() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), NAMES, "/m/010016\tDenton\n/m/0102t4\tMarshall\n");
        write(
            dir.path(),
            DESCRIPTIONS,
            "/m/010016\tDenton is a city in Texas.\n/m/027rn\tThe Dominican Republic\n",
        );

        let (names, descriptions) = Fb15k237.entity_mappings(dir.path()).unwrap();
        assert_eq!(names["/m/010016"], "Denton");
        assert_eq!(names.len(), 2);
        assert_eq!(descriptions["/m/027rn"], "The Dominican Republic");
    }

    #[test]
    fn extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            DESCRIPTIONS,
            "/m/01\tDenton is a city\t\n/m/02\tMarshall\tin Texas\n/m/03\tok\n",
        );

        let descriptions = entity_descriptions(&dir.path().join(DESCRIPTIONS)).unwrap();
        assert_eq!(descriptions.len(), 3);
        assert_eq!(descriptions["/m/01"], "Denton is a city");
        assert_eq!(descriptions["/m/02"], "Marshall");
        assert_eq!(descriptions["/m/03"], "ok");
    }

    #[test]
    fn missing_descriptions_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), NAMES, "/m/010016\tDenton\n");

        let err = Fb15k237.entity_mappings(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn relations_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            RELATIONS,
            "0\t/people/person/nationality\n1\t/film/film/genre\n",
        );

        let relations = Fb15k237.relation_mapping(dir.path()).unwrap();
        assert_eq!(
            relations["/people/person/nationality"],
            "nationality person people"
        );
        assert_eq!(relations["/film/film/genre"], "genre film");
    }

    #[test]
    fn relations_from_splits() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "train.txt",
            "/m/010016\t/people/person/nationality\t/m/09c7w0\n",
        );
        write(dir.path(), "test.txt", "/m/0102t4\t/film/film/genre\t/m/07s9rl0\n");

        let relations = Fb15k237.relation_mapping(dir.path()).unwrap();
        assert_eq!(relations.len(), 2);
        assert_eq!(relations["/film/film/genre"], "genre film");
    }
}
