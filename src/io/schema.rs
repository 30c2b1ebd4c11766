/*! Standardised schema files.

A standardised dataset is a folder holding:

```text
entity_ids.txt               one identifier per line, sorted
entity_id2name.json          {"id": "name", ...}
entity_id2description.json   {"id": "description", ...}
relation_id2name.json        {"id": "name", ...}
```

Json files are pretty-printed (4 spaces) and keep non-ascii characters as-is.
!*/
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Error;
use crate::kg::{IdMap, TextualKg};

pub const ENTITY_IDS: &str = "entity_ids.txt";
pub const ENTITY_ID2NAME: &str = "entity_id2name.json";
pub const ENTITY_ID2DESCRIPTION: &str = "entity_id2description.json";
pub const RELATION_ID2NAME: &str = "relation_id2name.json";

/// Write a mapping as a pretty-printed json object.
pub fn save_json(data: &IdMap, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    serde::Serialize::serialize(data, &mut ser)?;
    writer.flush()?;

    Ok(())
}

pub fn load_json(path: &Path) -> Result<IdMap, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write identifiers, one per line.
///
/// Identifiers are sorted and deduplicated before writing.
pub fn save_entity_ids<'a, I>(ids: I, path: &Path) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a str>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut ids: Vec<&str> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut writer = BufWriter::new(File::create(path)?);
    for (idx, id) in ids.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(id.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

/// Read identifiers back, skipping blank lines.
pub fn load_entity_ids(path: &Path) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim_end_matches('\r');
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Write the three mappings and the entity id list into `folder`, creating it if needed.
pub fn save_tkg_to_folder(tkg: &TextualKg, folder: &Path) -> Result<(), Error> {
    fs::create_dir_all(folder)?;

    save_json(&tkg.entity_id2name, &folder.join(ENTITY_ID2NAME))?;
    save_json(&tkg.entity_id2description, &folder.join(ENTITY_ID2DESCRIPTION))?;
    save_json(&tkg.relation_id2name, &folder.join(RELATION_ID2NAME))?;
    save_entity_ids(tkg.entity_ids(), &folder.join(ENTITY_IDS))?;

    info!(
        "saved {} entities ({} names, {} descriptions), {} relations to {}",
        tkg.entity_ids().len(),
        tkg.entity_id2name.len(),
        tkg.entity_id2description.len(),
        tkg.relation_id2name.len(),
        folder.display()
    );
    Ok(())
}

pub fn load_tkg_from_folder(folder: &Path) -> Result<TextualKg, Error> {
    Ok(TextualKg::new(
        load_json(&folder.join(ENTITY_ID2NAME))?,
        load_json(&folder.join(ENTITY_ID2DESCRIPTION))?,
        load_json(&folder.join(RELATION_ID2NAME))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> IdMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        save_json(&map(&[("b", "été"), ("a", "x")]), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"a\": \"x\",\n    \"b\": \"été\"\n}");
    }

    #[test]
    fn json_escapes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/m.json");
        let m = map(&[("q\"1", "line\nbreak\ttab \\ slash")]);
        save_json(&m, &path).unwrap();
        assert_eq!(load_json(&path).unwrap(), m);
    }

    #[test]
    fn entity_ids_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ENTITY_IDS);
        save_entity_ids(vec!["Q3", "Q1", "Q2", "Q1"], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Q1\nQ2\nQ3");
        assert_eq!(load_entity_ids(&path).unwrap(), vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn missing_json() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
