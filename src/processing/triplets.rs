/*! Triplet export.

Joins split files (`head\trelation\ttail`) with entity and relation texts:

```text
head\trelation\ttail\thead_text\trelation_text\ttail_text
```

Unknown identifiers get an empty text.
!*/
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::{info, warn};

use crate::error::Error;
use crate::io::tsv::read_records;
use crate::kg::{entity_ids, IdMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triplet {
    pub head: String,
    pub relation: String,
    pub tail: String,
}

/// Read a split file. Lines that are not triplets are skipped.
///
/// An empty split file holds no triplet, it is not an error.
pub fn read_triplets(path: &Path) -> Result<Vec<Triplet>, Error> {
    if fs::metadata(path).map(|m| m.len() == 0).unwrap_or(false) {
        info!("{} is empty", path.display());
        return Ok(Vec::new());
    }

    let records = read_records(path, 3..=3)?;
    Ok(records
        .into_iter()
        .filter_map(|record| {
            let mut fields = record.fields.into_iter();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(head), Some(relation), Some(tail)) if !relation.is_empty() && !tail.is_empty() => {
                    Some(Triplet {
                        head,
                        relation,
                        tail,
                    })
                }
                _ => {
                    warn!("{}:{}: incomplete triplet. Skipping.", path.display(), record.line);
                    None
                }
            }
        })
        .collect())
}

/// Entity text used for triplets: the description, or the name when the description is missing or empty.
pub fn merge_descriptions(names: &IdMap, descriptions: &IdMap) -> IdMap {
    entity_ids(names, descriptions)
        .into_iter()
        .map(|id| {
            let text = descriptions
                .get(id)
                .filter(|d| !d.is_empty())
                .or_else(|| names.get(id))
                .cloned()
                .unwrap_or_default();
            (id.to_string(), text)
        })
        .collect()
}

/// Write `triplets` with their texts to `dst`. Returns the number of written lines.
pub fn write_processed_triplets(
    triplets: &[Triplet],
    entity_texts: &IdMap,
    relation_texts: &IdMap,
    dst: &Path,
) -> Result<usize, Error> {
    let mut writer = BufWriter::new(File::create(dst)?);
    let text = |m: &IdMap, id: &str| {
        m.get(id)
            .map(|t| t.split_whitespace().join(" "))
            .unwrap_or_default()
    };

    for t in triplets {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            t.head,
            t.relation,
            t.tail,
            text(entity_texts, &t.head),
            text(relation_texts, &t.relation),
            text(entity_texts, &t.tail),
        )?;
    }
    writer.flush()?;

    info!("wrote {} triplets to {}", triplets.len(), dst.display());
    Ok(triplets.len())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> IdMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn merge() {
        let names = map(&[("Q1", "Foo"), ("Q2", "Bar"), ("Q4", "Quux")]);
        let descriptions = map(&[("Q1", "a foo"), ("Q2", ""), ("Q3", "a baz")]);
        let merged = merge_descriptions(&names, &descriptions);
        assert_eq!(
            merged,
            map(&[("Q1", "a foo"), ("Q2", "Bar"), ("Q3", "a baz"), ("Q4", "Quux")])
        );
    }

    #[test]
    fn empty_split() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("valid.txt");
        File::create(&src).unwrap();

        let triplets = read_triplets(&src).unwrap();
        assert!(triplets.is_empty());

        let dst = dir.path().join("valid_processed.txt");
        let n = write_processed_triplets(&triplets, &IdMap::new(), &IdMap::new(), &dst).unwrap();
        assert_eq!(n, 0);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "");
    }

    #[test]
    fn export() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("train.txt");
        let mut f = File::create(&src).unwrap();
        write!(f, "Q1\tP1\tQ2\nbroken\tline\nQ2\tP9\tQ3\n").unwrap();

        let triplets = read_triplets(&src).unwrap();
        assert_eq!(triplets.len(), 2);

        let entities = map(&[("Q1", "a foo"), ("Q2", "a\tbar\n")]);
        let relations = map(&[("P1", "instance of")]);
        let dst = dir.path().join("train_processed.txt");
        let n = write_processed_triplets(&triplets, &entities, &relations, &dst).unwrap();
        assert_eq!(n, 2);

        let content = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(
            content,
            "Q1\tP1\tQ2\ta foo\tinstance of\ta bar\nQ2\tP9\tQ3\ta bar\t\t\n"
        );
    }
}
