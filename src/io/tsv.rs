/*! Tab separated raw files.

Raw dumps are read whole, one record per line, with no header and no quoting
(WordNet definitions contain unbalanced `"`).

Each file kind declares how many columns a record may have. Records outside of that
range, or with an empty first column, are skipped with a warning.
If no record survives, the file is considered unparseable.
!*/
use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;
use crate::kg::IdMap;

/// A valid line of a raw file, fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRecord {
    pub line: u64,
    pub fields: Vec<String>,
}

impl TsvRecord {
    /// first column.
    pub fn id(&self) -> &str {
        &self.fields[0]
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }
}

/// Read every valid record of `path`.
///
/// Fails with [Error::Parse] if the file can't be opened or read, or if it holds no valid record.
pub fn read_records(path: &Path, columns: RangeInclusive<usize>) -> Result<Vec<TsvRecord>, Error> {
    let file = File::open(path)
        .map_err(|e| Error::parse(path, format!("could not open file: {e}")))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::parse(path, e.to_string()))?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(idx as u64 + 1);

        let fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();

        if !columns.contains(&fields.len()) {
            warn!(
                "{}:{}: expected {:?} columns, got {}. Skipping.",
                path.display(),
                line,
                columns,
                fields.len()
            );
            skipped += 1;
            continue;
        }

        if fields[0].is_empty() {
            warn!("{}:{}: empty identifier. Skipping.", path.display(), line);
            skipped += 1;
            continue;
        }

        records.push(TsvRecord { line, fields });
    }

    debug!(
        "{}: {} valid records, {} skipped",
        path.display(),
        records.len(),
        skipped
    );

    if records.is_empty() {
        return Err(Error::parse(
            path,
            format!("no valid record ({skipped} malformed lines)"),
        ));
    }

    Ok(records)
}

/// Builds an [IdMap] while enforcing identifier uniqueness.
///
/// Inserting an identifier again with the same value is a no-op,
/// inserting it with another value fails with [Error::DuplicateIdentifier].
pub struct IdMapBuilder {
    path: PathBuf,
    map: IdMap,
}

impl IdMapBuilder {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            map: IdMap::new(),
        }
    }

    pub fn insert(&mut self, id: &str, value: String) -> Result<(), Error> {
        match self.map.get(id) {
            Some(existing) if *existing == value => Ok(()),
            Some(_) => Err(Error::DuplicateIdentifier {
                path: self.path.clone(),
                id: id.to_string(),
            }),
            None => {
                self.map.insert(id.to_string(), value);
                Ok(())
            }
        }
    }

    pub fn build(self) -> IdMap {
        self.map
    }
}
