/*! Raw dataset parsers.

Each supported dataset has its own module exposing per-file parsing functions, and a
unit struct implementing [DatasetParser] over a folder of raw files as provided by the downloader.

Parsers clean identifiers as they go, reject conflicting duplicate identifiers
and skip (with a warning) lines that do not have the expected layout.
!*/
pub mod fb15k237;
pub mod wikidata5m;
pub mod wn18rr;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::io::tsv::{read_records, IdMapBuilder};
use crate::kg::{IdMap, TextualKg};
use crate::processing::triplets::read_triplets;

pub use fb15k237::Fb15k237;
pub use wikidata5m::Wikidata5m;
pub use wn18rr::Wn18rr;

/// Split names, in processing order.
pub const SPLITS: [&str; 3] = ["train", "valid", "test"];

/// Turns a folder of raw files into standardised mappings.
pub trait DatasetParser {
    /// (entity names, entity descriptions)
    fn entity_mappings(&self, src: &Path) -> Result<(IdMap, IdMap), Error>;
    fn relation_mapping(&self, src: &Path) -> Result<IdMap, Error>;

    fn parse(&self, src: &Path) -> Result<TextualKg, Error> {
        let (names, descriptions) = self.entity_mappings(src)?;
        let relations = self.relation_mapping(src)?;
        Ok(TextualKg::new(names, descriptions, relations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Wn18rr,
    Fb15k237,
    Wikidata5m,
}

/// Wikidata5M evaluation setting. Only changes which split files are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Transductive,
    Inductive,
}

impl Dataset {
    /// Lowercase name, also used as truncation config key.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Wn18rr => "wn18rr",
            Dataset::Fb15k237 => "fb15k237",
            Dataset::Wikidata5m => "wikidata5m",
        }
    }

    pub fn parser(&self) -> Box<dyn DatasetParser> {
        match self {
            Dataset::Wn18rr => Box::new(Wn18rr),
            Dataset::Fb15k237 => Box::new(Fb15k237),
            Dataset::Wikidata5m => Box::new(Wikidata5m),
        }
    }

    /// Location of a split file in `src`.
    ///
    /// Wikidata5M ships `wikidata5m_<variant>_<split>.txt`, SimKGC layouts symlink them to `<split>.txt`.
    /// The former is preferred when it exists.
    pub fn split_path(&self, src: &Path, split: &str, variant: Variant) -> PathBuf {
        let plain = src.join(format!("{split}.txt"));
        match self {
            Dataset::Wikidata5m => {
                let full = src.join(format!("wikidata5m_{variant}_{split}.txt"));
                if full.exists() {
                    full
                } else {
                    plain
                }
            }
            _ => plain,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "wn18rr" => Ok(Dataset::Wn18rr),
            "fb15k237" => Ok(Dataset::Fb15k237),
            "wikidata5m" | "wiki5m" => Ok(Dataset::Wikidata5m),
            _ => Err(Error::UnknownDataset(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Transductive => f.write_str("transductive"),
            Variant::Inductive => f.write_str("inductive"),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transductive" | "trans" => Ok(Variant::Transductive),
            "inductive" | "ind" => Ok(Variant::Inductive),
            other => Err(Error::Configuration(format!(
                "variant must be transductive or inductive, got {other}"
            ))),
        }
    }
}

/// Relation dictionaries hold `<relation_id>` or `<index>\t<relation_id>` lines.
/// The relation id (last column) is the key, its cleaned version the name.
pub(crate) fn relation_dictionary(path: &Path, clean: fn(&str) -> String) -> Result<IdMap, Error> {
    let records = read_records(path, 1..=2)?;
    let mut map = IdMapBuilder::new(path);
    for record in &records {
        let id = record.fields.last().map(String::as_str).unwrap_or_default();
        if id.is_empty() {
            continue;
        }
        map.insert(id, clean(id))?;
    }
    Ok(map.build())
}

/// Relations used in `head\trelation\ttail` split files, named with `clean`.
pub fn relations_from_triplets(paths: &[PathBuf], clean: fn(&str) -> String) -> Result<IdMap, Error> {
    let mut relations = IdMap::new();
    for path in paths {
        for triplet in read_triplets(path)? {
            relations
                .entry(triplet.relation)
                .or_insert_with_key(|id| clean(id));
        }
    }

    if relations.is_empty() {
        let path = paths.first().cloned().unwrap_or_default();
        return Err(Error::parse(path, "no relation found in split files"));
    }
    Ok(relations)
}
