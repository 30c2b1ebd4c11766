//! Per-dataset truncation limits.
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::kg::{IdMap, TextualKg};

use super::truncate_text_by_words;

/// Kind of text a limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Entity,
    Relation,
    Name,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Entity => "entity",
            ContentType::Relation => "relation",
            ContentType::Name => "name",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entity" => Ok(ContentType::Entity),
            "relation" => Ok(ContentType::Relation),
            "name" => Ok(ContentType::Name),
            other => Err(Error::Configuration(format!("unknown content type {other}"))),
        }
    }
}

/// Limits of a single dataset.
pub type DatasetLimits = BTreeMap<ContentType, usize>;

/// Word limits by dataset (lowercased) and content type.
///
/// [TruncationConfig::default] holds the SimKGC limits:
///
/// | dataset    | entity | relation | name |
/// |------------|--------|----------|------|
/// | wn18rr     | 50     | 30       |      |
/// | fb15k237   | 50     | 10       |      |
/// | wikidata5m | 50     | 30       | 10   |
///
/// The config is meant to be built once and handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruncationConfig {
    limits: BTreeMap<String, DatasetLimits>,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        let limits = [
            ("wn18rr", vec![(ContentType::Entity, 50), (ContentType::Relation, 30)]),
            ("fb15k237", vec![(ContentType::Entity, 50), (ContentType::Relation, 10)]),
            (
                "wikidata5m",
                vec![
                    (ContentType::Entity, 50),
                    (ContentType::Relation, 30),
                    (ContentType::Name, 10),
                ],
            ),
        ]
        .into_iter()
        .map(|(dataset, limits)| (dataset.to_string(), limits.into_iter().collect()))
        .collect();

        Self { limits }
    }
}

impl TruncationConfig {
    /// A config without any dataset.
    pub fn empty() -> Self {
        Self {
            limits: BTreeMap::new(),
        }
    }

    /// Built-in limits, overridden by the ones found in the json file at `path`.
    ///
    /// The file maps datasets to limits: `{"mydataset": {"entity": 40, "relation": 5}}`.
    /// Datasets present in the file replace the built-in entry.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let overrides: TruncationConfig = serde_json::from_reader(reader)?;

        let mut config = Self::default();
        for (dataset, limits) in overrides.limits {
            config.set_limits(&dataset, limits)?;
        }
        info!("loaded truncation config from {}", path.display());
        Ok(config)
    }

    /// Configured limit, or `default_limit` when the dataset or content type is unknown or not provided.
    pub fn limit(
        &self,
        dataset: Option<&str>,
        content_type: Option<ContentType>,
        default_limit: usize,
    ) -> usize {
        match (dataset, content_type) {
            (Some(dataset), Some(content_type)) => self
                .get(dataset, content_type)
                .unwrap_or(default_limit),
            _ => default_limit,
        }
    }

    /// Configured limit, failing when there is none.
    pub fn require_limit(&self, dataset: &str, content_type: ContentType) -> Result<usize, Error> {
        self.get(dataset, content_type).ok_or_else(|| {
            Error::Configuration(format!(
                "no {content_type} truncation limit configured for dataset {dataset}"
            ))
        })
    }

    /// Configured limit, if any.
    pub fn get(&self, dataset: &str, content_type: ContentType) -> Option<usize> {
        self.limits
            .get(&dataset.to_lowercase())
            .and_then(|limits| limits.get(&content_type))
            .copied()
    }

    /// Add or replace the limits of a dataset.
    pub fn add(&mut self, dataset: &str, entity_limit: usize, relation_limit: usize) -> Result<(), Error> {
        let limits = [
            (ContentType::Entity, entity_limit),
            (ContentType::Relation, relation_limit),
        ]
        .into_iter()
        .collect();
        self.set_limits(dataset, limits)
    }

    fn set_limits(&mut self, dataset: &str, limits: DatasetLimits) -> Result<(), Error> {
        if dataset.trim().is_empty() {
            return Err(Error::Configuration("empty dataset name".to_string()));
        }
        if let Some((content_type, _)) = limits.iter().find(|(_, limit)| **limit == 0) {
            return Err(Error::Configuration(format!(
                "{content_type} limit of {dataset} must be positive"
            )));
        }

        debug!("truncation limits for {dataset}: {limits:?}");
        self.limits.insert(dataset.to_lowercase(), limits);
        Ok(())
    }

    /// Sorted names of configured datasets.
    pub fn datasets(&self) -> Vec<&str> {
        self.limits.keys().map(String::as_str).collect()
    }

    pub fn dataset_config(&self, dataset: &str) -> Result<DatasetLimits, Error> {
        self.limits
            .get(&dataset.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                Error::Configuration(format!("dataset {dataset} has no truncation configuration"))
            })
    }

    /// Truncate every value of `descriptions`.
    ///
    /// The limit is looked up for `dataset`/`content_type`, `max_words` being the fallback.
    pub fn truncate_descriptions(
        &self,
        descriptions: &IdMap,
        max_words: usize,
        dataset: Option<&str>,
        content_type: Option<ContentType>,
    ) -> IdMap {
        let limit = self.limit(dataset, content_type, max_words);
        debug!(
            "truncating {} texts to {} words ({:?}/{:?})",
            descriptions.len(),
            limit,
            dataset,
            content_type
        );

        descriptions
            .iter()
            .map(|(id, text)| (id.clone(), truncate_text_by_words(text, limit)))
            .collect()
    }

    /// Truncate a whole graph with the limits of `dataset`, `max_words` being the fallback.
    ///
    /// Entity descriptions and relation names are always truncated.
    /// Entity names are only truncated when the dataset has a `name` limit.
    pub fn truncate_tkg(&self, tkg: TextualKg, dataset: Option<&str>, max_words: usize) -> TextualKg {
        let entity_id2description = self.truncate_descriptions(
            &tkg.entity_id2description,
            max_words,
            dataset,
            Some(ContentType::Entity),
        );
        let relation_id2name = self.truncate_descriptions(
            &tkg.relation_id2name,
            max_words,
            dataset,
            Some(ContentType::Relation),
        );
        let name_limit = dataset.and_then(|dataset| self.get(dataset, ContentType::Name));
        let entity_id2name = match name_limit {
            Some(limit) => self.truncate_descriptions(&tkg.entity_id2name, limit, None, None),
            None => tkg.entity_id2name,
        };

        TextualKg::new(entity_id2name, entity_id2description, relation_id2name)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_limits() {
        let c = TruncationConfig::default();
        assert_eq!(c.limit(Some("wn18rr"), Some(ContentType::Entity), 0), 50);
        assert_eq!(c.limit(Some("wn18rr"), Some(ContentType::Relation), 0), 30);
        assert_eq!(c.limit(Some("fb15k237"), Some(ContentType::Relation), 0), 10);
        assert_eq!(c.limit(Some("wikidata5m"), Some(ContentType::Name), 0), 10);
        assert_eq!(c.limit(Some("WN18RR"), Some(ContentType::Entity), 0), 50);
    }

    #[test]
    fn fallback() {
        let c = TruncationConfig::default();
        assert_eq!(c.limit(Some("wn18rr"), Some(ContentType::Name), 7), 7);
        assert_eq!(c.limit(Some("unknown"), Some(ContentType::Entity), 42), 42);
        assert_eq!(c.limit(None, Some(ContentType::Entity), 42), 42);
        assert_eq!(c.limit(Some("wn18rr"), None, 42), 42);
    }

    #[test]
    fn add_overrides() {
        let mut c = TruncationConfig::default();
        c.add("x", 5, 3).unwrap();
        assert_eq!(c.limit(Some("x"), Some(ContentType::Entity), 50), 5);
        assert_eq!(c.limit(Some("x"), Some(ContentType::Relation), 50), 3);

        c.add("wikidata5m", 20, 4).unwrap();
        assert_eq!(c.limit(Some("wikidata5m"), Some(ContentType::Entity), 0), 20);
        // the whole entry is replaced
        assert_eq!(c.limit(Some("wikidata5m"), Some(ContentType::Name), 99), 99);
    }

    #[test]
    fn add_rejects_zero() {
        let mut c = TruncationConfig::default();
        assert!(matches!(c.add("x", 0, 3), Err(Error::Configuration(_))));
        assert!(matches!(c.add("", 1, 3), Err(Error::Configuration(_))));
        assert!(c.dataset_config("x").is_err());
    }

    #[test]
    fn require_limit() {
        let c = TruncationConfig::default();
        assert_eq!(c.require_limit("fb15k237", ContentType::Entity).unwrap(), 50);
        assert!(matches!(
            c.require_limit("fb15k237", ContentType::Name),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn listing() {
        let c = TruncationConfig::default();
        assert_eq!(c.datasets(), vec!["fb15k237", "wikidata5m", "wn18rr"]);
        let wn = c.dataset_config("WN18RR").unwrap();
        assert_eq!(wn.get(&ContentType::Entity), Some(&50));
        assert_eq!(TruncationConfig::empty().datasets().len(), 0);
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"custom": {{"entity": 12, "relation": 4}}, "FB15k237": {{"entity": 8}}}}"#)
            .unwrap();

        let c = TruncationConfig::from_path(f.path()).unwrap();
        assert_eq!(c.limit(Some("custom"), Some(ContentType::Entity), 0), 12);
        assert_eq!(c.limit(Some("fb15k237"), Some(ContentType::Entity), 0), 8);
        assert_eq!(c.limit(Some("fb15k237"), Some(ContentType::Relation), 1), 1);
        assert_eq!(c.limit(Some("wn18rr"), Some(ContentType::Entity), 0), 50);
    }

    #[test]
    fn truncate_descriptions() {
        let c = TruncationConfig::default();
        let descriptions: IdMap = [
            ("r1", "a b c d e f g h i j k l"),
            ("r2", "short"),
            ("r3", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let t = c.truncate_descriptions(&descriptions, 3, Some("fb15k237"), Some(ContentType::Relation));
        assert_eq!(t["r1"], "a b c d e f g h i j");
        assert_eq!(t["r2"], "short");
        assert_eq!(t["r3"], "");
        assert_eq!(t.keys().collect::<Vec<_>>(), descriptions.keys().collect::<Vec<_>>());

        let t = c.truncate_descriptions(&descriptions, 3, None, None);
        assert_eq!(t["r1"], "a b c");
    }

    #[test]
    fn truncate_tkg_names() {
        let c = TruncationConfig::default();
        let long = (0..20).map(|x| format!("w{x}")).collect::<Vec<_>>().join(" ");
        let map = |v: &str| -> IdMap { [("x".to_string(), v.to_string())].into_iter().collect() };
        let tkg = TextualKg::new(map(&long), map(&long), map(&long));

        let wiki = c.truncate_tkg(tkg.clone(), Some("wikidata5m"), 5);
        assert_eq!(wiki.entity_id2name["x"].split_whitespace().count(), 10);
        assert_eq!(wiki.entity_id2description["x"], long);
        assert_eq!(wiki.relation_id2name["x"], long);

        let fb = c.truncate_tkg(tkg.clone(), Some("fb15k237"), 5);
        assert_eq!(fb.entity_id2name["x"], long);
        assert_eq!(fb.relation_id2name["x"].split_whitespace().count(), 10);

        let none = c.truncate_tkg(tkg, None, 5);
        assert_eq!(none.entity_id2name["x"], long);
        assert_eq!(none.entity_id2description["x"].split_whitespace().count(), 5);
    }
}
