//! Raw dump to standardised schema.
use std::path::PathBuf;

use log::info;

use crate::datasets::Dataset;
use crate::error::Error;
use crate::io::save_tkg_to_folder;
use crate::kg::TextualKg;
use crate::processing::fill_missing_entries;
use crate::truncation::TruncationConfig;

use super::Pipeline;

/// Standardisation pipeline.
///
/// # Processing
/// - raw files of `src` are parsed (and cleaned) by the dataset parser,
/// - if a placeholder is set, missing entity names/descriptions are filled,
/// - if truncation is enabled, entity descriptions and relation names are truncated
///   to the configured limits of the dataset, `max_words` being the fallback.
///   Entity names are only truncated if the dataset has a `name` limit,
/// - the result is written to `dst`.
pub struct Standardise {
    dataset: Dataset,
    src: PathBuf,
    dst: PathBuf,
    placeholder: Option<String>,
    max_words: Option<usize>,
    config: TruncationConfig,
}

/// What a [Standardise] run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub entities: usize,
    pub relations: usize,
    pub filled_names: usize,
    pub filled_descriptions: usize,
}

impl Standardise {
    pub fn new(dataset: Dataset, src: PathBuf, dst: PathBuf, config: TruncationConfig) -> Self {
        Self {
            dataset,
            src,
            dst,
            placeholder: None,
            max_words: None,
            config,
        }
    }

    /// Fill missing entity entries with `placeholder`.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Enable truncation, `max_words` being used when the dataset has no configured limit.
    pub fn with_truncation(mut self, max_words: usize) -> Self {
        self.max_words = Some(max_words);
        self
    }

    /// Parse, fill and truncate, without writing.
    pub fn process(&self) -> Result<(TextualKg, Summary), Error> {
        info!("[{}] parsing {}", self.dataset, self.src.display());
        let mut tkg = self.dataset.parser().parse(&self.src)?;

        let (mut filled_names, mut filled_descriptions) = (0, 0);
        if let Some(placeholder) = &self.placeholder {
            let (names, descriptions) =
                fill_missing_entries(&tkg.entity_id2name, &tkg.entity_id2description, placeholder);
            filled_names = names.len() - tkg.entity_id2name.len();
            filled_descriptions = descriptions.len() - tkg.entity_id2description.len();
            info!(
                "[{}] filled {} names and {} descriptions",
                self.dataset, filled_names, filled_descriptions
            );
            tkg.entity_id2name = names;
            tkg.entity_id2description = descriptions;
        }

        if let Some(max_words) = self.max_words {
            info!("[{}] truncating", self.dataset);
            tkg = self
                .config
                .truncate_tkg(tkg, Some(self.dataset.name()), max_words);
        }

        let summary = Summary {
            entities: tkg.entity_ids().len(),
            relations: tkg.relation_id2name.len(),
            filled_names,
            filled_descriptions,
        };
        Ok((tkg, summary))
    }
}

impl Pipeline<Summary> for Standardise {
    fn run(&self) -> Result<Summary, Error> {
        let (tkg, summary) = self.process()?;
        save_tkg_to_folder(&tkg, &self.dst)?;
        info!("[{}] done: {:?}", self.dataset, summary);
        Ok(summary)
    }
}
