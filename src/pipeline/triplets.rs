//! Split files to text-augmented triplet files (`<split>_processed.txt`).
use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::datasets::{Dataset, Variant, SPLITS};
use crate::error::Error;
use crate::processing::merge_descriptions;
use crate::processing::triplets::{read_triplets, write_processed_triplets};
use crate::truncation::{ContentType, TruncationConfig};

use super::Pipeline;

/// Fallback word limits when the dataset is not configured.
const ENTITY_MAX_WORDS: usize = 50;
const RELATION_MAX_WORDS: usize = 30;

/// Writes, for each split found in `src`, a processed split in `dst`.
///
/// Entity texts are descriptions (names when missing), relation texts are relation names,
/// both truncated with the dataset limits.
pub struct ProcessTriplets {
    dataset: Dataset,
    variant: Variant,
    src: PathBuf,
    dst: PathBuf,
    config: TruncationConfig,
}

impl ProcessTriplets {
    pub fn new(
        dataset: Dataset,
        variant: Variant,
        src: PathBuf,
        dst: PathBuf,
        config: TruncationConfig,
    ) -> Self {
        Self {
            dataset,
            variant,
            src,
            dst,
            config,
        }
    }
}

impl Pipeline<Vec<(String, usize)>> for ProcessTriplets {
    /// Returns the number of triplets written for each processed split.
    fn run(&self) -> Result<Vec<(String, usize)>, Error> {
        let tkg = self.dataset.parser().parse(&self.src)?;
        let dataset = Some(self.dataset.name());

        let entity_texts = self.config.truncate_descriptions(
            &merge_descriptions(&tkg.entity_id2name, &tkg.entity_id2description),
            ENTITY_MAX_WORDS,
            dataset,
            Some(ContentType::Entity),
        );
        let relation_texts = self.config.truncate_descriptions(
            &tkg.relation_id2name,
            RELATION_MAX_WORDS,
            dataset,
            Some(ContentType::Relation),
        );

        fs::create_dir_all(&self.dst)?;

        let mut written = Vec::new();
        for split in SPLITS {
            let src = self.dataset.split_path(&self.src, split, self.variant);
            if !src.exists() {
                warn!("[{}] {} not found, skipping {split}", self.dataset, src.display());
                continue;
            }

            info!("[{}] processing {split}", self.dataset);
            let triplets = read_triplets(&src)?;
            let dst = self.dst.join(format!("{split}_processed.txt"));
            let n = write_processed_triplets(&triplets, &entity_texts, &relation_texts, &dst)?;
            written.push((split.to_string(), n));
        }

        if written.is_empty() {
            return Err(Error::parse(
                &self.src,
                format!("no split file found for {}", self.dataset),
            ));
        }
        Ok(written)
    }
}
