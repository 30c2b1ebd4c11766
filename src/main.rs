//! # kgtext
//!
//! Standardisation of textual knowledge graph datasets.
//!
//! ```sh
//! kgtext 0.1.0
//! textual knowledge graph standardisation tool.
//!
//! USAGE:
//!     kgtext <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     configs         Show truncation limits
//!     fill-missing    Fill missing entity names/descriptions of a standardised folder
//!     help            Prints this message or the help of the given subcommand(s)
//!     standardise     Standardise a raw dataset folder
//!     triplets        Write split files augmented with entity/relation texts
//!     truncate        Truncate texts of a standardised folder with the dataset limits
//!     validate        Check consistency of entity mappings of a standardised folder
//! ```
//!
//! Verbosity is set with `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::path::Path;

use structopt::StructOpt;

use kgtext::error::Error;
use kgtext::io::{load_tkg_from_folder, save_tkg_to_folder};
use kgtext::kg::TextualKg;
use kgtext::pipeline::{Pipeline, ProcessTriplets, Standardise};
use kgtext::processing::{fill_missing_entries, validate_entity_mappings};
use kgtext::truncation::TruncationConfig;

#[macro_use]
extern crate log;

mod cli;

fn truncation_config(path: Option<&Path>) -> Result<TruncationConfig, Error> {
    match path {
        Some(path) => TruncationConfig::from_path(path),
        None => Ok(TruncationConfig::default()),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Kgtext::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Kgtext::Standardise(s) => {
            let config = truncation_config(s.truncation_config.as_deref())?;
            let mut p = Standardise::new(s.dataset, s.src, s.dst.clone(), config);
            if let Some(placeholder) = s.placeholder {
                p = p.with_placeholder(placeholder);
            }
            if s.truncate {
                p = p.with_truncation(s.max_words);
            }
            let summary = p.run()?;
            println!(
                "{} entities, {} relations saved to {}",
                summary.entities,
                summary.relations,
                s.dst.display()
            );
        }

        cli::Kgtext::FillMissing(f) => {
            let tkg = load_tkg_from_folder(&f.dir)?;
            let (names, descriptions) = fill_missing_entries(
                &tkg.entity_id2name,
                &tkg.entity_id2description,
                &f.placeholder,
            );
            let tkg = TextualKg::new(names, descriptions, tkg.relation_id2name);
            save_tkg_to_folder(&tkg, &f.dir)?;
        }

        cli::Kgtext::Truncate(t) => {
            let config = truncation_config(t.truncation_config.as_deref())?;
            let tkg = load_tkg_from_folder(&t.dir)?;
            let tkg = config.truncate_tkg(tkg, t.dataset.as_deref(), t.max_words);
            save_tkg_to_folder(&tkg, &t.dir)?;
            info!("truncated {}", t.dir.display());
        }

        cli::Kgtext::Validate(v) => {
            let tkg = load_tkg_from_folder(&v.dir)?;
            let report = validate_entity_mappings(&tkg.entity_id2name, &tkg.entity_id2description);
            if report.is_valid() {
                println!("{}: entity mappings are consistent", v.dir.display());
            } else {
                for issue in &report.issues {
                    println!("{}", issue);
                }
                return Err(Error::Custom(format!(
                    "{} issues found in {}",
                    report.issues.len(),
                    v.dir.display()
                )));
            }
        }

        cli::Kgtext::Triplets(t) => {
            let config = truncation_config(t.truncation_config.as_deref())?;
            let p = ProcessTriplets::new(t.dataset, t.variant, t.src, t.dst, config);
            for (split, n) in p.run()? {
                println!("{split}: {n} triplets");
            }
        }

        cli::Kgtext::Configs(c) => {
            let config = truncation_config(c.truncation_config.as_deref())?;
            for dataset in config.datasets() {
                let limits = config.dataset_config(dataset)?;
                let limits: Vec<String> = limits
                    .iter()
                    .map(|(content_type, limit)| format!("{content_type}={limit}"))
                    .collect();
                println!("{dataset}\t{}", limits.join(" "));
            }
        }
    };
    Ok(())
}
