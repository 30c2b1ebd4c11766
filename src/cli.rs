//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use kgtext::datasets::{Dataset, Variant};

#[derive(Debug, StructOpt)]
#[structopt(name = "kgtext", about = "textual knowledge graph standardisation tool.")]
/// Holds every command that is callable by the `kgtext` command.
pub enum Kgtext {
    #[structopt(about = "Standardise a raw dataset folder")]
    Standardise(Standardise),
    #[structopt(about = "Fill missing entity names/descriptions of a standardised folder")]
    FillMissing(FillMissing),
    #[structopt(about = "Truncate texts of a standardised folder with the dataset limits")]
    Truncate(Truncate),
    #[structopt(about = "Check consistency of entity mappings of a standardised folder")]
    Validate(Validate),
    #[structopt(about = "Write split files augmented with entity/relation texts")]
    Triplets(Triplets),
    #[structopt(about = "Show truncation limits")]
    Configs(Configs),
}

#[derive(Debug, StructOpt)]
/// Standardise command and parameters.
///
/// ```sh
/// kgtext-standardise
/// Standardise a raw dataset folder
///
/// USAGE:
///     kgtext standardise [FLAGS] [OPTIONS] <dataset> <src> <dst>
///
/// FLAGS:
///     -t, --truncate    truncate descriptions and relation names
///
/// OPTIONS:
///         --fill <placeholder>                  fill missing entity entries with placeholder
///         --max-words <max-words>               word limit when the dataset has none [default: 50]
///         --truncation-config <truncation-config>    json file overriding truncation limits
///
/// ARGS:
///     <dataset>    wn18rr, fb15k237 or wikidata5m
///     <src>        raw dataset folder
///     <dst>        destination folder
/// ```
pub struct Standardise {
    #[structopt(help = "wn18rr, fb15k237 or wikidata5m")]
    pub dataset: Dataset,
    #[structopt(parse(from_os_str), help = "raw dataset folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "fill", help = "fill missing entity entries with placeholder")]
    pub placeholder: Option<String>,
    #[structopt(short = "t", long = "truncate", help = "truncate descriptions and relation names")]
    pub truncate: bool,
    #[structopt(
        long = "max-words",
        default_value = "50",
        help = "word limit when the dataset has none"
    )]
    pub max_words: usize,
    #[structopt(
        parse(from_os_str),
        long = "truncation-config",
        help = "json file overriding truncation limits"
    )]
    pub truncation_config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct FillMissing {
    #[structopt(parse(from_os_str), help = "standardised folder (modified in place)")]
    pub dir: PathBuf,
    #[structopt(long = "placeholder", default_value = "-")]
    pub placeholder: String,
}

#[derive(Debug, StructOpt)]
pub struct Truncate {
    #[structopt(parse(from_os_str), help = "standardised folder (modified in place)")]
    pub dir: PathBuf,
    #[structopt(long = "dataset", help = "dataset whose limits are used")]
    pub dataset: Option<String>,
    #[structopt(
        long = "max-words",
        default_value = "50",
        help = "word limit when the dataset has none"
    )]
    pub max_words: usize,
    #[structopt(
        parse(from_os_str),
        long = "truncation-config",
        help = "json file overriding truncation limits"
    )]
    pub truncation_config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Validate {
    #[structopt(parse(from_os_str), help = "standardised folder")]
    pub dir: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Triplets {
    #[structopt(help = "wn18rr, fb15k237 or wikidata5m")]
    pub dataset: Dataset,
    #[structopt(parse(from_os_str), help = "raw dataset folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        long = "variant",
        default_value = "transductive",
        help = "wikidata5m setting: transductive or inductive"
    )]
    pub variant: Variant,
    #[structopt(
        parse(from_os_str),
        long = "truncation-config",
        help = "json file overriding truncation limits"
    )]
    pub truncation_config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Configs {
    #[structopt(
        parse(from_os_str),
        long = "truncation-config",
        help = "json file overriding truncation limits"
    )]
    pub truncation_config: Option<PathBuf>,
}
