//! Pipelines.
//!
//! Each pipeline chains the stages of the toolkit (parsing, gap filling, truncation, writing)
//! behind the light [pipeline::Pipeline] trait.
//! Stages stay independently callable from [crate::datasets], [crate::processing],
//! [crate::truncation] and [crate::io].
pub mod pipeline;
mod standardise;
mod triplets;

pub use pipeline::Pipeline;
pub use standardise::{Standardise, Summary};
pub use triplets::ProcessTriplets;
