/*! Processing of standardised mappings.

Every function here borrows its inputs and returns new mappings.

- [fill_missing_entries]: complete entity names/descriptions with a placeholder.
- [validate_entity_mappings]: report blank or one-sided entities.
- [triplets]: join split files with entity and relation texts.
!*/
mod fill;
pub mod triplets;
mod validate;

pub use fill::fill_missing_entries;
pub use triplets::{merge_descriptions, Triplet};
pub use validate::{validate_entity_mappings, Issue, ValidationReport};
