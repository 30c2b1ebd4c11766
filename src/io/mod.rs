/*!
# IO utilities

Raw dump reading ([tsv]) and standardised schema saving/loading ([schema]).
!*/
pub mod schema;
pub mod tsv;

pub use schema::{load_tkg_from_folder, save_tkg_to_folder};
