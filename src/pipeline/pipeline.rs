//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline, generic over what the run returns
/// so that callers (the cli, tests) can report on it.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
