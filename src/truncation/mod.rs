/*! Text truncation.

Word based truncation (SimKGC-compatible): text is split on whitespace and only the
first `n` words are kept, joined with single spaces.
A token based variant delegates splitting to a [Tokenizer].

Limits are resolved through a [TruncationConfig], keyed by dataset and [ContentType].
!*/
mod config;
mod tokens;

pub use config::{ContentType, DatasetLimits, TruncationConfig};
pub use tokens::{
    truncate_descriptions_by_tokens, truncate_text_by_tokens, Tokenizer, UnicodeWordTokenizer,
};

use itertools::Itertools;

/// Keep the first `max_words` whitespace-separated words of `text`.
///
/// Whitespace is always normalized to single spaces, even when nothing is cut.
pub fn truncate_text_by_words(text: &str, max_words: usize) -> String {
    text.split_whitespace().take(max_words).join(" ")
}
