//! Token based truncation.
//!
//! Same contract as [super::truncate_text_by_words], with tokens provided by a [Tokenizer].
use std::ops::Range;

use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

use crate::kg::IdMap;

/// Splits text into tokens.
pub trait Tokenizer {
    /// Byte ranges of the tokens of `text`, in order and non overlapping.
    fn token_spans(&self, text: &str) -> Vec<Range<usize>>;

    fn count_tokens(&self, text: &str) -> usize {
        self.token_spans(text).len()
    }
}

/// Unicode word-boundary tokenizer (UAX#29). Punctuation marks are tokens, whitespace is not.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn token_spans(&self, text: &str) -> Vec<Range<usize>> {
        text.split_word_bound_indices()
            .filter(|(_, token)| !token.trim().is_empty())
            .map(|(start, token)| start..start + token.len())
            .collect()
    }
}

/// Keep the text up to the end of the `max_tokens`-th token.
///
/// Whitespace of the kept part is normalized to single spaces.
pub fn truncate_text_by_tokens<T: Tokenizer + ?Sized>(
    text: &str,
    max_tokens: usize,
    tokenizer: &T,
) -> String {
    if max_tokens == 0 {
        return String::new();
    }

    let spans = tokenizer.token_spans(text);
    let end = match spans.get(max_tokens - 1) {
        Some(span) if spans.len() > max_tokens => span.end,
        _ => text.len(),
    };

    text[..end].split_whitespace().join(" ")
}

pub fn truncate_descriptions_by_tokens<T: Tokenizer + ?Sized>(
    descriptions: &IdMap,
    max_tokens: usize,
    tokenizer: &T,
) -> IdMap {
    descriptions
        .iter()
        .map(|(id, text)| (id.clone(), truncate_text_by_tokens(text, max_tokens, tokenizer)))
        .collect()
}
