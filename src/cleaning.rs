/*! Identifier and text cleaning.

One rule set per dataset. Every cleaner is total: inputs that do not follow
the dataset's identifier layout are returned unchanged.

| dataset    | raw                           | cleaned                       |
|------------|-------------------------------|-------------------------------|
| WN18RR     | `__dog_NN_1`                  | `dog`                         |
| WN18RR     | `_hypernym`                   | `hypernym`                    |
| FB15k-237  | `/people/person/nationality`  | `nationality person people`   |
| Wikidata5M | `Q42\tDouglas Adams\tAdams`   | `Douglas Adams`               |
!*/
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // __<lemma>_<pos>_<sense>, prefix is optional in some dumps
    static ref WN18RR_SYNSET: Regex = Regex::new(r"^(?:__)?(.+?)_[A-Za-z]{1,4}_\d+$").unwrap();
}

/// Strips the `__` prefix and the `_<POS>_<sense>` suffix of a WordNet synset name,
/// then replaces underscores with spaces.
pub fn clean_wn18rr_entity(raw: &str) -> String {
    match WN18RR_SYNSET.captures(raw) {
        Some(caps) => caps[1].replace('_', " ").trim().to_string(),
        None => raw.to_string(),
    }
}

/// WordNet relations only need their underscores replaced.
pub fn clean_wn18rr_relation(raw: &str) -> String {
    raw.replace('_', " ").trim().to_string()
}

/// Keeps the last segment of a namespaced Freebase path (`/m/027rn` -> `027rn`).
///
/// Values that do not start with `/` are plain names and are returned as-is.
pub fn clean_fb15k237_entity(raw: &str) -> String {
    if !raw.starts_with('/') {
        return raw.to_string();
    }
    match raw.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => raw.to_string(),
    }
}

/// Turns a Freebase relation path into words, leaf segment first.
///
/// Compound relations such as `/film/film/release_date_s./film/film_regional_release_date/release_date`
/// repeat segments, consecutive duplicates are collapsed.
pub fn clean_fb15k237_relation(raw: &str) -> String {
    let normalized = raw.replace("./", "/").replace('_', " ");
    let segments: Vec<&str> = normalized
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return raw.to_string();
    }

    let reversed = segments.into_iter().rev().join(" ");
    collapse_consecutive_duplicates(&reversed)
}

/// `a a b a` -> `a b a`
pub fn collapse_consecutive_duplicates(text: &str) -> String {
    text.split_whitespace().dedup().join(" ")
}

/// Wikidata5M lists several candidate labels per identifier, the first listed one is kept,
/// even when empty.
pub fn first_alternative<'a, I>(alternatives: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    alternatives.into_iter().next().map(str::trim)
}
