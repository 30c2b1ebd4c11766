//! Consistency checks on entity mappings.
use std::fmt;

use crate::kg::IdMap;

/// A consistency problem found in entity mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptyNames(usize),
    EmptyDescriptions(usize),
    MissingNames(usize),
    MissingDescriptions(usize),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::EmptyNames(n) => write!(f, "found {n} entities with empty names"),
            Issue::EmptyDescriptions(n) => write!(f, "found {n} entities with empty descriptions"),
            Issue::MissingNames(n) => write!(f, "found {n} entities with descriptions but no names"),
            Issue::MissingDescriptions(n) => {
                write!(f, "found {n} entities with names but no descriptions")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks for blank values and identifiers present in only one of the mappings.
pub fn validate_entity_mappings(names: &IdMap, descriptions: &IdMap) -> ValidationReport {
    let blank = |m: &IdMap| m.values().filter(|v| v.trim().is_empty()).count();
    let missing_in = |target: &IdMap, source: &IdMap| {
        source.keys().filter(|id| !target.contains_key(*id)).count()
    };

    let counts: [(usize, fn(usize) -> Issue); 4] = [
        (blank(names), Issue::EmptyNames),
        (blank(descriptions), Issue::EmptyDescriptions),
        (missing_in(names, descriptions), Issue::MissingNames),
        (missing_in(descriptions, names), Issue::MissingDescriptions),
    ];

    let issues = counts
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, issue)| issue(count))
        .collect();

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::fill_missing_entries;

    fn map(pairs: &[(&str, &str)]) -> IdMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn valid() {
        let names = map(&[("Q1", "Foo")]);
        let descriptions = map(&[("Q1", "a foo")]);
        assert!(validate_entity_mappings(&names, &descriptions).is_valid());
    }

    #[test]
    fn issues() {
        let names = map(&[("Q1", " "), ("Q3", "Bar")]);
        let descriptions = map(&[("Q1", "d"), ("Q2", ""), ("Q4", "")]);

        let report = validate_entity_mappings(&names, &descriptions);
        assert!(!report.is_valid());
        assert_eq!(
            report.issues,
            vec![
                Issue::EmptyNames(1),
                Issue::EmptyDescriptions(2),
                Issue::MissingNames(2),
                Issue::MissingDescriptions(1),
            ]
        );
        assert_eq!(
            report.issues[2].to_string(),
            "found 2 entities with descriptions but no names"
        );
    }

    #[test]
    fn filled_is_consistent() {
        let names = map(&[("Q1", "Foo")]);
        let descriptions = map(&[("Q2", "d2")]);
        let (n, d) = fill_missing_entries(&names, &descriptions, "-");
        assert!(validate_entity_mappings(&n, &d).is_valid());
    }
}
