use crate::core::{Name, NameSorter};
use std::cmp::Ordering;

/// Orders names by last name, then by the space-joined given names.
///
/// Comparison folds each character to upper case and then compares code points, so it is
/// case-insensitive but not locale-aware. The sort is stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastNameFirstSorter;

impl LastNameFirstSorter {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(a: &Name, b: &Name) -> Ordering {
        compare_ignore_case(a.last_name(), b.last_name()).then_with(|| {
            compare_ignore_case(&a.given_names().join(" "), &b.given_names().join(" "))
        })
    }
}

impl NameSorter for LastNameFirstSorter {
    fn sort(&self, names: &[Name]) -> Vec<Name> {
        let mut sorted = names.to_vec();
        // stable: equal keys keep input order
        sorted.sort_by(Self::compare);
        sorted
    }
}

/// Simple case mapping: characters whose upper case is more than one character (`ß`) stay as they are.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}
