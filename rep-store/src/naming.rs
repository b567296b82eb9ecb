//! Replication directory naming and ordering
//!
//! Replication directories are named `<prefix><N>` by the writing side.
//! Discovery re-derives the order purely from the names, never from file
//! system timestamps, so an aggregation run is reproducible on any copy of
//! the data.

use std::cmp::Ordering;

/// Extract the trailing maximal run of ASCII digits as the natural sort key.
///
/// `"Rep12"` → `Some(12)`, `"Rep"` → `None`, `"7"` → `Some(7)`.
pub fn trailing_number(name: &str) -> Option<u64> {
    let digits: String = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.chars().rev().collect::<String>().parse().ok()
}

/// Total order over replication names.
///
/// Numbered names sort ascending by their trailing number (ties broken by
/// the full name); unnumbered names sort after every numbered one, among
/// themselves lexicographically. `Rep2` < `Rep10`, and `Foo` lands last.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (trailing_number(a), trailing_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_number_extraction() {
        assert_eq!(trailing_number("Replication12"), Some(12));
        assert_eq!(trailing_number("Rep007"), Some(7));
        assert_eq!(trailing_number("42"), Some(42));
        assert_eq!(trailing_number("Rep"), None);
        assert_eq!(trailing_number(""), None);
        assert_eq!(trailing_number("Rep7b"), None);
    }

    #[test]
    fn numbered_names_sort_numerically() {
        let mut names = vec!["Rep2", "Rep10", "Rep1", "Foo"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Rep1", "Rep2", "Rep10", "Foo"]);
    }

    #[test]
    fn unnumbered_names_fall_back_to_lexicographic() {
        let mut names = vec!["beta", "alpha", "Run3", "gamma"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Run3", "alpha", "beta", "gamma"]);
    }

    #[test]
    fn ordering_is_transitive_over_mixed_keys() {
        // A total order: sorting any permutation gives the same sequence.
        let expected = vec!["A1", "B1", "A2", "Z9", "A", "B"];
        let mut names = vec!["B", "A2", "Z9", "A1", "A", "B1"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, expected);
    }
}
