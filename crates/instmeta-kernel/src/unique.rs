//! Order-preserving deduplication.
//!
//! Every derived list leaves its deriver through [`unique`], so no exposed
//! list ever carries the same entry twice.

use std::collections::HashSet;
use std::hash::Hash;

/// The distinct elements of `items`, in order of first occurrence.
///
/// Idempotent: `unique(unique(s)) == unique(s)`.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let deduped = unique(["<2,1>", "<1,2>", "<2,1>", "<2,0>", "<1,2>"]);
        assert_eq!(deduped, vec!["<2,1>", "<1,2>", "<2,0>"]);
    }

    #[test]
    fn empty_input_is_empty() {
        let deduped: Vec<i64> = unique(Vec::new());
        assert!(deduped.is_empty());
    }

    proptest! {
        /// Applying unique twice changes nothing.
        #[test]
        fn unique_is_idempotent(items in prop::collection::vec(0i64..8, 0..40)) {
            let once = unique(items.clone());
            let twice = unique(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Output is the input filtered to first occurrences.
        #[test]
        fn unique_preserves_first_seen_order(items in prop::collection::vec("[a-c]{1,2}", 0..40)) {
            let deduped = unique(items.clone());
            let mut expected: Vec<String> = Vec::new();
            for item in items {
                if !expected.contains(&item) {
                    expected.push(item);
                }
            }
            prop_assert_eq!(deduped, expected);
        }
    }
}
