//! Property tests for the merge sorter.

use party_kit::merge_sort;
use proptest::prelude::*;

proptest! {
    /// Output is non-decreasing under the predicate's order.
    #[test]
    fn sorted_output_is_non_decreasing(mut items in prop::collection::vec(any::<i32>(), 0..200)) {
        merge_sort(&mut items, |a, b| a < b);
        prop_assert!(items.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Output is a permutation of the input.
    #[test]
    fn sorted_output_is_permutation(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut sorted = items.clone();
        merge_sort(&mut sorted, |a, b| a < b);

        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// Sorting an already-sorted sequence changes nothing.
    #[test]
    fn sorting_sorted_input_is_identity(mut items in prop::collection::vec(any::<i32>(), 0..200)) {
        items.sort_unstable();
        let before = items.clone();
        merge_sort(&mut items, |a, b| a < b);
        prop_assert_eq!(items, before);
    }
}
