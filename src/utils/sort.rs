//! Generic ordering helpers.

use std::cmp::Ordering;

/// Returns references to `items` ordered ascending by `key_fn`.
///
/// The input slice is left untouched. The key is recomputed on each
/// comparison, so callers with expensive keys over large collections
/// should precompute them.
///
/// The sort is stable: items with equal keys keep their original
/// relative order.
///
/// # Arguments
/// * `items` - The items to order.
/// * `key_fn` - Derives the sort key of an item.
///
/// # Time Complexity
/// *O*(*n log n*) comparisons, each calling `key_fn` twice.
pub fn sort_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| compare_keys(&key_fn(a), &key_fn(b)));
    sorted
}

/// Ternary comparison of two keys.
fn compare_keys<K: Ord>(a: &K, b: &K) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
