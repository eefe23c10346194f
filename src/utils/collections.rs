use std::collections::HashSet;

/// Keep the first item for every distinct key, in input order.
///
/// Returns references into `items`, so kept items are the originals.
pub fn dedupe_by_key<T, K, F>(items: &[T], mut key_fn: F) -> Vec<&T>
where
    K: std::hash::Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key_fn(*item)))
        .collect()
}
