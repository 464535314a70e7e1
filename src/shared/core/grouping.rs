use indexmap::IndexMap;
use std::hash::Hash;

/// Groups `items` by the key `key_of` extracts and folds each group into an
/// accumulator. Items for which `key_of` returns `None` are skipped.
///
/// Groups come back in the order their first item was seen.
pub fn group_by_key<T, K, A>(
    items: impl IntoIterator<Item = T>,
    key_of: impl Fn(&T) -> Option<K>,
    init: impl Fn(&T) -> A,
    mut accumulate: impl FnMut(&mut A, T),
) -> Vec<A>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, A> = IndexMap::new();
    for item in items {
        let Some(key) = key_of(&item) else {
            continue;
        };
        let accumulator = groups.entry(key).or_insert_with(|| init(&item));
        accumulate(accumulator, item);
    }
    groups.into_values().collect()
}
