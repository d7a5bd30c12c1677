//! Stateless filter/search helpers over a store's full value sequence.

use shared_models::CallerIdentity;

/// Case-insensitive substring match of `needle` against each record's name,
/// preserving store order.
pub fn search_by_name<V>(
    values: Vec<V>,
    needle: &str,
    name_of: impl Fn(&V) -> &str,
) -> Vec<V> {
    let needle = needle.to_lowercase();
    values
        .into_iter()
        .filter(|value| name_of(value).to_lowercase().contains(&needle))
        .collect()
}

/// First record owned by `caller`, in store order. Ownership queries surface
/// a single record even when the caller owns several.
pub fn find_by_owner<V>(
    values: Vec<V>,
    caller: &CallerIdentity,
    owner_of: impl Fn(&V) -> &CallerIdentity,
) -> Option<V> {
    values.into_iter().find(|value| owner_of(value) == caller)
}

pub fn filter_by<V>(values: Vec<V>, pred: impl Fn(&V) -> bool) -> Vec<V> {
    values.into_iter().filter(|value| pred(value)).collect()
}
