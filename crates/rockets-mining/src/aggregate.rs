//! Grouping and reduction over record collections.
//!
//! All results are `BTreeMap`s keyed by the derived attribute, so iterating a
//! result is deterministic. Groups keep their records in input order.

use std::collections::BTreeMap;
use std::ops::Add;

use num_traits::Zero;

/// Partition `records` by `key_fn`. Every record lands in exactly one group.
pub fn group_by<T, K, F>(
    records: impl IntoIterator<Item = T>,
    mut key_fn: F,
) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(&record)).or_default().push(record);
    }
    groups
}

/// [`group_by`] with a key function that can fail. Stops at the first error.
///
/// # Errors
///
/// Returns the first error produced by `key_fn`.
pub fn try_group_by<T, K, E, F>(
    records: impl IntoIterator<Item = T>,
    mut key_fn: F,
) -> Result<BTreeMap<K, Vec<T>>, E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for record in records {
        let key = key_fn(&record)?;
        groups.entry(key).or_default().push(record);
    }
    Ok(groups)
}

/// Size of every group.
#[must_use]
pub fn reduce_count<K: Ord + Clone, T>(groups: &BTreeMap<K, Vec<T>>) -> BTreeMap<K, usize> {
    groups.iter().map(|(k, v)| (k.clone(), v.len())).collect()
}

/// Sum `value_fn` per key.
///
/// A record whose value is `None` contributes nothing but still makes its
/// key appear, with the additive identity if nothing else adds to it.
///
/// # Errors
///
/// Returns the first error produced by `key_fn`.
pub fn reduce_sum<T, K, V, E>(
    records: impl IntoIterator<Item = T>,
    key_fn: impl FnMut(&T) -> Result<K, E>,
    value_fn: impl FnMut(&T) -> Option<V>,
) -> Result<BTreeMap<K, V>, E>
where
    K: Ord,
    V: Zero + Add<Output = V>,
{
    reduce_sum_seeded(std::iter::empty(), records, key_fn, value_fn)
}

/// [`reduce_sum`] where every key in `seed` is present in the result even if
/// no record maps to it.
///
/// # Errors
///
/// Returns the first error produced by `key_fn`.
pub fn reduce_sum_seeded<T, K, V, E>(
    seed: impl IntoIterator<Item = K>,
    records: impl IntoIterator<Item = T>,
    mut key_fn: impl FnMut(&T) -> Result<K, E>,
    mut value_fn: impl FnMut(&T) -> Option<V>,
) -> Result<BTreeMap<K, V>, E>
where
    K: Ord,
    V: Zero + Add<Output = V>,
{
    let mut sums: BTreeMap<K, V> = seed.into_iter().map(|key| (key, V::zero())).collect();
    for record in records {
        let key = key_fn(&record)?;
        let slot = sums.entry(key).or_insert_with(V::zero);
        if let Some(value) = value_fn(&record) {
            let current = std::mem::replace(slot, V::zero());
            *slot = current + value;
        }
    }
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn group_by_partitions_exactly() {
        let records = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        let groups = group_by(records.clone(), |n| n % 3);

        let mut regrouped: Vec<i32> = groups.values().flatten().copied().collect();
        let mut original = records;
        regrouped.sort_unstable();
        original.sort_unstable();
        assert_eq!(regrouped, original);

        for (key, members) in &groups {
            assert!(members.iter().all(|n| n % 3 == *key));
        }
    }

    #[test]
    fn groups_keep_input_order() {
        let groups = group_by(vec!["b1", "a1", "b2", "a2"], |s| s.as_bytes()[0]);
        assert_eq!(groups[&b'a'], vec!["a1", "a2"]);
        assert_eq!(groups[&b'b'], vec!["b1", "b2"]);
    }

    #[test]
    fn try_group_by_stops_at_first_error() {
        let result: Result<BTreeMap<i32, Vec<i32>>, String> =
            try_group_by(vec![1, 2, -1, 3], |n| {
                if *n < 0 {
                    Err(format!("negative: {n}"))
                } else {
                    Ok(n % 2)
                }
            });
        assert_eq!(result.unwrap_err(), "negative: -1");
    }

    #[test]
    fn reduce_count_sizes_groups() {
        let groups = group_by(vec!["x", "y", "x", "x"], |s| *s);
        let counts = reduce_count(&groups);
        assert_eq!(counts.get("x"), Some(&3));
        assert_eq!(counts.get("y"), Some(&1));
    }

    #[test]
    fn reduce_sum_is_exact_in_decimal() {
        let records = vec![("a", "567.50"), ("a", "453.01"), ("b", "123.32"), ("a", "0.1")];
        let sums = reduce_sum(
            records,
            |(k, _)| Ok::<_, Infallible>(*k),
            |(_, v)| Some(dec(v)),
        )
        .unwrap();
        assert_eq!(sums["a"], dec("1020.61"));
        assert_eq!(sums["b"], dec("123.32"));
    }

    #[test]
    fn absent_values_contribute_zero_but_keep_key() {
        let records: Vec<(&str, Option<u64>)> = vec![("a", Some(2)), ("b", None), ("a", None)];
        let sums = reduce_sum(
            records,
            |(k, _)| Ok::<_, Infallible>(*k),
            |(_, v)| *v,
        )
        .unwrap();
        assert_eq!(sums.get("a"), Some(&2));
        assert_eq!(sums.get("b"), Some(&0));
    }

    #[test]
    fn seeded_keys_survive_without_records() {
        let sums = reduce_sum_seeded(
            ["idle", "busy"],
            vec![("busy", dec("10.5"))],
            |(k, _)| Ok::<_, Infallible>(*k),
            |(_, v)| Some(v.clone()),
        )
        .unwrap();
        assert_eq!(sums.len(), 2);
        assert!(sums["idle"].is_zero());
        assert_eq!(sums["busy"], dec("10.5"));
    }
}
