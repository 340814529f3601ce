use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns all keys of `m`, in no particular order.
pub fn keys<K: Clone, V, S>(m: Option<&HashMap<K, V, S>>) -> Option<Vec<K>> {
    m.map(|m| m.keys().cloned().collect())
}

/// Returns all values of `m`, in no particular order. Duplicate values are kept.
pub fn values<K, V: Clone, S>(m: Option<&HashMap<K, V, S>>) -> Option<Vec<V>> {
    m.map(|m| m.values().cloned().collect())
}

/// Compares two maps, using `f` to compare values. Keys are still compared with [`Eq`].
///
/// Maps of different length are never equal. Absent and empty maps are always equal, regardless
/// of `f`.
pub fn equal_by<K, V, W, S, T, F>(
    m: Option<&HashMap<K, V, S>>,
    n: Option<&HashMap<K, W, T>>,
    mut f: F,
) -> bool
where
    K: Hash + Eq,
    S: BuildHasher,
    T: BuildHasher,
    F: FnMut(&V, &W) -> bool,
{
    if len(m) != len(n) {
        return false;
    }
    let (Some(m), Some(n)) = (m, n) else {
        // Both are absent or empty.
        return true;
    };
    for (k, v) in m {
        match n.get(k) {
            Some(w) if f(v, w) => {},
            _ => return false,
        }
    }
    true
}

/// Compares two maps of comparable values. See [`equal_by`].
pub fn equal<K, V, S, T>(m: Option<&HashMap<K, V, S>>, n: Option<&HashMap<K, V, T>>) -> bool
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    T: BuildHasher,
{
    equal_by(m, n, |v, w| v == w)
}

/// Maps every value of `m` through `f`, keeping the keys.
pub fn collect<K, V, W, S, F>(m: Option<&HashMap<K, V, S>>, mut f: F) -> Option<HashMap<K, W, S>>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V) -> W,
{
    let m = m?;
    let mut r = HashMap::with_capacity_and_hasher(m.len(), m.hasher().clone());
    for (k, v) in m {
        r.insert(k.clone(), f(v));
    }
    Some(r)
}

/// Returns the entries of `m` for which `f(key, value)` holds.
pub fn select<K, V, S, F>(m: Option<&HashMap<K, V, S>>, mut f: F) -> Option<HashMap<K, V, S>>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> bool,
{
    let m = m?;
    let mut r = HashMap::with_hasher(m.hasher().clone());
    for (k, v) in m {
        if f(k, v) {
            r.insert(k.clone(), v.clone());
        }
    }
    Some(r)
}

/// Returns the entries of `m` whose key is one of `keys`.
///
/// Keys that aren't in `m` are ignored, and requesting a key twice still yields one entry.
pub fn select_by_keys<'a, K, V, S, I>(
    m: Option<&HashMap<K, V, S>>,
    keys: I,
) -> Option<HashMap<K, V, S>>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = &'a K>,
{
    let m = m?;
    let mut r = HashMap::with_hasher(m.hasher().clone());
    for k in keys {
        if let Some((k, v)) = m.get_key_value(k) {
            r.insert(k.clone(), v.clone());
        }
    }
    Some(r)
}

/// Counts the entries of `m` for which `f(key, value)` holds.
pub fn count<K, V, S, F>(m: Option<&HashMap<K, V, S>>, mut f: F) -> usize
where
    F: FnMut(&K, &V) -> bool,
{
    m.map_or(0, |m| m.iter().filter(|&(k, v)| f(k, v)).count())
}

fn len<K, V, S>(m: Option<&HashMap<K, V, S>>) -> usize {
    m.map_or(0, HashMap::len)
}
