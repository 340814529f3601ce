use std::collections::HashSet;
use std::hash::Hash;

/// Checks whether `s` contains `x`.
pub fn contains<T: PartialEq>(s: Option<&[T]>, x: &T) -> bool {
    s.is_some_and(|s| s.contains(x))
}

/// Returns a copy of `s` with every occurrence of `x` removed.
pub fn remove<T: PartialEq + Clone>(s: Option<&[T]>, x: &T) -> Option<Vec<T>> {
    select(s, |y| y != x)
}

/// Returns the first `n` elements of `s`, or all of `s` if it is shorter than that.
pub fn first<T>(s: Option<&[T]>, n: usize) -> Option<&[T]> {
    s.map(|s| &s[..n.min(s.len())])
}

/// Returns the last `n` elements of `s`, or all of `s` if it is shorter than that.
pub fn last<T>(s: Option<&[T]>, n: usize) -> Option<&[T]> {
    s.map(|s| &s[s.len().saturating_sub(n)..])
}

/// Returns a copy of `s` in reverse order.
pub fn reverse<T: Clone>(s: Option<&[T]>) -> Option<Vec<T>> {
    s.map(|s| s.iter().rev().cloned().collect())
}

/// Compares two slices position by position, using `f` to compare elements.
///
/// Slices of different length are never equal. Absent and empty slices are always equal,
/// regardless of `f`.
pub fn equal_by<S, T, F>(s: Option<&[S]>, t: Option<&[T]>, mut f: F) -> bool
where
    F: FnMut(&S, &T) -> bool,
{
    let s = s.unwrap_or_default();
    let t = t.unwrap_or_default();
    s.len() == t.len() && s.iter().zip(t).all(|(x, y)| f(x, y))
}

/// Compares two slices of comparable elements. See [`equal_by`].
pub fn equal<T: PartialEq>(s: Option<&[T]>, t: Option<&[T]>) -> bool {
    equal_by(s, t, |x, y| x == y)
}

/// Removes duplicates from `s`, where two elements are duplicates if `f` maps them to the same key.
///
/// The first occurrence of each key is kept, in its original position.
pub fn uniq_by<S, K, F>(s: Option<&[S]>, mut f: F) -> Option<Vec<S>>
where
    S: Clone,
    K: Hash + Eq,
    F: FnMut(&S) -> K,
{
    let mut seen = HashSet::new();
    select(s, |x| seen.insert(f(x)))
}

/// Removes duplicates from `s`, keeping the first occurrence of each element. See [`uniq_by`].
pub fn uniq<T: Hash + Eq + Clone>(s: Option<&[T]>) -> Option<Vec<T>> {
    uniq_by(s, T::clone)
}

/// Maps every element of `s` through `f`, keeping length and order.
pub fn collect<S, T, F: FnMut(&S) -> T>(s: Option<&[S]>, f: F) -> Option<Vec<T>> {
    s.map(|s| s.iter().map(f).collect())
}

/// Returns the elements of `s` for which `f` holds, in their original order.
pub fn select<T: Clone, F: FnMut(&T) -> bool>(s: Option<&[T]>, mut f: F) -> Option<Vec<T>> {
    s.map(|s| s.iter().filter(|x| f(x)).cloned().collect())
}

/// Reports whether `f` holds for at least one element of `s`. False for absent or empty slices.
///
/// `any(s, f)` is equivalent to `!all(s, !f)` and `!none(s, f)`.
pub fn any<T, F: FnMut(&T) -> bool>(s: Option<&[T]>, f: F) -> bool {
    s.unwrap_or_default().iter().any(f)
}

/// Reports whether `f` holds for every element of `s`. True for absent or empty slices.
///
/// `all(s, f)` is equivalent to `!any(s, !f)` and `none(s, !f)`.
pub fn all<T, F: FnMut(&T) -> bool>(s: Option<&[T]>, f: F) -> bool {
    s.unwrap_or_default().iter().all(f)
}

/// Reports whether `f` holds for no element of `s`. True for absent or empty slices.
///
/// `none(s, f)` is equivalent to `!any(s, f)` and `all(s, !f)`.
pub fn none<T, F: FnMut(&T) -> bool>(s: Option<&[T]>, f: F) -> bool {
    !any(s, f)
}

/// Counts the elements of `s` for which `f` holds.
pub fn count<T, F: FnMut(&T) -> bool>(s: Option<&[T]>, mut f: F) -> usize {
    s.unwrap_or_default().iter().filter(|x| f(x)).count()
}
