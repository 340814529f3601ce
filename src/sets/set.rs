use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::Iter;
use crate::maps;

/// A set of unique elements, relying on the elements implementing [`Hash`].
///
/// Equality between sets ignores the hasher and compares contents only.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(1)`* |
/// | `add` | `O(1)`* |
/// | `delete` | `O(1)`* |
/// | `values` | `O(n)` |
/// | `eq` | `O(n)`* |
///
/// \* Amortized, and assuming few hash collisions.
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    // Unit values take no space, which leaves a map of keys.
    pub(crate) inner: HashMap<T, (), S>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set using the default hasher.
    pub fn new() -> Set<T> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty Set which can hold at least `cap` elements without reallocating.
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Creates a new, empty Set which will use `hasher` to hash its elements.
    pub fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns the elements of the Set as a [`Vec`], in no particular order.
    ///
    /// Unlike the helpers in [`maps`], this never returns an absent result: an empty Set produces
    /// an empty [`Vec`].
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        maps::keys(Some(&self.inner)).unwrap_or_default()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Adds `item` to the Set. Adding an element which is already present does nothing.
    pub fn add(&mut self, item: T) {
        let added = self.inner.insert(item, ()).is_none();
        tracing::trace!(added, len = self.len(), "set add");
    }

    /// Removes `item` from the Set. Deleting an element which isn't present does nothing.
    pub fn delete<Q>(&mut self, item: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let deleted = self.inner.remove(item).is_some();
        tracing::trace!(deleted, len = self.len(), "set delete");
    }

    /// Returns an iterator over all elements in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, S: BuildHasher, R: BuildHasher> PartialEq<Set<T, R>> for Set<T, S> {
    fn eq(&self, other: &Set<T, R>) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        let mut set = Set::with_cap(N);
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = Set::with_hasher(S::default());
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T: Hash + Eq + Debug, S: BuildHasher> Debug for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, S: BuildHasher> Display for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
