use std::hash::{BuildHasher, Hasher};

/// A hasher that sends every key to the same bucket, so lookups can only succeed by falling back
/// on [`Eq`].
#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}
