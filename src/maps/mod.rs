//! Helpers over [`HashMap`](std::collections::HashMap)s.
//!
//! Each function accepts an `Option<&HashMap<K, V, S>>`, where [`None`] stands for an absent map.
//! Functions returning a map hand back [`None`] for an absent input and an empty map for an
//! empty one. Returned maps are built with a clone of the input's hasher.
//!
//! Iteration order of a [`HashMap`](std::collections::HashMap) is unspecified, so the order of
//! [`keys`] and [`values`] is too.

mod maps;

pub use maps::*;
