//! Helpers over slices.
//!
//! Each function accepts an `Option<&[T]>`, where [`None`] stands for an absent sequence. Functions
//! building a new sequence return [`None`] for an absent input and an empty [`Vec`] for an empty
//! one, even when every element was filtered out. The input is never modified.
//!
//! [`first`] and [`last`] are the exception: they return a sub-slice borrowed from the input rather
//! than a copy.

mod slices;
mod sort;

pub use slices::*;
pub use sort::*;
