//! Small generic helpers for working with maps, sets, slices and pairs.
//!
//! # Purpose
//! Most of what lives here is a few lines of iterator code. The value is in having one consistent
//! contract across all of it, so callers don't need to remember which helper drops an empty
//! input on the floor and which one hands it back.
//!
//! # Absent vs. Empty
//! Every helper distinguishes between a container that isn't there at all and one that is there
//! but holds nothing. An absent input is passed as [`None`], a present one as [`Some`]:
//!
//! - Functions that build a new container return [`None`] for [`None`] and an empty container for
//!   an empty one, never the other way around.
//! - Comparisons treat [`None`] as a container of length zero, so absent and empty compare equal.
//! - Predicates over an absent container follow the usual vacuous truth rules.
//!
//! An owned `Option<Vec<T>>` can be passed to the slice helpers with
//! [`Option::as_deref`].
//!
//! # Error Handling
//! Everything here is total, so nothing returns a [`Result`]. The helpers take absent and empty
//! inputs as part of their normal domain rather than treating them as failures.
//!
//! # Features
//! Each module sits behind a feature of the same name, all enabled by default. `sets` pulls in
//! `maps` because a [`Set`](sets::Set) is a map without values.

#![cfg_attr(docsrs, feature(doc_cfg))]

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "maps")]
#[cfg_attr(docsrs, doc(cfg(feature = "maps")))]
pub mod maps;
#[cfg(feature = "pairs")]
#[cfg_attr(docsrs, doc(cfg(feature = "pairs")))]
pub mod pairs;
#[cfg(feature = "sets")]
#[cfg_attr(docsrs, doc(cfg(feature = "sets")))]
pub mod sets;
#[cfg(feature = "slices")]
#[cfg_attr(docsrs, doc(cfg(feature = "slices")))]
pub mod slices;

#[cfg(test)]
pub(crate) mod util;
