//! A module containing [`Pair`], a record of two independently typed values.

mod pair;

pub use pair::*;
