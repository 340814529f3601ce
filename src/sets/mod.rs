//! A module containing [`Set`] and its iterators.
//!
//! A [`Set`] is a [`HashMap`](std::collections::HashMap) whose values carry no information. It
//! can only be obtained through one of its constructors or the [`set!`](crate::set) macro, so
//! there is no such thing as an uninitialized set.
//!
//! [`Set::add`] and [`Set::delete`] are the only operations in this crate which mutate their
//! input. They take `&mut self`, so sharing a set between threads while mutating it requires
//! external synchronization, as usual.

mod iter;
mod set;

pub use iter::*;
pub use set::*;

/// Creates a [`Set`] containing the given elements. Duplicates collapse into one element.
///
/// ```
/// use generics::set;
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
///
/// let empty: generics::sets::Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::sets::Set::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::sets::Set::from([$($x),+])
    };
}
