use derive_more::{Display, From, Into};

/// An immutable pair of two values. The fields can be read, but not replaced.
///
/// Converts to and from a tuple `(X, Y)`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into)]
#[display("({x}, {y})")]
pub struct Pair<X, Y> {
    x: X,
    y: Y,
}

impl<X, Y> Pair<X, Y> {
    pub const fn new(x: X, y: Y) -> Pair<X, Y> {
        Pair { x, y }
    }

    pub const fn x(&self) -> &X {
        &self.x
    }

    pub const fn y(&self) -> &Y {
        &self.y
    }

    /// Consumes the pair, returning both of its values.
    pub fn into_inner(self) -> (X, Y) {
        (self.x, self.y)
    }
}
