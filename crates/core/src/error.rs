use thiserror::Error;

/// Everything that can go wrong while building coordinate values. All of
/// these are local validation failures; none of the math in this crate can
/// fail once a value has been constructed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HexError {
    /// Three cube components were given explicitly, but they don't fall on
    /// the plane `x + y + z = 0`
    #[error("invalid hex ({x}, {y}, {z}); must be on the plane x+y+z=0")]
    OffPlane { x: f64, y: f64, z: f64 },

    /// Fewer than two cube components were supplied, so the missing ones
    /// can't be derived
    #[error("must supply at least two of x, y, z, but got {given}")]
    MissingComponents { given: usize },

    /// A point was built from a sequence that didn't have exactly 2 elements
    #[error("cannot build a point from {len} components; expected 2")]
    PointLength { len: usize },

    /// A point was indexed with something other than 0 (x) or 1 (y)
    #[error("point index {index} out of range; must be 0 or 1")]
    PointIndex { index: usize },

    /// A direction was looked up with an index outside the 6-entry table
    #[error("direction index {index} out of range; must be in [0, 6)")]
    DirectionIndex { index: usize },
}
