//! This sub-module contains the basic unit types of the hex coordinate
//! system. See the parent module documentation for more info on the
//! coordinate system.

use crate::{
    error::HexError,
    hex::{DiagonalDirection, HexDirection, NeighborDirection},
};
use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::IntoEnumIterator;

/// Largest `|x + y + z|` we accept when all three components of a
/// [FractionalHex] are given explicitly. Anything within this is float error.
pub const PLANE_TOLERANCE: f64 = 1e-9;

/// A single cell in a hexagon grid, referenced by its integer cube
/// coordinates.
///
/// ## Implementation
///
/// Every cell falls on the plane `x + y + z = 0`, so this struct only stores
/// `x` and `y` and derives `z` as needed. Equality and hashing are derived
/// from the two stored components, which is exactly "same cell" semantics.
///
/// Arithmetic between hexes only ever combines `x` and `y`; the third
/// component is always recomputed, so the zero-sum invariant holds for every
/// value of this type no matter how it was produced.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct Hex {
    x: i32,
    y: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new hex from all three cube components. Returns an error
    /// if the components don't fall on the plane `x + y + z = 0`. If you only
    /// have two components, use [Self::new_xy], [Self::new_xz], or
    /// [Self::new_yz] instead.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, HexError> {
        // Summed wide so components near the i32 bounds can't overflow
        if i64::from(x) + i64::from(y) + i64::from(z) != 0 {
            Err(HexError::OffPlane {
                x: x.into(),
                y: y.into(),
                z: z.into(),
            })
        } else {
            Ok(Self::new_xy(x, y))
        }
    }

    /// Construct a new hex with the given x and y. Since x+y+z=0 for all
    /// hexes, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new hex with the given x and z. Since x+y+z=0 for all
    /// hexes, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new hex with the given y and z. Since x+y+z=0 for all
    /// hexes, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    /// Construct a hex from any combination of components where at most one
    /// is missing. The missing component is derived from the other two. If
    /// all three are given they must be consistent, same as [Self::new].
    pub fn from_components(
        x: Option<i32>,
        y: Option<i32>,
        z: Option<i32>,
    ) -> Result<Self, HexError> {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => Self::new(x, y, z),
            (Some(x), Some(y), None) => Ok(Self::new_xy(x, y)),
            (Some(x), None, Some(z)) => Ok(Self::new_xz(x, z)),
            (None, Some(y), Some(z)) => Ok(Self::new_yz(y, z)),
            (x, y, z) => Err(HexError::MissingComponents {
                given: [x, y, z].iter().filter(|c| c.is_some()).count(),
            }),
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Derived third component. Any hex built through [Self::new] has a
    /// representable `z`, even when `x + y` itself overflows `i32`.
    pub const fn z(&self) -> i32 {
        -(self.x as i64 + self.y as i64) as i32
    }

    /// Is this the origin? If x and y are both zero, z is too.
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Rotate this hex 60° to the left around the origin, `n` times. Six
    /// rotations bring a hex back to where it started, so only `n % 6`
    /// single-step rotations are actually applied.
    pub fn rotate_left(self, n: usize) -> Self {
        (0..n % 6).fold(self, |hex, _| Self::new_xy(-hex.z(), -hex.x()))
    }

    /// Rotate this hex 60° to the right around the origin, `n` times. See
    /// [Self::rotate_left].
    pub fn rotate_right(self, n: usize) -> Self {
        (0..n % 6).fold(self, |hex, _| Self::new_xy(-hex.y(), -hex.z()))
    }

    /// Get the hex that shares the given side with this one
    pub fn neighbor(self, direction: NeighborDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get the hex that touches the given corner of this one, without
    /// sharing a side
    pub fn diagonal(self, direction: DiagonalDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get an iterator of all the hexes directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in the same order as
    /// [NeighborDirection::ALL].
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        NeighborDirection::iter().map(move |dir| self.neighbor(dir))
    }

    /// Number of single steps between this hex and the origin
    pub fn magnitude(self) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Two adjacent cells always differ by one in exactly two components,
        // so the sum is always even
        let sum = u64::from(self.x.unsigned_abs())
            + u64::from(self.y.unsigned_abs())
            + u64::from(self.z().unsigned_abs());
        (sum / 2) as usize
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance(self, other: Hex) -> usize {
        (self - other).magnitude()
    }
}

impl ops::Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new_xy(self.x * rhs, self.y * rhs)
    }
}

impl ops::Mul<f64> for Hex {
    type Output = FractionalHex;

    fn mul(self, rhs: f64) -> Self::Output {
        FractionalHex::from(self) * rhs
    }
}

impl ops::Div<f64> for Hex {
    type Output = FractionalHex;

    fn div(self, rhs: f64) -> Self::Output {
        FractionalHex::from(self) / rhs
    }
}

impl TryFrom<(i32, i32, i32)> for Hex {
    type Error = HexError;

    fn try_from((x, y, z): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl TryFrom<[i32; 3]> for Hex {
    type Error = HexError;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

/// A position anywhere on the hex plane, not necessarily on a cell center.
/// These show up as intermediate values: interpolation, scaling by a real
/// factor, or projecting a pixel back into hex space. Use [Self::round] to
/// find the cell that contains the position.
///
/// Like [Hex], only `x` and `y` are stored and `z` is derived, so equality
/// compares those two components only. This type deliberately doesn't
/// implement `Hash`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct FractionalHex {
    x: f64,
    y: f64,
}

impl FractionalHex {
    /// Construct a fractional hex from all three cube components. The
    /// components must sum to zero, within [PLANE_TOLERANCE].
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, HexError> {
        // Written this way so NaN fails the check too
        if (x + y + z).abs() <= PLANE_TOLERANCE {
            Ok(Self::new_xy(x, y))
        } else {
            Err(HexError::OffPlane { x, y, z })
        }
    }

    pub fn new_xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn new_xz(x: f64, z: f64) -> Self {
        Self::new_xy(x, -x - z)
    }

    pub fn new_yz(y: f64, z: f64) -> Self {
        Self::new_xy(-y - z, y)
    }

    /// Fractional counterpart to [Hex::from_components]
    pub fn from_components(
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> Result<Self, HexError> {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => Self::new(x, y, z),
            (Some(x), Some(y), None) => Ok(Self::new_xy(x, y)),
            (Some(x), None, Some(z)) => Ok(Self::new_xz(x, z)),
            (None, Some(y), Some(z)) => Ok(Self::new_yz(y, z)),
            (x, y, z) => Err(HexError::MissingComponents {
                given: [x, y, z].iter().filter(|c| c.is_some()).count(),
            }),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        -(self.x + self.y)
    }

    /// Find the cell that contains this position.
    ///
    /// Each component is rounded independently (half to even), which
    /// can knock the result off the plane. The component that moved the
    /// furthest while rounding is the least trustworthy, so that one gets
    /// recomputed from the other two. On ties, x is only recomputed if its
    /// error is strictly the largest, then y if its error strictly beats z,
    /// otherwise z.
    ///
    /// Non-finite positions have no containing cell. NaN components round to
    /// 0 and infinities saturate, so a NaN position lands on the origin.
    /// Debug builds assert against both.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        debug_assert!(
            self.x.is_finite() && self.y.is_finite(),
            "cannot round non-finite hex {}",
            self
        );
        let (x, y, z) = (self.x(), self.y(), self.z());
        let (xi, yi, zi) =
            (x.round_ties_even(), y.round_ties_even(), z.round_ties_even());
        let x_diff = (xi - x).abs();
        let y_diff = (yi - y).abs();
        let z_diff = (zi - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            Hex::new_yz(yi as i32, zi as i32)
        } else if y_diff > z_diff {
            Hex::new_xz(xi as i32, zi as i32)
        } else {
            Hex::new_xy(xi as i32, yi as i32)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(other: Hex) -> Self {
        Self::new_xy(other.x().into(), other.y().into())
    }
}

impl ops::Mul<f64> for FractionalHex {
    type Output = FractionalHex;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new_xy(self.x * rhs, self.y * rhs)
    }
}

impl ops::Div<f64> for FractionalHex {
    type Output = FractionalHex;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new_xy(self.x / rhs, self.y / rhs)
    }
}
