use crate::error::HexError;
use derive_more::{Display, From, Into, Neg};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D pixel space. This isn't used at all by the hex math itself,
/// but is what a [Layout](crate::Layout) projects hexes into (and back out
/// of). These positions aren't really useful outside of rendering and input
/// handling, so stick to [Hex](crate::Hex) for stuff like distances and
/// paths.
///
/// Arithmetic works component-wise between two points, or broadcasts a
/// scalar to both components.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both components to the nearest integer. Ties round to even,
    /// same as hex rounding, so `(0.5, -2.5)` becomes `(0, -2)`.
    pub fn round(self) -> Self {
        Self::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Get a component by index: 0 is x, 1 is y. Anything else is an error.
    pub fn get(&self, index: usize) -> Result<f64, HexError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(HexError::PointIndex { index }),
        }
    }
}

/// Implement an arithmetic operator for both point-point (component-wise)
/// and point-scalar (broadcast) operands
macro_rules! impl_point_op {
    ($trait:ident, $fname:ident, $op:tt) => {
        impl ops::$trait<Point> for Point {
            type Output = Point;

            fn $fname(self, rhs: Point) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl ops::$trait<f64> for Point {
            type Output = Point;

            fn $fname(self, rhs: f64) -> Self::Output {
                Point::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

impl_point_op!(Add, add, +);
impl_point_op!(Sub, sub, -);
impl_point_op!(Mul, mul, *);
impl_point_op!(Div, div, /);

/// Panics if the index isn't 0 or 1. Use [Point::get] for a checked lookup.
impl ops::Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("point index {} out of range; must be 0 or 1", index),
        }
    }
}

impl IntoIterator for Point {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = HexError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(HexError::PointLength { len: value.len() }),
        }
    }
}

impl From<nalgebra::Point2<f64>> for Point {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(other: Point) -> Self {
        nalgebra::Point2::new(other.x, other.y)
    }
}
