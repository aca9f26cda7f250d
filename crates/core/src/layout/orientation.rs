use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// `√3`, written out because `f64::sqrt` can't be called in a const. This is
/// the correctly rounded double, so it's bit-for-bit what `3f64.sqrt()` gives.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The linear transforms that map between hex space and pixel space for one
/// tiling orientation. `f0..f3` are the forward (hex to pixel) 2x2 matrix in
/// row-major order, `b0..b3` are its inverse, and `start_angle` is the angle
/// of the first corner, in multiples of 60°.
///
/// There are only two useful orientations, [Orientation::POINTY] and
/// [Orientation::FLAT].
///
/// https://www.redblobgames.com/grids/hexagons/implementation.html#layout
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

impl Orientation {
    /// Hexes with a corner at the top, laid out in horizontal rows
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Hexes with a flat side on top, laid out in vertical columns
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// Which of the canonical orientations is this? `None` for a
    /// hand-rolled orientation.
    pub fn kind(&self) -> Option<OrientationKind> {
        if *self == Self::POINTY {
            Some(OrientationKind::Pointy)
        } else if *self == Self::FLAT {
            Some(OrientationKind::Flat)
        } else {
            None
        }
    }
}

impl From<OrientationKind> for Orientation {
    fn from(kind: OrientationKind) -> Self {
        kind.orientation()
    }
}

/// Names for the canonical orientations, so they can be picked in config
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// See [Orientation::POINTY]
    Pointy,
    /// See [Orientation::FLAT]
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Pointy => Orientation::POINTY,
            Self::Flat => Orientation::FLAT,
        }
    }
}

impl Default for OrientationKind {
    fn default() -> Self {
        Self::Pointy
    }
}
