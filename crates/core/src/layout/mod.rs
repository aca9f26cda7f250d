//! Projection between hex space and pixel space.
//!
//! ## Pixel Coordinates
//!
//! Hex coordinates define space for the purposes of distance, direction,
//! etc. Pixel coordinates are only used to put hexes on a screen, or to
//! figure out which hex the pointer is over. A [Layout] bundles everything
//! needed to convert between the two:
//!
//! - An [Orientation], either pointy-topped or flat-topped
//! - A scale, in pixels per hex unit on each axis
//! - An origin, the pixel position of the center of hex `(0, 0, 0)`
//!
//! Hex to pixel ([Layout::from_hex]) is exact. Pixel to hex
//! ([Layout::to_hex]) lands anywhere on the continuous hex plane, so it
//! returns a [FractionalHex] which you'll almost always want to
//! [round](FractionalHex::round) immediately.

mod config;
mod orientation;
mod unit;

pub use self::{
    config::LayoutConfig,
    orientation::{Orientation, OrientationKind},
    unit::Point,
};

use crate::hex::FractionalHex;
use anyhow::Context;
use log::debug;
use std::{f64::consts::PI, fmt};
use validator::Validate;

/// Maps hexes to pixels and back. Layouts are immutable and cheap to copy;
/// generally you'll build one per rendering context and hang onto it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    scale: Point,
    origin: Point,
    size: Point,
}

impl Layout {
    /// Viewport size used when none is given
    pub const DEFAULT_SIZE: Point = Point::new(800.0, 800.0);

    /// Create a new layout. The viewport size defaults to
    /// [Self::DEFAULT_SIZE]; use [Self::with_size] to change it.
    ///
    /// This doesn't validate anything. A zero scale component will produce
    /// non-finite results from [Self::to_hex]. If the inputs come from
    /// outside the program, use [Self::from_config] instead.
    pub fn new(
        orientation: impl Into<Orientation>,
        scale: Point,
        origin: Point,
    ) -> Self {
        Self {
            orientation: orientation.into(),
            scale,
            origin,
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Build a layout from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: LayoutConfig) -> anyhow::Result<Self> {
        debug!("Building layout from config {:?}", config);

        config.validate().context("invalid layout config")?;

        Ok(Self::new(config.orientation, config.scale, config.origin)
            .with_size(config.size))
    }

    /// Get a copy of this layout with a different viewport size
    pub fn with_size(self, size: Point) -> Self {
        Self { size, ..self }
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn scale(&self) -> Point {
        self.scale
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Get the pixel position of the center of a hex
    pub fn from_hex(&self, hex: impl Into<FractionalHex>) -> Point {
        let hex = hex.into();
        let m = &self.orientation;
        let x = (m.f0 * hex.x() + m.f1 * hex.y()) * self.scale.x;
        let y = (m.f2 * hex.x() + m.f3 * hex.y()) * self.scale.y;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Get the position in hex space of a pixel. This is the inverse of
    /// [Self::from_hex]. The result is not rounded; call
    /// [FractionalHex::round] on it to find the hex that contains the pixel.
    pub fn to_hex(&self, pixel: Point) -> FractionalHex {
        let m = &self.orientation;
        let pt = (pixel - self.origin) / self.scale;
        FractionalHex::new_xy(
            m.b0 * pt.x + m.b1 * pt.y,
            m.b2 * pt.x + m.b3 * pt.y,
        )
    }

    /// Get the offset from the center of a hex to one of its corners, shrunk
    /// by `margin`. A margin of 1 gives the actual corner; anything less
    /// insets the hexagon, which is handy for drawing gaps between hexes.
    ///
    /// Corner 0 sits between neighbor directions 0 and 1, and the edge
    /// between corners 5 and 0 is the one facing neighbor direction 0.
    /// Corner indices wrap around every 6.
    pub fn hex_corner_offset(&self, corner: usize, margin: f64) -> Point {
        let scale = self.scale * margin;
        let turns = 1.0 - self.orientation.start_angle - corner as f64;
        let angle = 2.0 * PI * turns / 6.0;
        Point::new(scale.x * angle.cos(), scale.y * angle.sin())
    }

    /// Get the pixel positions of all 6 corners of a hex, shrunk by
    /// `margin`. The corners are in index order, so they can be used directly
    /// as a polygon.
    pub fn hex_corners(
        &self,
        hex: impl Into<FractionalHex>,
        margin: f64,
    ) -> [Point; 6] {
        let center = self.from_hex(hex);
        std::array::from_fn(|corner| {
            center + self.hex_corner_offset(corner, margin)
        })
    }

    /// Could any part of this hex be inside the viewport? This is a quick
    /// heuristic for culling, not a precise intersection test: it checks the
    /// outermost corner in each direction against the matching viewport
    /// bound.
    pub fn onscreen_hex(&self, hex: impl Into<FractionalHex>) -> bool {
        let corners = self.hex_corners(hex, 1.0);
        corners[1].x > 0.0
            && corners[5].y > 0.0
            && corners[4].x < self.size.x
            && corners[2].y < self.size.y
    }

    /// Alias for [Self::onscreen_hex]
    pub fn contains(&self, hex: impl Into<FractionalHex>) -> bool {
        self.onscreen_hex(hex)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout(")?;
        match self.orientation.kind() {
            Some(kind) => write!(f, "{}", kind)?,
            None => write!(f, "{:?}", self.orientation)?,
        }
        write!(f, ", {}, {})", self.scale, self.origin)
    }
}
