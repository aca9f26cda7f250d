//! Hexgrid is a small library for working with hexagon grids. It covers the
//! coordinate math (distances, neighbors, rotation, line drawing) in cube
//! coordinates, plus projection between hexes and on-screen pixels.
//! Rendering itself is left to the caller.
//!
//! ```
//! use hexgrid::{Hex, Layout, OrientationKind, Point};
//!
//! let a = Hex::new(0, 0, 0).unwrap();
//! let b = Hex::new(1, -5, 4).unwrap();
//! assert_eq!(a.distance(b), 5);
//! assert_eq!(Hex::linedraw(a, b).len(), 6);
//!
//! let layout = Layout::new(
//!     OrientationKind::Pointy,
//!     Point::new(10.0, 10.0),
//!     Point::new(400.0, 400.0),
//! );
//! let pixel = layout.from_hex(b);
//! assert_eq!(layout.to_hex(pixel).round(), b);
//! ```
//!
//! See [Hex] for the coordinate system, and [LayoutConfig] for building a
//! layout from external config.

mod error;
mod hex;
mod layout;

pub use crate::{
    error::HexError,
    hex::{
        DiagonalDirection, FractionalHex, Hex, HexDirection, NeighborDirection,
        HEX_DIAGONALS, HEX_DIRECTIONS, PLANE_TOLERANCE,
    },
    layout::{Layout, LayoutConfig, Orientation, OrientationKind, Point},
};
