//! This module holds the types and math for hexagon grid coordinates.
//!
//! ## Cube Coordinates
//!
//! Every hex is addressed by the [cube coordinate system described by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! A coordinate has three components (`x`, `y`, and `z`) and **always
//! satisfies `x + y + z = 0`**. Two components are enough to pin down a hex,
//! so the types in this module only store `x` and `y` and derive `z` as
//! needed. That also means equality and hashing only ever look at `x` and
//! `y`, and the third component can never drift out of sync.
//!
//! Using three components for a two-dimensional grid makes the common
//! operations symmetric:
//!
//! - Distance is half the sum of the absolute component differences
//! - A 60° rotation is a negated rotation of the components
//! - Rounding a fractional position back onto the grid only needs to fix up
//!   whichever component was rounded the furthest
//!
//! ## Integer vs Fractional
//!
//! [Hex] is an integer coordinate and refers to a single cell. It's the type
//! you'll want for nearly everything. [FractionalHex] is a real-valued
//! coordinate that can fall anywhere on the plane, not just on cell centers.
//! Fractional hexes come out of interpolation, scalar division, and
//! pixel-to-hex projection (see [crate::Layout::to_hex]), and are almost
//! always rounded straight back into a [Hex] with [FractionalHex::round].
//!
//! Only [Hex] implements `Hash`. Float coordinates don't make good keys, so
//! round first if you need to put a position in a map or set.

mod direction;
mod line;
mod unit;

pub use self::{direction::*, unit::*};
