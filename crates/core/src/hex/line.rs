//! Interpolation and line drawing between hexes.
//!
//! https://www.redblobgames.com/grids/hexagons/#line-drawing

use crate::hex::{FractionalHex, Hex};
use log::trace;

/// Added to x and y of both endpoints before drawing a line. Sampling a line
/// that runs exactly along cell edges lands on ties, which round
/// inconsistently. Shifting the line off the edges by a tiny amount makes
/// every sample fall clearly inside one cell.
const LINE_NUDGE: f64 = 1e-6;

impl FractionalHex {
    /// Linearly interpolate between two positions. `t = 0` is `a`, `t = 1` is
    /// `b`, and anything in between is on the straight segment joining them.
    /// The result is not rounded.
    pub fn lerp(
        a: impl Into<FractionalHex>,
        b: impl Into<FractionalHex>,
        t: f64,
    ) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::new_xy(
            a.x() * (1.0 - t) + b.x() * t,
            a.y() * (1.0 - t) + b.y() * t,
        )
    }
}

impl Hex {
    /// Get every hex on the line between `a` and `b`, inclusive on both ends.
    /// For two hexes that are `N` steps apart, this returns `N + 1` hexes, and
    /// each one is adjacent to the one before it, so the line doubles as a
    /// path.
    pub fn linedraw(a: Hex, b: Hex) -> Vec<Hex> {
        let steps = a.distance(b);
        trace!("Drawing line from {} to {} ({} steps)", a, b, steps);

        let nudge = |hex: Hex| {
            FractionalHex::new_xy(
                f64::from(hex.x()) + LINE_NUDGE,
                f64::from(hex.y()) + LINE_NUDGE,
            )
        };
        let (a_nudge, b_nudge) = (nudge(a), nudge(b));
        // Avoid dividing by zero when both ends are the same hex
        let step = 1.0 / steps.max(1) as f64;

        (0..=steps)
            .map(|i| {
                FractionalHex::lerp(a_nudge, b_nudge, step * i as f64).round()
            })
            .collect()
    }
}
