use crate::layout::{OrientationKind, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a [Layout](crate::Layout). Build a layout from
/// this with [Layout::from_config](crate::Layout::from_config), which will
/// validate the config first. Every field has a default, so a partial config
/// can be deserialized.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which way the hexes are rotated
    pub orientation: OrientationKind,

    /// Size of a single hex, in pixels per hex unit on each axis. Both
    /// components must be non-zero, since pixel-to-hex projection divides by
    /// them. The two components can differ, to squash or stretch the grid.
    #[validate(custom = "validate_scale")]
    pub scale: Point,

    /// Pixel position of the center of the origin hex
    #[validate(custom = "validate_finite")]
    pub origin: Point,

    /// Size of the viewport, in pixels. This is only used to decide whether
    /// a hex is on-screen; it doesn't affect projection at all.
    #[validate(custom = "validate_size")]
    pub size: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            scale: Point::new(10.0, 10.0),
            origin: Point::ORIGIN,
            size: Point::new(800.0, 800.0),
        }
    }
}

#[cfg(feature = "json")]
impl LayoutConfig {
    /// Deserialize a config from JSON. Missing fields use their defaults.
    /// The result is _not_ validated until it's used to build a layout.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        serde_json::from_str(json).context("error deserializing layout config")
    }
}

fn validate_finite(point: &Point) -> Result<(), ValidationError> {
    if point.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

fn validate_scale(scale: &Point) -> Result<(), ValidationError> {
    validate_finite(scale)?;
    if scale.into_iter().any(|c| c == 0.0) {
        Err(ValidationError::new("non_zero"))
    } else {
        Ok(())
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    validate_finite(size)?;
    if size.into_iter().any(|c| c < 0.0) {
        Err(ValidationError::new("non_negative"))
    } else {
        Ok(())
    }
}
