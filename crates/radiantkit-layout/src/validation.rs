//! Input validation for room dimensions and pipe spacing.
//!
//! Hard failures become [`LayoutError::InvalidDimension`]. Values that are
//! legal but unusual are reported as [`Advisory`] so the caller can ask the
//! user before continuing.

use radiantkit_core::{LayoutError, Room};
use std::fmt;

/// Spacing below this is flagged as impractical by default (meters)
pub const DEFAULT_MIN_PRACTICAL_SPACING: f64 = 0.1;

fn check_positive(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::invalid_dimension(name, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(LayoutError::invalid_dimension(
            name,
            value,
            "must be greater than 0 meters",
        ));
    }
    Ok(())
}

/// Reject non-positive dimensions and a spacing that is not smaller than
/// both room sides.
pub fn validate_inputs(room: &Room, spacing: f64) -> Result<(), LayoutError> {
    check_positive("width", room.width)?;
    check_positive("height", room.height)?;
    check_positive("spacing", spacing)?;

    let shorter = room.shorter_side();
    if spacing >= shorter {
        return Err(LayoutError::invalid_dimension(
            "spacing",
            spacing,
            format!("must be smaller than the shorter room side ({:.2}m)", shorter),
        ));
    }

    Ok(())
}

/// Non-fatal remark about the inputs
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Spacing is legal but tighter than anyone would lay pipe
    ImpracticalSpacing { spacing: f64, minimum: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImpracticalSpacing { spacing, minimum } => write!(
                f,
                "Pipe spacing {}m is less than {}m and may be impractical",
                spacing, minimum
            ),
        }
    }
}

/// Collect advisories for inputs that already passed [`validate_inputs`].
pub fn advisories(spacing: f64, min_practical_spacing: f64) -> Vec<Advisory> {
    let mut found = Vec::new();
    if spacing < min_practical_spacing {
        found.push(Advisory::ImpracticalSpacing {
            spacing,
            minimum: min_practical_spacing,
        });
    }
    found
}
