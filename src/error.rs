//! Game error types.
//!
//! Scoring itself has no recoverable errors: unclassifiable contacts are
//! ignored and an inconsistent score board panics.  Errors here cover the
//! surrounding setup, mostly configuration values that would break the court.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HoopError {
    /// A tunable value is outside the range the court can work with.
    UnsafeConstant {
        /// Config key (for logging).
        name: &'static str,
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The rim opening is too narrow for the ball to pass through.
    RimTooNarrow { opening: f32, ball_diameter: f32 },

    /// `hoop_min_y` lies above `hoop_max_y`.
    EmptyPlacementRange { min_y: f32, max_y: f32 },
}

impl fmt::Display for HoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoopError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            HoopError::RimTooNarrow {
                opening,
                ball_diameter,
            } => write!(
                f,
                "rim opening {} is not wider than the ball diameter {}",
                opening, ball_diameter
            ),
            HoopError::EmptyPlacementRange { min_y, max_y } => write!(
                f,
                "hoop placement range is empty: min {} > max {}",
                min_y, max_y
            ),
        }
    }
}

impl std::error::Error for HoopError {}

pub type HoopResult<T> = Result<T, HoopError>;

/// Returns an error unless `value` is strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> HoopResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(HoopError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` lies in `[0.0, 1.0]`.
pub fn validate_unit_interval(name: &'static str, value: f32) -> HoopResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HoopError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, 1.0]",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(validate_positive("ball_radius", 1.0).is_ok());
        assert!(validate_positive("ball_radius", 0.0).is_err());
        assert!(validate_positive("ball_radius", f32::NAN).is_err());
    }

    #[test]
    fn unit_interval_bounds_are_inclusive() {
        assert!(validate_unit_interval("ball_restitution", 0.0).is_ok());
        assert!(validate_unit_interval("ball_restitution", 1.0).is_ok());
        assert!(validate_unit_interval("ball_restitution", 1.2).is_err());
    }

    #[test]
    fn display_names_the_key() {
        let err = HoopError::UnsafeConstant {
            name: "throw_speed",
            value: -3.0,
            safe_range: "(0.0, ∞)",
        };
        assert!(err.to_string().contains("throw_speed"));
    }
}
