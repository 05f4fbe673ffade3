//! Dome build parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// Physical parameters of a dome build, all in millimeters.
///
/// Defaults describe the reference build: a 503 mm inner radius bread-oven
/// dome out of 250x125x65 bricks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomeParams {
    /// Brick length along the course (mm).
    pub brick_width: f64,
    /// Brick bed height (mm).
    pub brick_height: f64,
    /// Brick depth across the wall (mm).
    pub brick_depth: f64,
    /// Inner radius of the dome at the surface (mm).
    pub inner_radius: f64,
    /// Apex height of the inner surface above the floor (mm).
    pub height: f64,
    /// Height of the soldier course (mm).
    pub first_row_height: f64,
    /// Mortar seam between courses and bricks (mm).
    pub seam: f64,
}

impl Default for DomeParams {
    fn default() -> Self {
        DomeParams {
            brick_width: 250.0,
            brick_height: 65.0,
            brick_depth: 125.0,
            inner_radius: 503.0,
            height: 440.0,
            first_row_height: 125.0,
            seam: 4.0,
        }
    }
}

impl DomeParams {
    /// Check every parameter against its buildable range.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64, f64, f64); 7] = [
            ("brick width", self.brick_width, 100.0, 300.0),
            ("brick height", self.brick_height, 50.0, 80.0),
            ("brick depth", self.brick_depth, 100.0, 150.0),
            ("inner radius", self.inner_radius, 300.0, 800.0),
            ("height", self.height, 125.0, 800.0),
            ("first row height", self.first_row_height, 50.0, 250.0),
            ("seam", self.seam, 1.0, 8.0),
        ];
        for (name, value, min, max) in checks {
            if !(min..=max).contains(&value) {
                return Err(SolverError::InvalidParameter {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(DomeParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_parameter_is_named() {
        let params = DomeParams {
            seam: 12.0,
            ..DomeParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(SolverError::InvalidParameter {
                name: "seam",
                value: 12.0,
                min: 1.0,
                max: 8.0,
            })
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let params = DomeParams {
            brick_width: 300.0,
            brick_height: 50.0,
            ..DomeParams::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_toml_round_trip_with_defaults() {
        let params: DomeParams = toml::from_str("inner_radius = 600.0").unwrap();
        assert_eq!(params.inner_radius, 600.0);
        assert_eq!(params.brick_width, 250.0);
    }
}
