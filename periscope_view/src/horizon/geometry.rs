/// Horizon geometry - visible range from a height above a spherical earth.
///
/// All distances are arc lengths along the earth's surface. Heights are in
/// meters, results in yards unless a function says otherwise.
///
/// The classic form is `2πR · acos(R / (R + h)) · (180/π) / 360`. It is
/// evaluated here through the identity `acos(R / (R + h)) = atan2(√(h(2R + h)), R)`,
/// which keeps full precision for heights of a few meters against a radius
/// of six thousand kilometers and has no domain edge to clamp.

use std::f64::consts::PI;
use crate::error::{Error, Result};

/// Mean earth radius (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_001.0;
/// Feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;
/// Meters to yards
pub const METERS_TO_YARDS: f64 = 1.09361;
/// Closing distance represented by the lowest in-front-of-horizon slider value (yards)
pub const MAX_SUB_HORIZON_YARDS: f64 = 3000.0;

/// Earth model and unit conversion used for every range computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Output conversion, meters to yards
    pub yards_per_meter: f64,
}

impl Horizon {
    /// Create a horizon model with explicit constants
    pub fn new(earth_radius: f64, yards_per_meter: f64) -> Self {
        Self { earth_radius, yards_per_meter }
    }

    /// Surface arc to the horizon from `height_m` (meters).
    ///
    /// Negative and NaN heights are clamped to 0.
    pub fn arc_meters(&self, height_m: f64) -> f64 {
        let h = clamp_height(height_m);
        let r = self.earth_radius;
        let angle = (h * (2.0 * r + h)).sqrt().atan2(r);
        2.0 * PI * r * angle.to_degrees() / 360.0
    }

    /// Distance to the horizon from `height_m`, in yards.
    ///
    /// `0` at height 0, strictly increasing for positive heights.
    pub fn distance_yards(&self, height_m: f64) -> f64 {
        self.arc_meters(height_m) * self.yards_per_meter
    }

    /// Like [`Horizon::distance_yards`] but rejects heights below sea level.
    pub fn checked_distance_yards(&self, height_m: f64) -> Result<f64> {
        if !height_m.is_finite() || height_m < 0.0 {
            return Err(Error::DomainError(format!(
                "observer height must be a finite value >= 0, got {}",
                height_m
            )));
        }
        Ok(self.distance_yards(height_m))
    }

    /// Calibration factor mapping the in-front-of-horizon slider travel onto
    /// `max_yards`.
    ///
    /// `min_travel_m` is the magnitude of the lowest slider value converted to
    /// meters. Returns 0 when there is no travel.
    pub fn sub_horizon_scale(&self, min_travel_m: f64, max_yards: f64) -> f64 {
        let travel = self.distance_yards(min_travel_m.abs());
        if travel > 0.0 {
            max_yards / travel
        } else {
            0.0
        }
    }

    /// Displayed range (yards, unrounded) of a target at a vertical slider offset.
    ///
    /// * `periscope_height` - observer height (meters)
    /// * `offset_units` - distance slider value; positive moves the target
    ///   beyond the horizon, zero or negative brings it closer
    /// * `max_height_above_sea` - upper bound of the slider
    /// * `sub_horizon_scale` - see [`Horizon::sub_horizon_scale`]
    /// * `unit_to_meters` - slider units to meters
    ///
    /// Never negative.
    pub fn display_distance(
        &self,
        periscope_height: f64,
        offset_units: f64,
        max_height_above_sea: f64,
        sub_horizon_scale: f64,
        unit_to_meters: f64,
    ) -> f64 {
        let at_horizon = self.distance_yards(periscope_height);
        let offset = if offset_units.is_nan() {
            0.0
        } else {
            offset_units.min(max_height_above_sea.max(0.0))
        };

        if offset > 0.0 {
            // Sinking below the horizon line: extra curvature behind it
            at_horizon + self.distance_yards(offset * unit_to_meters)
        } else {
            let closing = self.distance_yards(-offset * unit_to_meters) * sub_horizon_scale;
            (at_horizon - closing).max(0.0)
        }
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_M, METERS_TO_YARDS)
    }
}

/// Distance to the horizon (yards) from `height_m` meters on the standard earth.
pub fn distance_to_horizon(height_m: f64) -> f64 {
    Horizon::default().distance_yards(height_m)
}

/// Displayed range (yards) on the standard earth. See [`Horizon::display_distance`].
pub fn display_distance(
    periscope_height: f64,
    offset_units: f64,
    max_height_above_sea: f64,
    sub_horizon_scale: f64,
    unit_to_meters: f64,
) -> f64 {
    Horizon::default().display_distance(
        periscope_height,
        offset_units,
        max_height_above_sea,
        sub_horizon_scale,
        unit_to_meters,
    )
}

/// Sub-horizon calibration for the standard earth and the 3000 yard maximum.
pub fn compute_sub_horizon_scale(min_slider_abs_meters: f64) -> f64 {
    Horizon::default().sub_horizon_scale(min_slider_abs_meters, MAX_SUB_HORIZON_YARDS)
}

/// Round a range to whole yards for display: `(yards + 0.5)` truncated.
pub fn round_yards(yards: f64) -> u32 {
    if yards.is_nan() || yards <= 0.0 {
        return 0;
    }
    (yards + 0.5) as u32
}

fn clamp_height(height_m: f64) -> f64 {
    if height_m.is_nan() || height_m < 0.0 {
        0.0
    } else {
        height_m
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
