/// PeriscopeView - slider-driven view state of the displayed vessel.
///
/// Holds the two user offsets (draught and distance), the slider ranges
/// derived from the fitted model, and the cached horizon values. Every
/// mutation that affects the periscope height, the model scale or the
/// slider bounds goes through `recompute()`, so `dist_at_horizon` and
/// `sub_horizon_scale` are never stale.
///
/// Units: slider values are display units. One foot of the real vessel
/// spans `model_scale` display units.

use crate::config::{DisplayArea, ViewConfig};
use crate::error::Result;
use crate::horizon::{Horizon, FEET_TO_METERS, round_yards};
use super::bearing::{Bearing, Rotator};
use super::model_bounds::ModelBounds;

/// Closed range of a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Lowest value
    pub min: f64,
    /// Highest value
    pub max: f64,
}

impl SliderRange {
    /// Clamp `value` into the range (NaN maps to 0 clamped)
    pub fn clamp(&self, value: f64) -> f64 {
        let v = if value.is_nan() { 0.0 } else { value };
        v.max(self.min).min(self.max)
    }
}

/// Where the host should draw the model and the water overlay, relative
/// to their rest positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlacement {
    /// Vertical offset of the model (display units)
    pub model_offset_y: f64,
    /// Vertical offset of the foreground water (canvas units)
    pub water_offset_y: f64,
}

/// View state of the periscope display
#[derive(Debug, Clone)]
pub struct PeriscopeView {
    config: ViewConfig,
    display: DisplayArea,
    horizon: Horizon,
    periscope_height: f64,
    model_scale: f64,
    max_height_above_sea: f64,
    dist_at_horizon: f64,
    sub_horizon_scale: f64,
    draught_range: SliderRange,
    distance_range: SliderRange,
    height_offset: f64,
    distance_offset: f64,
    rotator: Rotator,
}

impl PeriscopeView {
    /// Create a view with no model fitted yet (unit scale, zero height)
    pub fn new(config: ViewConfig, display: DisplayArea) -> Self {
        let horizon = Horizon::new(config.earth_radius, config.yards_per_meter);
        let rotator = Rotator::new(config.default_yaw, config.drag_divisor, config.rotate_step);
        let periscope_height = config.periscope_height.max(0.0);
        let mut view = Self {
            config,
            display,
            horizon,
            periscope_height,
            model_scale: 1.0,
            max_height_above_sea: 0.0,
            dist_at_horizon: 0.0,
            sub_horizon_scale: 0.0,
            draught_range: SliderRange { min: 0.0, max: 0.0 },
            distance_range: SliderRange { min: 0.0, max: 0.0 },
            height_offset: 0.0,
            distance_offset: 0.0,
            rotator,
        };
        view.update_ranges();
        view.recompute();
        view
    }

    // ===== MODEL =====

    /// Fit a newly displayed model.
    ///
    /// `origin_y` is the model's waterline in model space. Scales the model
    /// to the display width, derives the slider ranges from its height above
    /// the waterline, clamps the current offsets into them and resets the yaw.
    pub fn fit_model(&mut self, bounds: &ModelBounds, origin_y: f32) -> Result<()> {
        let scale = bounds.fit_scale(&self.display, self.config.fit_margin)?;
        self.model_scale = scale as f64;
        self.max_height_above_sea = (bounds.height_above(origin_y) * scale).max(0.0) as f64;
        self.update_ranges();
        self.height_offset = self.draught_range.clamp(self.height_offset);
        self.distance_offset = self.distance_range.clamp(self.distance_offset);
        self.rotator.set_yaw(self.config.default_yaw);
        self.recompute();

        crate::engine_debug!(
            "periscope::View",
            "Fitted model: scale {:.4}, {:.1} ft above sea",
            self.model_scale,
            self.max_height_above_sea / self.model_scale
        );
        Ok(())
    }

    /// Resize the display area; the current model scale is kept until the
    /// next `fit_model`
    pub fn set_display(&mut self, display: DisplayArea) {
        self.display = display;
        self.update_ranges();
        self.distance_offset = self.distance_range.clamp(self.distance_offset);
        self.recompute();
    }

    // ===== INPUTS =====

    /// Change the observer height (meters). Heights below sea level clamp to 0.
    pub fn set_periscope_height(&mut self, height_m: f64) {
        let height = if height_m.is_nan() || height_m < 0.0 {
            crate::engine_warn!(
                "periscope::View",
                "Periscope height {} below sea level, clamped to 0",
                height_m
            );
            0.0
        } else {
            height_m
        };
        self.periscope_height = height;
        self.recompute();
    }

    /// Move the draught slider. Returns the new height above sea in feet.
    pub fn set_height_offset(&mut self, value: f64) -> f64 {
        self.height_offset = self.draught_range.clamp(value);
        self.height_above_sea_feet()
    }

    /// Move the distance slider. Returns the new displayed range in yards.
    pub fn set_distance_offset(&mut self, value: f64) -> u32 {
        self.distance_offset = self.distance_range.clamp(value);
        self.distance_yards()
    }

    /// Model yaw controller
    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    /// Mutable model yaw controller
    pub fn rotator_mut(&mut self) -> &mut Rotator {
        &mut self.rotator
    }

    // ===== READOUTS =====

    /// Displayed range of the target, unrounded (yards)
    pub fn distance_yards_exact(&self) -> f64 {
        self.horizon.display_distance(
            self.periscope_height,
            self.distance_offset,
            self.max_height_above_sea,
            self.sub_horizon_scale,
            self.unit_to_meters(),
        )
    }

    /// Displayed range of the target, rounded to whole yards
    pub fn distance_yards(&self) -> u32 {
        round_yards(self.distance_yards_exact())
    }

    /// Range readout, e.g. `"3904 yds"`
    pub fn distance_text(&self) -> String {
        format!("{} yds", self.distance_yards())
    }

    /// Height of the vessel's top above the sea in feet, to 0.1 ft
    pub fn height_above_sea_feet(&self) -> f64 {
        let feet = (self.max_height_above_sea + self.height_offset) / self.model_scale;
        ((feet * 10.0 + 0.5).floor() / 10.0).max(0.0)
    }

    /// Height readout, e.g. `"42.5 ft"`
    pub fn height_text(&self) -> String {
        format!("{} ft", self.height_above_sea_feet())
    }

    /// Current bearing readout
    pub fn bearing(&self) -> Bearing {
        self.rotator.bearing()
    }

    /// Draw offsets for the model and the water overlay
    pub fn placement(&self) -> ViewPlacement {
        let d = self.distance_offset;
        let water_offset_y = if d > 0.0 {
            0.0
        } else {
            d / self.display.scale as f64
        };
        ViewPlacement {
            model_offset_y: self.height_offset - d.abs(),
            water_offset_y,
        }
    }

    // ===== GETTERS =====

    /// Observer height (meters)
    pub fn periscope_height(&self) -> f64 {
        self.periscope_height
    }

    /// Range to the horizon from the periscope (yards)
    pub fn dist_at_horizon(&self) -> f64 {
        self.dist_at_horizon
    }

    /// In-front-of-horizon calibration factor
    pub fn sub_horizon_scale(&self) -> f64 {
        self.sub_horizon_scale
    }

    /// Top of the fitted model above the waterline (display units)
    pub fn max_height_above_sea(&self) -> f64 {
        self.max_height_above_sea
    }

    /// Display units per foot
    pub fn model_scale(&self) -> f64 {
        self.model_scale
    }

    /// Draught slider range
    pub fn draught_range(&self) -> SliderRange {
        self.draught_range
    }

    /// Distance slider range
    pub fn distance_range(&self) -> SliderRange {
        self.distance_range
    }

    /// Draught slider value
    pub fn height_offset(&self) -> f64 {
        self.height_offset
    }

    /// Distance slider value
    pub fn distance_offset(&self) -> f64 {
        self.distance_offset
    }

    /// Display area the model is fitted into
    pub fn display(&self) -> &DisplayArea {
        &self.display
    }

    // ===== INTERNAL =====

    fn unit_to_meters(&self) -> f64 {
        FEET_TO_METERS / self.model_scale
    }

    fn update_ranges(&mut self) {
        self.draught_range = SliderRange {
            min: -self.config.draught_fraction * self.max_height_above_sea,
            max: 0.0,
        };
        self.distance_range = SliderRange {
            min: -self.config.distance_fraction
                * self.display.height as f64
                * self.display.scale as f64,
            max: self.max_height_above_sea,
        };
    }

    fn recompute(&mut self) {
        self.dist_at_horizon = self.horizon.distance_yards(self.periscope_height);
        let min_travel_m = self.distance_range.min.abs() * self.unit_to_meters();
        self.sub_horizon_scale = self
            .horizon
            .sub_horizon_scale(min_travel_m, self.config.max_sub_horizon_yards);

        crate::engine_trace!(
            "periscope::View",
            "Horizon at {:.1} yds, sub-horizon scale {:.4}",
            self.dist_at_horizon,
            self.sub_horizon_scale
        );
    }
}

#[cfg(test)]
#[path = "periscope_view_tests.rs"]
mod tests;
