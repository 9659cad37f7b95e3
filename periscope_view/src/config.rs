//! Configuration for the periscope view and the information store

use std::path::PathBuf;
use crate::horizon::{EARTH_RADIUS_M, METERS_TO_YARDS, MAX_SUB_HORIZON_YARDS};

/// Periscope view configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Height of the observing eye above sea level (meters)
    pub periscope_height: f64,
    /// Earth radius used for curvature (meters)
    pub earth_radius: f64,
    /// Meters to yards conversion factor
    pub yards_per_meter: f64,
    /// Closing distance shown at the minimum distance slider value (yards)
    pub max_sub_horizon_yards: f64,
    /// Horizontal display space left free when fitting a model (display units)
    pub fit_margin: f32,
    /// Draught slider travel below zero, as a fraction of the max height above sea
    pub draught_fraction: f64,
    /// Distance slider travel below zero, as a fraction of the display height
    pub distance_fraction: f64,
    /// Yaw applied when a new model is fitted (degrees)
    pub default_yaw: f32,
    /// Pointer travel per degree of drag rotation
    pub drag_divisor: f32,
    /// Step of the rotate-left/right buttons (degrees)
    pub rotate_step: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            periscope_height: 1.0,
            earth_radius: EARTH_RADIUS_M,
            yards_per_meter: METERS_TO_YARDS,
            max_sub_horizon_yards: MAX_SUB_HORIZON_YARDS,
            fit_margin: 300.0,
            draught_fraction: 0.1,
            distance_fraction: 0.1,
            default_yaw: 90.0,
            drag_divisor: 4.0,
            rotate_step: 1.0,
        }
    }
}

/// The display surface a model is fitted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayArea {
    /// Width in canvas units
    pub width: f32,
    /// Height in canvas units
    pub height: f32,
    /// Canvas to world scale
    pub scale: f32,
}

impl Default for DisplayArea {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            scale: 1.0,
        }
    }
}

/// Information store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one document per vessel
    pub root: PathBuf,
    /// File extension of persisted documents (without dot)
    pub extension: String,
}

impl StoreConfig {
    /// Store rooted at `root` using the default `.txt` extension
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "txt".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("vessel_info")
    }
}
