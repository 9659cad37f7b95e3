//! Horizon geometry module
//!
//! Pure functions converting observer heights and slider offsets into
//! displayed ranges. No state, no dependencies on the rest of the crate
//! apart from the error type.

mod geometry;

pub use geometry::{
    Horizon,
    distance_to_horizon, display_distance, compute_sub_horizon_scale, round_yards,
    EARTH_RADIUS_M, FEET_TO_METERS, METERS_TO_YARDS, MAX_SUB_HORIZON_YARDS,
};
