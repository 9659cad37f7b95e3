//! View module - the state behind the periscope display.
//!
//! Passive state driven by the host's input handling: slider offsets,
//! fitted model bounds, yaw, and presentation toggles. The host owns the
//! rendering and reads placements and readouts from here.

mod periscope_view;
mod model_bounds;
mod bearing;
mod display_state;

pub use periscope_view::{PeriscopeView, SliderRange, ViewPlacement};
pub use model_bounds::ModelBounds;
pub use bearing::{Bearing, BearingTint, Rotator, normalize_yaw};
pub use display_state::{DisplayState, DisplayFlags, AMBIENT_NORMAL, AMBIENT_LOW_LIGHT};
