/// Bearing - the model's yaw as read through the periscope.
///
/// Yaw 180° shows the target bow-on ("RIGHT AHEAD"), 0°/360° stern-on
/// ("RIGHT ASTERN"). Below 180° the target presents its starboard side,
/// above 180° its port side.

use std::fmt;

/// Tint the bearing readout is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearingTint {
    /// Ahead/astern
    Neutral,
    /// Starboard
    Green,
    /// Port
    Red,
}

/// Bearing readout, from a yaw rounded to whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bearing {
    /// Stern-on
    RightAstern,
    /// Bow-on
    RightAhead,
    /// Degrees off the bow, starboard side showing
    Starboard(u32),
    /// Degrees off the bow, port side showing
    Port(u32),
}

impl Bearing {
    /// Readout for a yaw in degrees (any range, normalized first)
    pub fn from_yaw(yaw_degrees: f32) -> Self {
        let rot = (normalize_yaw(yaw_degrees) + 0.5) as u32;
        match rot {
            0 | 360 => Bearing::RightAstern,
            180 => Bearing::RightAhead,
            r if r < 180 => Bearing::Starboard(180 - r),
            r => Bearing::Port(r - 180),
        }
    }

    /// Tint of the readout
    pub fn tint(&self) -> BearingTint {
        match self {
            Bearing::RightAstern | Bearing::RightAhead => BearingTint::Neutral,
            Bearing::Starboard(_) => BearingTint::Green,
            Bearing::Port(_) => BearingTint::Red,
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bearing::RightAstern => write!(f, "RIGHT ASTERN"),
            Bearing::RightAhead => write!(f, "RIGHT AHEAD"),
            Bearing::Starboard(deg) => write!(f, "{} STARBOARD", deg),
            Bearing::Port(deg) => write!(f, "{} PORT", deg),
        }
    }
}

/// Wrap a yaw into [0, 360)
pub fn normalize_yaw(yaw_degrees: f32) -> f32 {
    let wrapped = yaw_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Drives the model yaw from pointer drags and step buttons.
#[derive(Debug, Clone)]
pub struct Rotator {
    yaw: f32,
    drag_divisor: f32,
    step: f32,
    drag_origin: Option<(f32, f32)>,
}

impl Rotator {
    /// Create a rotator at `yaw` degrees
    pub fn new(yaw: f32, drag_divisor: f32, step: f32) -> Self {
        Self {
            yaw: normalize_yaw(yaw),
            drag_divisor,
            step,
            drag_origin: None,
        }
    }

    /// Current yaw in [0, 360)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current bearing readout
    pub fn bearing(&self) -> Bearing {
        Bearing::from_yaw(self.yaw)
    }

    /// Jump to a yaw, cancelling any drag
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = normalize_yaw(yaw);
        self.drag_origin = None;
    }

    /// Start a drag at pointer position `x`
    pub fn begin_drag(&mut self, x: f32) {
        self.drag_origin = Some((x, self.yaw));
    }

    /// Continue a drag; no effect unless a drag is in progress
    pub fn drag_to(&mut self, x: f32) -> Bearing {
        if let Some((x0, yaw0)) = self.drag_origin {
            self.yaw = normalize_yaw((x0 - x) / self.drag_divisor + yaw0);
        }
        self.bearing()
    }

    /// Finish the current drag
    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Rotate clockwise looking down by one step
    pub fn rotate_right(&mut self) -> Bearing {
        self.yaw = normalize_yaw(self.yaw + self.step);
        self.bearing()
    }

    /// Rotate anti-clockwise looking down by one step
    pub fn rotate_left(&mut self) -> Bearing {
        self.yaw = normalize_yaw(self.yaw - self.step);
        self.bearing()
    }
}

#[cfg(test)]
#[path = "bearing_tests.rs"]
mod tests;
