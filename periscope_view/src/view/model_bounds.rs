/// ModelBounds - axis-aligned box around every visible part of a vessel model.
///
/// Built by growing an initially empty box (anchored at the model origin)
/// over the bounds of each renderable part, then used to fit the model into
/// the display and to find how far the hull rises above the waterline.

use glam::Vec3;
use crate::config::DisplayArea;
use crate::error::{Error, Result};

/// Axis-aligned bounding box in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl ModelBounds {
    /// Box with the given corners (reordered per axis if needed)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Zero-sized box at `origin`
    pub fn empty_at(origin: Vec3) -> Self {
        Self { min: origin, max: origin }
    }

    /// Smallest box containing all `points`, or `None` if there are none
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::empty_at(first);
        for p in iter {
            bounds.encapsulate_point(p);
        }
        Some(bounds)
    }

    /// Grow to include a point
    pub fn encapsulate_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow to include another box
    pub fn encapsulate(&mut self, other: &ModelBounds) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest horizontal extent (length or beam, whichever is longer)
    pub fn footprint(&self) -> f32 {
        let size = self.size();
        size.x.max(size.z)
    }

    /// Height of the top of the box above `origin_y` (the waterline)
    pub fn height_above(&self, origin_y: f32) -> f32 {
        self.size().y / 2.0 + self.center().y - origin_y
    }

    /// Uniform scale fitting the footprint into the display width minus `margin`
    pub fn fit_scale(&self, display: &DisplayArea, margin: f32) -> Result<f32> {
        let footprint = self.footprint();
        if !(footprint > 0.0) {
            return Err(Error::DomainError(format!(
                "model footprint must be positive, got {}",
                footprint
            )));
        }
        let room = display.width - margin;
        if !(room > 0.0) {
            return Err(Error::DomainError(format!(
                "display width {} leaves no room after a margin of {}",
                display.width, margin
            )));
        }
        let scale = room / footprint * display.scale;
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(Error::DomainError(format!(
                "display scale {} gives a model scale of {}",
                display.scale, scale
            )));
        }
        Ok(scale)
    }
}

#[cfg(test)]
#[path = "model_bounds_tests.rs"]
mod tests;
