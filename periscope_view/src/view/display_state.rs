/// DisplayState - presentation toggles kept outside the geometry and text core.
///
/// The host reads these to decide how to draw (panel position, ambient tint,
/// which information sections are collapsed). Nothing here renders.

use bitflags::bitflags;
use rustc_hash::FxHashSet;

bitflags! {
    /// Global display modes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DisplayFlags: u32 {
        /// Information panel slid out of view
        const PANEL_HIDDEN = 1 << 0;
        /// Red ambient light for night adaptation
        const LOW_LIGHT    = 1 << 1;
    }
}

/// Ambient light in normal mode
pub const AMBIENT_NORMAL: [f32; 3] = [1.0, 1.0, 1.0];
/// Ambient light in low-light mode
pub const AMBIENT_LOW_LIGHT: [f32; 3] = [0.9, 0.0, 0.0];

/// Presentation state of the viewer
#[derive(Debug, Clone)]
pub struct DisplayState {
    flags: DisplayFlags,
    collapsed: FxHashSet<String>,
}

impl DisplayState {
    /// Panel hidden, normal light, nothing collapsed
    pub fn new() -> Self {
        Self {
            flags: DisplayFlags::PANEL_HIDDEN,
            collapsed: FxHashSet::default(),
        }
    }

    /// Current flags
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Show/hide the information panel; returns whether it is now hidden
    pub fn toggle_panel(&mut self) -> bool {
        self.flags.toggle(DisplayFlags::PANEL_HIDDEN);
        self.is_panel_hidden()
    }

    /// Whether the information panel is hidden
    pub fn is_panel_hidden(&self) -> bool {
        self.flags.contains(DisplayFlags::PANEL_HIDDEN)
    }

    /// Switch low-light mode; returns whether it is now on
    pub fn toggle_low_light(&mut self) -> bool {
        self.flags.toggle(DisplayFlags::LOW_LIGHT);
        self.is_low_light()
    }

    /// Whether low-light mode is on
    pub fn is_low_light(&self) -> bool {
        self.flags.contains(DisplayFlags::LOW_LIGHT)
    }

    /// Ambient light color for the current mode
    pub fn ambient(&self) -> [f32; 3] {
        if self.is_low_light() {
            AMBIENT_LOW_LIGHT
        } else {
            AMBIENT_NORMAL
        }
    }

    /// Collapse or expand a section; returns whether it is now collapsed
    pub fn toggle_section(&mut self, heading: &str) -> bool {
        if self.collapsed.remove(heading) {
            false
        } else {
            self.collapsed.insert(heading.to_string());
            true
        }
    }

    /// Whether a section is collapsed
    pub fn is_collapsed(&self, heading: &str) -> bool {
        self.collapsed.contains(heading)
    }

    /// Expand every section (done whenever another vessel is shown)
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "display_state_tests.rs"]
mod tests;
