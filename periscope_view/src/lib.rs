/*!
# Periscope View

Engine-agnostic core of a periscope ship-recognition trainer.

A host application renders the sea and the vessel models; this crate owns
everything the periscope *computes* and *remembers*:

## Architecture

- **Horizon**: earth-curvature range to the horizon and the displayed range
  of a vessel placed in front of or beyond it
- **View**: slider-driven periscope state, model fitting, bearing readout,
  display toggles
- **Info**: per-vessel information documents (sectioned key/value text),
  parsed, edited and rewritten with minimal changes on disk
- **Catalog**: sortable table of vessels filled from their documents
- **Session**: the `Viewer` tying a vessel list, the view and the store
  together
- **Engine**: global access to the logger and the registered viewer
*/

// Internal modules
mod error;
mod engine;
mod log;
mod config;
mod horizon;
mod view;
mod info;
mod catalog;
mod session;

// Main periscope namespace module
pub mod periscope {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Configuration structs
    pub mod config {
        pub use crate::config::*;
    }

    // Horizon geometry
    pub mod horizon {
        pub use crate::horizon::*;
    }

    // Periscope view state
    pub mod view {
        pub use crate::view::*;
    }

    // Vessel information documents
    pub mod info {
        pub use crate::info::*;
    }

    // Vessel catalog
    pub mod catalog {
        pub use crate::catalog::*;
    }

    // Viewer session
    pub mod session {
        pub use crate::session::*;
    }
}

// Re-export math library at crate root
pub use glam;
