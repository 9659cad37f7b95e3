/// Periscope Engine - Singleton manager for the viewer session and logging
///
/// Hosts driven by a frame/update loop reach the viewer and the logger from
/// anywhere through this module. State lives in thread-safe statics behind
/// RwLock.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::session::Viewer;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding the engine singletons
struct EngineState {
    /// Viewer singleton (wrapped in Mutex for mutable access)
    viewer: RwLock<Option<Arc<Mutex<Viewer>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            viewer: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use periscope_view::periscope::{Engine, config::{ViewConfig, DisplayArea, StoreConfig}};
/// use periscope_view::periscope::info::{InfoStore, DirectoryTemplates};
/// use periscope_view::periscope::session::{Viewer, VesselModel};
///
/// Engine::initialize()?;
///
/// let store = InfoStore::new(StoreConfig::default(), DirectoryTemplates::new("templates"));
/// let vessels: Vec<VesselModel> = Vec::new();
/// let viewer = Viewer::new(
///     ViewConfig::default(), DisplayArea::default(), &vessels, store, vec!["Name".into()],
/// )?;
/// Engine::create_viewer(viewer)?;
///
/// let viewer = Engine::viewer()?;
///
/// Engine::shutdown();
/// # Ok::<(), periscope_view::periscope::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("periscope::Engine", "Initialization failed: {}", msg);
            }
            _ => {
                crate::engine_error!("periscope::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Must be called once before registering a viewer. Calling it again is
    /// harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Drop the registered viewer
    ///
    /// The engine stays initialized; a new viewer can be registered afterwards.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut viewer) = state.viewer.write() {
                *viewer = None;
            }
        }
    }

    /// Register the viewer singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A viewer already exists
    /// - The viewer lock is poisoned
    pub fn create_viewer(viewer: Viewer) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.viewer.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Viewer lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Viewer already exists. Call Engine::destroy_viewer() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(viewer)));

        crate::engine_info!("periscope::Engine", "Viewer singleton created successfully");

        Ok(())
    }

    /// Get the viewer singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or no viewer was
    /// registered.
    pub fn viewer() -> Result<Arc<Mutex<Viewer>>> {
        let state = Self::state()?;

        let lock = state.viewer.read()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Viewer lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::NotFound("Viewer not created. Call Engine::create_viewer() first.".to_string())
            ))
    }

    /// Destroy the viewer singleton
    ///
    /// Outstanding references stay valid until dropped. Destroying when no
    /// viewer exists is not an error.
    pub fn destroy_viewer() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.viewer.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Viewer lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("periscope::Engine", "Viewer singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut viewer) = state.viewer.write() {
                *viewer = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use periscope_view::periscope::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level (typically Error)
    /// * `source` - Source module (e.g., "periscope::InfoStore")
    /// * `message` - Log message
    /// * `file` - Source file path
    /// * `line` - Source line number
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
