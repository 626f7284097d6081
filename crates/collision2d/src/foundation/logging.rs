//! Logging utilities
//!
//! Thin wrapper over `env_logger` so binaries get sensible defaults without
//! repeating builder setup.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Honors `RUST_LOG` when set and falls back to `info` otherwise. Panics if a
/// logger was already installed; use [`try_init`] when that is a possibility.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Fallible variant of [`init`] for contexts (such as tests) where another
/// logger may already be installed.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()
}
