// wmstatus Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, StatusError};

// Module declarations
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::{Provider, Scheduler, StatusConfig};
pub use platform::{StatusSink, XRootSink};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
