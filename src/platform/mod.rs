// Platform-specific code module

pub mod load;
pub mod sink;

// Re-exports for clean imports
pub use load::system_load;
pub use sink::{StatusSink, XRootSink};
