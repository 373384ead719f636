// Core status line logic

pub mod config;
pub mod keyfile;
pub mod numeric;
pub mod providers;
pub mod scheduler;
pub mod template;

// Re-export commonly used items
pub use config::StatusConfig;
pub use providers::Provider;
pub use scheduler::{Scheduler, SchedulerState};
pub use template::StatusTemplate;
