//! Metric providers.
//!
//! Every provider turns its inputs into one display string and absorbs its
//! own failures: an unavailable metric is an empty string (or a fixed label
//! such as "not present"), never an error.

mod battery;
mod clock;
mod command;
mod load;
mod temperature;

use std::path::PathBuf;

pub use battery::{battery_status, BatteryLabels, BatteryReading, ChargeDirection};
pub use clock::{local_time, local_time_at};
pub use command::run_command;
pub use load::{format_load, load_average};
pub use temperature::temperature;

/// One entry in the status line composition
#[derive(Debug, Clone, PartialEq)]
pub enum Provider {
    LoadAverage,
    Battery {
        base: PathBuf,
        labels: BatteryLabels,
    },
    Temperature {
        base: PathBuf,
        sensor: String,
    },
    Clock {
        pattern: String,
        zone: String,
    },
    Command {
        command: String,
    },
}

impl Provider {
    pub fn battery<P: Into<PathBuf>>(base: P, labels: BatteryLabels) -> Self {
        Provider::Battery {
            base: base.into(),
            labels,
        }
    }

    pub fn temperature<P: Into<PathBuf>, S: Into<String>>(base: P, sensor: S) -> Self {
        Provider::Temperature {
            base: base.into(),
            sensor: sensor.into(),
        }
    }

    pub fn clock<P: Into<String>, Z: Into<String>>(pattern: P, zone: Z) -> Self {
        Provider::Clock {
            pattern: pattern.into(),
            zone: zone.into(),
        }
    }

    pub fn command<S: Into<String>>(command: S) -> Self {
        Provider::Command {
            command: command.into(),
        }
    }

    /// Take one sample for the current tick
    pub fn sample(&self) -> String {
        match self {
            Provider::LoadAverage => load_average(),
            Provider::Battery { base, labels } => battery_status(base, labels),
            Provider::Temperature { base, sensor } => temperature(base, sensor),
            Provider::Clock { pattern, zone } => local_time(pattern, zone),
            Provider::Command { command } => run_command(command),
        }
    }

    /// Short name used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Provider::LoadAverage => "load",
            Provider::Battery { .. } => "battery",
            Provider::Temperature { .. } => "temperature",
            Provider::Clock { .. } => "clock",
            Provider::Command { .. } => "command",
        }
    }
}
