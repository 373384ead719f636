//! Built-in status line layouts.
//!
//! There is no configuration file: a layout is an ordered provider list,
//! a template with one placeholder per provider, and the tick interval.

use std::time::Duration;

use crate::core::providers::{BatteryLabels, Provider};
use crate::core::template::StatusTemplate;
use crate::error::{Result, StatusError};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

const BATTERY_PATH: &str = "/sys/class/power_supply/BAT0";
const CPU_SENSOR_PATH: &str = "/sys/devices/virtual/thermal/thermal_zone3";
const BOARD_SENSOR_PATH: &str = "/sys/devices/virtual/thermal/thermal_zone4";
const SENSOR_FILE: &str = "temp";

#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub interval: Duration,
    pub template: StatusTemplate,
    pub providers: Vec<Provider>,
}

impl StatusConfig {
    pub fn new(interval: Duration, template: &str, providers: Vec<Provider>) -> Result<Self> {
        let config = Self {
            interval,
            template: StatusTemplate::parse(template)?,
            providers,
        };
        config.validate()?;
        Ok(config)
    }

    /// Two sensors, load, battery and one local clock.
    pub fn single_zone() -> Result<Self> {
        Self::new(
            DEFAULT_INTERVAL,
            "T:{}|{} L:{} {} {}",
            vec![
                Provider::temperature(CPU_SENSOR_PATH, SENSOR_FILE),
                Provider::temperature(BOARD_SENSOR_PATH, SENSOR_FILE),
                Provider::LoadAverage,
                Provider::battery(BATTERY_PATH, BatteryLabels::default()),
                Provider::clock("%a %d %b %H:%M:%S %Z %Y", "America/Chicago"),
            ],
        )
    }

    /// Two sensors, load, battery and three clocks, the last with ISO week
    /// number and weekday.
    pub fn multi_zone() -> Result<Self> {
        let labels = BatteryLabels {
            fully_charged: "charged".to_string(),
            unknown: '.',
            ..Default::default()
        };

        Self::new(
            DEFAULT_INTERVAL,
            "T:{}|{} L:{} {} A:{} U:{} {}",
            vec![
                Provider::temperature(CPU_SENSOR_PATH, SENSOR_FILE),
                Provider::temperature(BOARD_SENSOR_PATH, SENSOR_FILE),
                Provider::LoadAverage,
                Provider::battery(BATTERY_PATH, labels),
                Provider::clock("%H:%M", "America/Los_Angeles"),
                Provider::clock("%H:%M", "UTC"),
                Provider::clock("KW%V %a %d %b %H:%M:%S %Z %Y", "Europe/Berlin"),
            ],
        )
    }

    /// Check that every provider has a slot and the interval is usable
    pub fn validate(&self) -> Result<()> {
        if self.template.placeholders() != self.providers.len() {
            return Err(StatusError::config(format!(
                "template has {} placeholders but {} providers are configured",
                self.template.placeholders(),
                self.providers.len()
            )));
        }

        if self.interval.is_zero() {
            return Err(StatusError::config("interval must be greater than zero"));
        }

        Ok(())
    }
}
