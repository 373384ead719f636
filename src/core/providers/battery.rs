//! Battery charge provider backed by a `power_supply` sysfs directory.

use std::path::Path;

use crate::core::keyfile::read_key;
use crate::core::numeric::{parse_int, Numeric};

/// Charging state reported by the `status` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeDirection {
    Charging,
    Discharging,
    Unknown,
}

impl ChargeDirection {
    fn from_status(status: Option<&str>) -> Self {
        match status {
            Some(s) if s.starts_with("Discharging") => ChargeDirection::Discharging,
            Some(s) if s.starts_with("Charging") => ChargeDirection::Charging,
            _ => ChargeDirection::Unknown,
        }
    }
}

/// Display strings for each battery outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryLabels {
    pub not_present: String,
    pub fully_charged: String,
    pub invalid: String,
    pub charging: char,
    pub discharging: char,
    pub unknown: char,
}

impl BatteryLabels {
    pub fn marker(&self, direction: ChargeDirection) -> char {
        match direction {
            ChargeDirection::Charging => self.charging,
            ChargeDirection::Discharging => self.discharging,
            ChargeDirection::Unknown => self.unknown,
        }
    }
}

impl Default for BatteryLabels {
    fn default() -> Self {
        Self {
            not_present: "not present".to_string(),
            fully_charged: "AC".to_string(),
            invalid: "invalid".to_string(),
            charging: '+',
            discharging: '-',
            unknown: '?',
        }
    }
}

/// One sample of the battery attributes
#[derive(Debug, Clone, PartialEq)]
pub enum BatteryReading {
    /// No `present` attribute, or no capacity attributes
    Unavailable,
    NotPresent,
    Present {
        design: Numeric<i64>,
        current: Numeric<i64>,
        direction: ChargeDirection,
    },
}

impl BatteryReading {
    /// Read the attributes under `base`, stopping at the first missing one.
    pub fn read(base: &Path) -> Self {
        let Some(present) = read_key(base, "present") else {
            return BatteryReading::Unavailable;
        };
        if !present.starts_with('1') {
            return BatteryReading::NotPresent;
        }

        let Some(design) = read_capacity(base, "charge_full_design", "energy_full_design") else {
            return BatteryReading::Unavailable;
        };
        let Some(current) = read_capacity(base, "charge_now", "energy_now") else {
            return BatteryReading::Unavailable;
        };

        let status = read_key(base, "status");

        BatteryReading::Present {
            design: parse_int(&design),
            current: parse_int(&current),
            direction: ChargeDirection::from_status(status.as_deref()),
        }
    }

    pub fn render(&self, labels: &BatteryLabels) -> String {
        match self {
            BatteryReading::Unavailable => String::new(),
            BatteryReading::NotPresent => labels.not_present.clone(),
            BatteryReading::Present {
                design,
                current,
                direction,
            } => {
                let (Some(design), Some(current)) = (capacity(*design), capacity(*current)) else {
                    return labels.invalid.clone();
                };
                if design == 0 {
                    return labels.invalid.clone();
                }

                let percent = current as f64 / design as f64 * 100.0;
                if percent >= 99.0 {
                    return labels.fully_charged.clone();
                }

                format!("{:.0}%{}", percent.round(), labels.marker(*direction))
            }
        }
    }
}

/// Charge-based attribute first, energy-based fallback
fn read_capacity(base: &Path, charge_file: &str, energy_file: &str) -> Option<String> {
    read_key(base, charge_file).or_else(|| read_key(base, energy_file))
}

fn capacity(value: Numeric<i64>) -> Option<i64> {
    value.valid().filter(|v| *v >= 0)
}

/// Render the battery under `base`, e.g. `/sys/class/power_supply/BAT0`.
pub fn battery_status(base: &Path, labels: &BatteryLabels) -> String {
    BatteryReading::read(base).render(labels)
}
