//! Thermal sensor provider.

use std::path::Path;

use crate::core::keyfile::read_key;
use crate::core::numeric::parse_float;

/// Render a millidegree sensor file such as `thermal_zone0/temp` as `"23°C"`.
///
/// A missing sensor renders empty. Unparseable content counts as 0°C.
pub fn temperature(base: &Path, sensor_file: &str) -> String {
    let Some(raw) = read_key(base, sensor_file) else {
        return String::new();
    };

    let millidegrees = parse_float(&raw).or_zero();
    format_celsius(millidegrees / 1000.0)
}

fn format_celsius(degrees: f64) -> String {
    format!("{:02.0}°C", degrees)
}
