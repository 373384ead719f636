//! Localized wall-clock provider.
//!
//! The zone is resolved per call from the bundled IANA database, so
//! rendering several zones in one tick never touches the process `TZ`.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Current time in `zone` rendered with a strftime-style `pattern`.
pub fn local_time(pattern: &str, zone: &str) -> String {
    local_time_at(pattern, zone, Utc::now())
}

/// Render `instant` in `zone`.
///
/// Empty when the zone is unknown, the pattern has an invalid specifier,
/// or the result is empty.
pub fn local_time_at(pattern: &str, zone: &str, instant: DateTime<Utc>) -> String {
    let tz: Tz = match zone.parse() {
        Ok(tz) => tz,
        Err(e) => {
            log::debug!("Unknown time zone {:?}: {}", zone, e);
            return String::new();
        }
    };

    let local = instant.with_timezone(&tz);
    let mut rendered = String::new();
    if write!(rendered, "{}", local.format(pattern)).is_err() {
        log::debug!("Invalid time format pattern {:?}", pattern);
        return String::new();
    }

    rendered
}
