//! Load average provider.

use crate::platform::system_load;

/// The 1, 5 and 15 minute load averages as `"0.42 0.37 0.30"`.
///
/// Empty when the OS query fails; never a partial result.
pub fn load_average() -> String {
    match system_load() {
        Some(avgs) => format_load(avgs),
        None => {
            log::debug!("Load average query failed");
            String::new()
        }
    }
}

pub fn format_load(avgs: [f64; 3]) -> String {
    format!("{:.2} {:.2} {:.2}", avgs[0], avgs[1], avgs[2])
}
