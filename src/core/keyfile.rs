//! Single-value pseudo-file reader.
//!
//! sysfs and procfs expose one attribute per file. Missing attributes are
//! routine (a desktop has no battery), so every failure here is reported as
//! `None` rather than an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Upper bound on bytes read from a single key file
pub const MAX_KEY_LEN: usize = 512;

/// Read the first line of `base/file_name`.
///
/// Returns `None` when the file is missing, unreadable or empty. The
/// trailing newline is removed and anything past [`MAX_KEY_LEN`] bytes is
/// dropped.
pub fn read_key(base: &Path, file_name: &str) -> Option<String> {
    let path = base.join(file_name);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            log::trace!("Key file {} not available: {}", path.display(), e);
            return None;
        }
    };

    let mut buf = Vec::with_capacity(64);
    if let Err(e) = file.take(MAX_KEY_LEN as u64).read_to_end(&mut buf) {
        log::debug!("Failed to read key file {}: {}", path.display(), e);
        return None;
    }

    if buf.is_empty() {
        return None;
    }

    let line = match buf.iter().position(|&b| b == b'\n') {
        Some(end) => &buf[..end],
        None => &buf[..],
    };
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    Some(String::from_utf8_lossy(line).into_owned())
}
