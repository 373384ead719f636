//! Custom script hook: the first line a shell command prints.

use std::io::Read;
use std::process::{Command, Stdio};

/// Upper bound on bytes read from a command's stdout
const MAX_OUTPUT_LEN: u64 = 1024;

/// Run `cmd` through `sh -c` and return the first line of its output.
///
/// Spawn failures, read failures and silent commands all render empty.
pub fn run_command(cmd: &str) -> String {
    let mut child = match Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::debug!("Failed to spawn {:?}: {}", cmd, e);
            return String::new();
        }
    };

    let mut buf = Vec::new();
    let read = match child.stdout.take() {
        Some(stdout) => stdout.take(MAX_OUTPUT_LEN).read_to_end(&mut buf),
        None => Ok(0),
    };

    // Reap the child even if the read failed
    match child.wait() {
        Ok(status) if !status.success() => log::debug!("{:?} exited with {}", cmd, status),
        Ok(_) => {}
        Err(e) => log::debug!("Failed to wait for {:?}: {}", cmd, e),
    }

    if let Err(e) = read {
        log::debug!("Failed to read output of {:?}: {}", cmd, e);
        return String::new();
    }

    let output = String::from_utf8_lossy(&buf);
    output.lines().next().unwrap_or_default().to_string()
}
