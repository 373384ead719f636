//! Display sinks for the finished status line.
//!
//! dwm and its relatives show the X11 root window name in their bar, so
//! publishing means storing that name and flushing the display connection.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, StatusError};

/// Somewhere a complete status line can be shown
pub trait StatusSink {
    /// Replace the visible status text with `text`
    fn publish(&mut self, text: &str) -> Result<()>;

    /// Give the display back on shutdown
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sets the root window name through `xsetroot`, which stores the name and
/// syncs with the X server before it exits.
#[derive(Debug)]
pub struct XRootSink {
    display: String,
    xsetroot: PathBuf,
}

impl XRootSink {
    /// Locate the display and `xsetroot`, then probe with an empty name.
    pub fn connect() -> Result<Self> {
        let display = env::var("DISPLAY")
            .ok()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| StatusError::sink_unavailable("DISPLAY is not set"))?;

        let xsetroot = which::which("xsetroot")
            .map_err(|e| StatusError::sink_unavailable(format!("xsetroot not found: {}", e)))?;

        let sink = Self { display, xsetroot };
        sink.set_name("").map_err(|e| {
            StatusError::sink_unavailable(format!("cannot open display {}: {}", sink.display, e))
        })?;

        log::info!("Connected to display {}", sink.display);
        Ok(sink)
    }

    fn set_name(&self, name: &str) -> Result<()> {
        let output = Command::new(&self.xsetroot)
            .arg("-display")
            .arg(&self.display)
            .arg("-name")
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(StatusError::publish(format!(
                "xsetroot exited with {}: {}",
                output.status,
                stderr.trim()
            )))
        }
    }
}

impl StatusSink for XRootSink {
    fn publish(&mut self, text: &str) -> Result<()> {
        self.set_name(text)
    }

    fn release(&mut self) -> Result<()> {
        log::info!("Clearing status on display {}", self.display);
        self.set_name("")
    }
}
