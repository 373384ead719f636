use anyhow::{Context, Result};
use std::sync::mpsc;

use wmstatus::{Scheduler, StatusConfig, XRootSink};

fn main() {
    wmstatus::init_logging();

    if let Err(e) = run() {
        eprintln!("wmstatus: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = StatusConfig::multi_zone().context("Invalid built-in status layout")?;
    let sink = XRootSink::connect().context("Cannot open display")?;
    let scheduler = Scheduler::new(config, sink)?;

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to set signal handler")?;

    scheduler.run(&stop_rx);
    Ok(())
}
