use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use wmstatus::core::providers::BatteryLabels;
use wmstatus::{Provider, Scheduler, StatusConfig, StatusError, StatusSink};

#[derive(Default)]
struct MemorySink {
    published: Vec<String>,
    fail_every_other: bool,
    released: bool,
}

impl StatusSink for MemorySink {
    fn publish(&mut self, text: &str) -> wmstatus::Result<()> {
        self.published.push(text.to_string());
        if self.fail_every_other && self.published.len() % 2 == 0 {
            return Err(StatusError::publish("bar restarted"));
        }
        Ok(())
    }

    fn release(&mut self) -> wmstatus::Result<()> {
        self.released = true;
        Ok(())
    }
}

fn fake_machine() -> TempDir {
    let dir = TempDir::new().unwrap();
    let bat = dir.path().join("BAT0");
    let zone = dir.path().join("thermal_zone0");
    fs::create_dir(&bat).unwrap();
    fs::create_dir(&zone).unwrap();

    fs::write(bat.join("present"), "1\n").unwrap();
    fs::write(bat.join("charge_full_design"), "5000000\n").unwrap();
    fs::write(bat.join("charge_now"), "2500000\n").unwrap();
    fs::write(bat.join("status"), "Discharging\n").unwrap();
    fs::write(zone.join("temp"), "41000\n").unwrap();
    dir
}

fn config(machine: &TempDir) -> StatusConfig {
    StatusConfig::new(
        Duration::from_millis(5),
        "T:{} {} Z:{}",
        vec![
            Provider::temperature(machine.path().join("thermal_zone0"), "temp"),
            Provider::battery(machine.path().join("BAT0"), BatteryLabels::default()),
            Provider::clock("%Z", "UTC"),
        ],
    )
    .unwrap()
}

#[test]
fn test_tick_renders_fake_machine() {
    let machine = fake_machine();
    let mut scheduler = Scheduler::new(config(&machine), MemorySink::default()).unwrap();

    assert_eq!(scheduler.tick(), "T:41°C 50%- Z:UTC");
}

#[test]
fn test_battery_removed_between_ticks() {
    let machine = fake_machine();
    let mut scheduler = Scheduler::new(config(&machine), MemorySink::default()).unwrap();

    scheduler.tick();
    fs::remove_file(machine.path().join("BAT0").join("present")).unwrap();
    scheduler.tick();

    assert_eq!(
        scheduler.sink().published,
        vec!["T:41°C 50%- Z:UTC", "T:41°C  Z:UTC"]
    );
}

#[test]
fn test_run_survives_publish_failures_until_stopped() {
    let machine = fake_machine();
    let sink = MemorySink {
        fail_every_other: true,
        ..Default::default()
    };
    let scheduler = Scheduler::new(config(&machine), sink).unwrap();

    let (stop_tx, stop_rx) = mpsc::channel();
    let handle = thread::spawn(move || scheduler.run(&stop_rx));

    thread::sleep(Duration::from_millis(100));
    stop_tx.send(()).unwrap();
    let sink = handle.join().unwrap();

    assert!(sink.published.len() >= 3);
    assert!(sink.published.iter().all(|line| line == "T:41°C 50%- Z:UTC"));
    assert!(sink.released);
}
