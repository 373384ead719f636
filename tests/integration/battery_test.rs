use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wmstatus::core::providers::{battery_status, BatteryLabels};

fn write_attrs(dir: &Path, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        fs::write(dir.join(name), format!("{}\n", value)).unwrap();
    }
}

#[test]
fn test_absent_present_file_ignores_everything_else() {
    let dir = TempDir::new().unwrap();
    write_attrs(
        dir.path(),
        &[
            ("charge_full_design", "5000000"),
            ("charge_now", "2500000"),
            ("status", "Discharging"),
        ],
    );

    assert_eq!(battery_status(dir.path(), &BatteryLabels::default()), "");
}

#[test]
fn test_present_not_one_is_not_present() {
    for present in ["0", "", "yes", "2"] {
        let dir = TempDir::new().unwrap();
        write_attrs(
            dir.path(),
            &[
                ("present", present),
                ("charge_full_design", "5000000"),
                ("charge_now", "2500000"),
            ],
        );

        assert_eq!(
            battery_status(dir.path(), &BatteryLabels::default()),
            "not present",
            "present = {:?}",
            present
        );
    }
}

#[test]
fn test_scenarios_from_a_real_battery() {
    let dir = TempDir::new().unwrap();
    write_attrs(
        dir.path(),
        &[
            ("present", "1"),
            ("charge_full_design", "5000000"),
            ("charge_now", "2500000"),
            ("status", "Discharging"),
        ],
    );
    let labels = BatteryLabels::default();
    assert_eq!(battery_status(dir.path(), &labels), "50%-");

    write_attrs(dir.path(), &[("charge_now", "4980000")]);
    assert_eq!(battery_status(dir.path(), &labels), "AC");
}

#[test]
fn test_custom_labels() {
    let dir = TempDir::new().unwrap();
    write_attrs(
        dir.path(),
        &[
            ("present", "1"),
            ("energy_full_design", "100"),
            ("energy_now", "100"),
            ("status", "Full"),
        ],
    );

    let labels = BatteryLabels {
        fully_charged: "charged".to_string(),
        unknown: '.',
        ..Default::default()
    };
    assert_eq!(battery_status(dir.path(), &labels), "charged");

    write_attrs(dir.path(), &[("energy_now", "12")]);
    assert_eq!(battery_status(dir.path(), &labels), "12%.");
}

#[test]
fn test_negative_capacity_is_invalid() {
    let dir = TempDir::new().unwrap();
    write_attrs(
        dir.path(),
        &[
            ("present", "1"),
            ("charge_full_design", "5000000"),
            ("charge_now", "-1"),
        ],
    );

    assert_eq!(battery_status(dir.path(), &BatteryLabels::default()), "invalid");
}
