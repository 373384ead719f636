use std::fs;

use tempfile::TempDir;
use wmstatus::core::providers::{temperature, BatteryLabels};
use wmstatus::core::StatusTemplate;
use wmstatus::{Provider, StatusConfig};

#[test]
fn test_sensor_scenario() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("temp"), "23456\n").unwrap();

    assert_eq!(temperature(dir.path(), "temp"), "23°C");
}

#[test]
fn test_template_round_trip_for_every_gap_combination() {
    let template = StatusTemplate::parse("T:{}|{} L:{} {} A:{} U:{} {}").unwrap();
    let filled = ["45°C", "47°C", "0.52", "50%-", "09:15", "15:15", "KW03"];

    for mask in 0..(1u32 << filled.len()) {
        let values: Vec<&str> = filled
            .iter()
            .enumerate()
            .map(|(i, v)| if mask & (1 << i) != 0 { *v } else { "" })
            .collect();

        let line = template.render(&values).unwrap();
        assert_eq!(template.split(&line).unwrap(), values, "line {:?}", line);
    }
}

#[test]
fn test_missing_hardware_leaves_gaps() {
    let empty = TempDir::new().unwrap();
    let config = StatusConfig::new(
        StatusConfig::multi_zone().unwrap().interval,
        "T:{} B:{} C:{}",
        vec![
            Provider::temperature(empty.path(), "temp"),
            Provider::battery(empty.path(), BatteryLabels::default()),
            Provider::command("printf ok"),
        ],
    )
    .unwrap();

    let values: Vec<String> = config.providers.iter().map(Provider::sample).collect();
    let line = config.template.render(&values).unwrap();

    assert_eq!(line, "T: B: C:ok");
}
