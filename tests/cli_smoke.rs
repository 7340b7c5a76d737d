use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_carousel")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "carousel.exe"
            } else {
                "carousel"
            });
            p
        })
}

fn run(args: &[&str]) -> serde_json::Value {
    let out = Command::new(exe()).args(args).output().unwrap();
    assert!(
        out.status.success(),
        "carousel {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn cli_frame_prints_focused_card() {
    // Default layout: step 273.5, so 305 rounds to card 1.
    let frame = run(&["frame", "--offset", "305", "--compact"]);
    assert_eq!(frame["focused"], 1);
    assert_eq!(frame["cards"].as_array().unwrap().len(), 10);
}

#[test]
fn cli_sweep_reports_each_focus_change() {
    let out = Command::new(exe())
        .args(["sweep", "--from", "0", "--to", "2700", "--ticks", "90"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let events: Vec<serde_json::Value> = String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // Card 0 is focused at the start, so only the moves to 1..=9 are reported.
    assert_eq!(events.len(), 9);
    let to: Vec<u64> = events.iter().map(|e| e["to"].as_u64().unwrap()).collect();
    assert_eq!(to, (1..=9).collect::<Vec<u64>>());
    let from: Vec<u64> = events.iter().map(|e| e["from"].as_u64().unwrap()).collect();
    assert_eq!(from, (0..=8).collect::<Vec<u64>>());

    let ticks: Vec<u64> = events.iter().map(|e| e["tick"].as_u64().unwrap()).collect();
    assert_eq!(ticks, [5, 14, 23, 32, 42, 51, 60, 69, 78]);
    assert_eq!(events[0]["card_id"], "2");
    assert_eq!(events[8]["card_id"], "10");
}

#[test]
fn cli_sweep_past_the_end_stays_on_last_card() {
    let out = Command::new(exe())
        .args(["sweep", "--from", "5000", "--to", "9000", "--ticks", "0"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn cli_snap_settles_on_nearest_card() {
    let manifest = env!("CARGO_MANIFEST_DIR");
    let config = format!("{manifest}/tests/data/wide_config.json");
    let deck = format!("{manifest}/tests/data/mini_deck.json");

    let report = run(&[
        "snap",
        "--config",
        config.as_str(),
        "--deck",
        deck.as_str(),
        "--offset",
        "470",
        "--at-ms",
        "1000",
    ]);
    assert_eq!(report["index"], 2);
    assert_eq!(report["target_offset"], 600.0);
    assert_eq!(report["tween_offset"], 600.0);
}

#[test]
fn cli_deck_filters_by_place() {
    let list = run(&["deck", "--filter", "stade"]);
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["2", "5"]);
}

#[test]
fn cli_rejects_non_finite_offset() {
    let status = Command::new(exe())
        .args(["frame", "--offset", "NaN"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_snap_rejects_invalid_config_file() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("inverted_backdrop.json");
    std::fs::write(
        &path,
        r#"{"backdrop": {"opacity": [0.8, 0.5, 0.0], "scale": [1.3, 1.2, 1.1]}}"#,
    )
    .unwrap();

    let out = Command::new(exe())
        .args(["snap", "--offset", "100", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("edge <= near <= center"));
}
