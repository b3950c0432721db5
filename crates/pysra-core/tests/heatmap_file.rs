//! Loading heatmap data from disk and rendering it into a grid and stats.

use chrono::NaiveDate;
use pysra_core::{DashboardStats, HeatmapData, HeatmapGrid, PysraError};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn load_render_and_summarize() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("heatmap.json");
    std::fs::write(
        &path,
        r#"{
            "2026-10-17": { "intensity": 5 },
            "2026-10-18": { "intensity": 2.5, "emotion": "Neutral" },
            "2026-10-19": { "intensity": 0 }
        }"#,
    )
    .unwrap();

    let data = HeatmapData::load(&path).unwrap();
    assert_eq!(data.len(), 3);

    let today = date("2026-10-19");
    let grid = HeatmapGrid::build(&data, today).unwrap();
    let logged: Vec<_> = grid.days().filter(|d| d.count == 1).collect();
    assert_eq!(logged.len(), 3);
    assert_eq!(logged[0].intensity, 1.0);
    assert_eq!(logged[1].intensity, 0.5);
    // a zero score is still a logged day
    assert_eq!(logged[2].intensity, 0.0);
    assert_eq!(logged[2].tooltip(), "2026-10-19: 1 entries");

    let stats = DashboardStats::compute(&data, today);
    assert_eq!(stats.days_logged, 3);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.average_percent(), 50);
}

#[test]
fn malformed_file_is_a_json_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = HeatmapData::load(&path).unwrap_err();
    assert!(matches!(err, PysraError::Json(_)));
}

#[test]
fn data_round_trips_through_json() {
    let mut data = HeatmapData::new();
    data.insert(date("2026-01-02"), 4.0);
    let json = serde_json::to_string(&data).unwrap();
    assert_eq!(json, r#"{"2026-01-02":{"intensity":4.0}}"#);
}
