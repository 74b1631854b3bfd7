use chrono::{TimeZone, Utc};
use intercept_calculator::engine::{
    MissionOutcome, MissionParameters, PRESET_WINDOWS, PropulsionType, compute_optimal_intercept,
};
use intercept_calculator::history::{HistoryError, MissionLog};
use tempfile::tempdir;

fn outcome(propulsion: PropulsionType, payload: f64) -> MissionOutcome {
    let params = MissionParameters::best_interception(propulsion, payload, PRESET_WINDOWS[0]);
    compute_optimal_intercept(&params).unwrap()
}

#[test]
fn missing_file_loads_as_empty_log() {
    let dir = tempdir().unwrap();
    let store = MissionLog::load(dir.path().join("absent.json")).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.next_mission_name(), "Mission #1");
}

#[test]
fn appends_get_increasing_ids_and_default_names() {
    let mut store = MissionLog::new();
    let ts = Utc.with_ymd_and_hms(2025, 11, 2, 9, 0, 0).unwrap();

    let first = store.record(outcome(PropulsionType::Ion, 500.0), ts).clone();
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Mission #1");
    assert_eq!(store.next_mission_name(), "Mission #2");

    let second = store.append("Flyby", outcome(PropulsionType::Solar, 900.0), ts);
    assert_eq!(second, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(2).unwrap().name, "Flyby");
    assert!(store.get(3).is_none());
}

#[test]
fn saved_log_round_trips_outcomes_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/history.json");
    let ts = Utc.with_ymd_and_hms(2025, 12, 1, 12, 30, 0).unwrap();

    let mut store = MissionLog::new();
    let data = outcome(PropulsionType::Nuclear, 2_500.0);
    store.append("Mission #1", data.clone(), ts);
    store.save(&path).unwrap();

    let loaded = MissionLog::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    let record = &loaded.records()[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.timestamp, ts);
    assert_eq!(record.data, data);
}

#[test]
fn ids_are_not_reused_after_clear() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let ts = Utc::now();

    let mut store = MissionLog::new();
    store.append("a", outcome(PropulsionType::Ion, 600.0), ts);
    store.append("b", outcome(PropulsionType::Ion, 700.0), ts);
    store.clear();
    store.save(&path).unwrap();

    let mut reloaded = MissionLog::load(&path).unwrap();
    assert!(reloaded.is_empty());
    let id = reloaded.append("c", outcome(PropulsionType::Ion, 800.0), ts);
    assert_eq!(id, 3);
}

#[test]
fn stale_next_id_is_raised_past_stored_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = MissionLog::new();
    store.append("a", outcome(PropulsionType::Chemical, 1_000.0), Utc::now());
    store.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json["next_id"] = serde_json::json!(1);
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let mut reloaded = MissionLog::load(&path).unwrap();
    assert_eq!(reloaded.append("b", outcome(PropulsionType::Chemical, 1_000.0), Utc::now()), 2);
}

#[test]
fn unknown_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, r#"{"version":99,"next_id":1,"records":[]}"#).unwrap();

    match MissionLog::load(&path) {
        Err(HistoryError::UnsupportedVersion { found }) => assert_eq!(found, 99),
        other => panic!("expected version error, got {other:?}"),
    }
}

#[test]
fn corrupt_file_is_a_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(MissionLog::load(&path), Err(HistoryError::Json(_))));
}

#[cfg(target_os = "linux")]
#[test]
fn failed_write_is_reported() {
    let mut store = MissionLog::new();
    store.append("a", outcome(PropulsionType::Ion, 500.0), Utc::now());
    assert!(matches!(store.save("/dev/full"), Err(HistoryError::Io(_))));
}

#[test]
fn maximal_stored_id_does_not_overflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = MissionLog::new();
    store.append("a", outcome(PropulsionType::Solar, 1_000.0), Utc::now());
    store.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    json["records"][0]["id"] = serde_json::json!(u64::MAX);
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let mut reloaded = MissionLog::load(&path).unwrap();
    assert_eq!(reloaded.append("b", outcome(PropulsionType::Solar, 1_000.0), Utc::now()), u64::MAX);
}
