use chrono::{TimeZone, Utc};
use intercept_calculator::diary::{self, DiaryQuery, StatusFilter};
use intercept_calculator::engine::{
    MissionParameters, PRESET_WINDOWS, PropulsionType, compute_anytime_chase,
    compute_optimal_intercept,
};
use intercept_calculator::export::{assist, diary as diary_export};
use intercept_calculator::history::MissionLog;
use rand::rngs::mock::StepRng;

/// Three missions: two window successes and one failed anytime chase.
fn sample_log() -> MissionLog {
    let mut store = MissionLog::new();

    let ion = MissionParameters::best_interception(PropulsionType::Ion, 500.0, PRESET_WINDOWS[0]);
    store.append(
        "Mission #1",
        compute_optimal_intercept(&ion).unwrap(),
        Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap(),
    );

    let late = MissionParameters::anytime(
        PropulsionType::Chemical,
        2_000.0,
        Utc.with_ymd_and_hms(2026, 5, 15, 0, 0, 0).unwrap(),
    );
    store.append(
        "Mission #2",
        compute_anytime_chase(&late, &mut StepRng::new(0, 0)).unwrap(),
        Utc.with_ymd_and_hms(2025, 10, 3, 8, 0, 0).unwrap(),
    );

    let solar =
        MissionParameters::best_interception(PropulsionType::Solar, 3_000.0, PRESET_WINDOWS[2]);
    store.append(
        "Comet Chaser",
        compute_optimal_intercept(&solar).unwrap(),
        Utc.with_ymd_and_hms(2025, 10, 2, 8, 0, 0).unwrap(),
    );

    store
}

fn names(records: &[&intercept_calculator::history::MissionRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn status_filter_splits_successes_and_failures() {
    let store = sample_log();
    let success = DiaryQuery {
        status: StatusFilter::Success,
        search: None,
    };
    let failure = DiaryQuery {
        status: StatusFilter::Failure,
        search: None,
    };
    assert_eq!(
        names(&diary::filter(store.records(), &success)),
        ["Mission #1", "Comet Chaser"]
    );
    assert_eq!(names(&diary::filter(store.records(), &failure)), ["Mission #2"]);
    assert_eq!(diary::filter(store.records(), &DiaryQuery::default()).len(), 3);
}

#[test]
fn search_matches_name_propulsion_and_mode() {
    let store = sample_log();
    let search = |term: &str| {
        let query = DiaryQuery {
            status: StatusFilter::All,
            search: Some(term.to_string()),
        };
        names(&diary::filter(store.records(), &query))
    };

    assert_eq!(search("COMET"), ["Comet Chaser"]);
    assert_eq!(search("chemical"), ["Mission #2"]);
    assert_eq!(search("anytime"), ["Mission #2"]);
    assert_eq!(search("best-interception"), ["Mission #1", "Comet Chaser"]);
    assert_eq!(search("   ").len(), 3);
    assert!(search("warp").is_empty());
}

#[test]
fn newest_first_orders_by_timestamp() {
    let store = sample_log();
    let all = diary::filter(store.records(), &DiaryQuery::default());
    assert_eq!(
        names(&diary::newest_first(&all)),
        ["Mission #2", "Comet Chaser", "Mission #1"]
    );
}

#[test]
fn stats_summarize_the_whole_log() {
    let store = sample_log();
    let stats = diary::stats(store.records());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.success_rate_percent, 67);

    let expected: f64 =
        store.records().iter().map(|r| r.data.delta_v_km_s).sum::<f64>() / 3.0;
    assert!((stats.average_delta_v_km_s - expected).abs() < 1e-12);

    let best = stats.best.expect("two successes recorded");
    let lowest = store
        .records()
        .iter()
        .filter(|r| r.data.intercept_success)
        .map(|r| r.data.delta_v_km_s)
        .fold(f64::INFINITY, f64::min);
    assert!(best.data.intercept_success);
    assert_eq!(best.data.delta_v_km_s, lowest);
}

#[test]
fn stats_for_empty_log_are_zero() {
    let stats = diary::stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.success_rate_percent, 0);
    assert_eq!(stats.average_delta_v_km_s, 0.0);
    assert!(stats.best.is_none());
}

#[test]
fn csv_summary_has_header_and_one_row_per_mission() {
    let store = sample_log();
    let rows: Vec<_> = store.records().iter().map(|r| r.export_row()).collect();
    let mut buf = Vec::new();
    diary_export::write_summary_csv(&mut buf, &rows).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,timestamp,status,mode,propulsion,payload_kg,launch_utc,arrival_utc,travel_time_days,delta_v_km_s,fuel_required_kg"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("1,Mission #1,"));
    assert!(first.contains(",SUCCESS,best-interception,ion,"));
    assert!(first.ends_with(",113,15.73,1179"));
    assert!(lines.next().unwrap().contains(",FAILURE,anytime,chemical,"));
    assert_eq!(lines.count(), 1);
}

#[test]
fn text_summary_and_report_include_mission_figures() {
    let store = sample_log();
    let rows: Vec<_> = store.records().iter().map(|r| r.export_row()).collect();

    let mut summary = Vec::new();
    diary_export::write_summary_text(&mut summary, &rows).unwrap();
    let summary = String::from_utf8(summary).unwrap();
    assert!(summary.starts_with("Mission Diary Summary"));
    assert!(summary.contains("Mission #2 - FAILURE"));
    assert!(summary.contains("ΔV: 15.73 km/s, Travel Time: 113 days, Fuel: 1179 kg"));

    let mut report = Vec::new();
    diary_export::write_mission_report(&mut report, &rows[0]).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("Mission Report: Mission #1"));
    assert!(report.contains("Arrival       : 2026-03-27"));
    assert!(report.contains("Optimal trajectory confirmed!"));
}

#[test]
fn assist_context_uses_camel_case_keys() {
    let store = sample_log();
    let entries: Vec<_> = store.records().iter().map(|r| r.assist_entry()).collect();
    let json = assist::mission_context_json(&entries).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value[0];
    assert_eq!(first["name"], "Mission #1");
    assert_eq!(first["status"], "Success");
    assert_eq!(first["propulsion"], "ion");
    assert_eq!(first["deltaV"], "15.73");
    assert_eq!(first["travelTime"], 113);
    assert_eq!(first["fuel"], 1179);
    assert_eq!(value[1]["status"], "Failure");
}
