//! End-to-end tests for the time report pipeline.
//!
//! This suite covers:
//! - Decoding both record schemas from JSON payloads
//! - Normalization (whole-hour flooring, invalid-interval filtering)
//! - Aggregation (grouping, descending order, stable ties)
//! - Table rendering (highlighting, determinism)
//! - Chart layout (proportional sweeps, 360° closure, empty-dataset guard)
//! - Conservation and ordering properties over generated inputs

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use time_report::config::ReportConfig;
use time_report::models::{CanonicalRecord, EmployeeSummary, RawTimeRecord};
use time_report::pipeline::{aggregate_records, normalize_records};
use time_report::render::{layout_wedges, render_chart, render_table};
use time_report::source::decode_records;

// =============================================================================
// Test Helpers
// =============================================================================

fn interval(name: &str, start: &str, end: &str) -> RawTimeRecord {
    RawTimeRecord::Interval {
        employee_name: name.to_string(),
        start_time_utc: chrono::NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        end_time_utc: chrono::NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
    }
}

fn summarize(records: &[RawTimeRecord]) -> Vec<EmployeeSummary> {
    aggregate_records(&normalize_records(records).unwrap())
}

fn seeded_config() -> ReportConfig {
    ReportConfig {
        chart_size: 120,
        color_seed: Some(7),
        ..ReportConfig::default()
    }
}

// =============================================================================
// Full pipeline from a JSON payload
// =============================================================================

#[test]
fn test_interval_payload_to_both_artifacts() {
    let payload = r#"[
        {"EmployeeName": "Alice", "StartTimeUtc": "2022-02-21T08:00:00", "EndTimeUtc": "2022-02-21T18:00:00"},
        {"EmployeeName": "Bob", "StartTimeUtc": "2022-02-21T09:00:00", "EndTimeUtc": "2022-02-21T12:00:00"},
        {"EmployeeName": "Alice", "StartTimeUtc": "2022-02-22T08:00:00", "EndTimeUtc": "2022-02-22T16:30:00"}
    ]"#;

    let records = decode_records(payload).unwrap();
    let summary = summarize(&records);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].name, "Alice");
    assert_eq!(summary[0].total_time, 18); // 10 + 8.5 floored to 8
    assert_eq!(summary[1].name, "Bob");
    assert_eq!(summary[1].total_time, 3);

    let config = seeded_config();
    let html = render_table(&summary, &config);
    assert!(html.contains("<td>Alice</td><td>18</td>"));
    assert!(html.contains("<td>Bob</td><td>3</td>"));

    let canvas = render_chart(&summary, &config).unwrap();
    assert_eq!(canvas.width(), config.chart_size);
    assert_eq!(canvas.height(), config.chart_size);
}

#[test]
fn test_duration_payload_to_summary() {
    let payload = r#"[
        {"EmployeeName": "Carol", "TotalHours": 120},
        {"EmployeeName": "Dave", "TotalHours": 80},
        {"EmployeeName": "Carol", "TotalHours": 40}
    ]"#;

    let records = decode_records(payload).unwrap();
    let summary = summarize(&records);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].name, "Carol");
    assert_eq!(summary[0].total_time, 160);
    assert_eq!(summary[1].name, "Dave");
    assert_eq!(summary[1].total_time, 80);
}

#[test]
fn test_malformed_record_aborts_the_run() {
    let records = vec![
        RawTimeRecord::Duration {
            employee_name: "Alice".to_string(),
            total_hours: 5,
        },
        RawTimeRecord::Duration {
            employee_name: String::new(),
            total_hours: 1,
        },
    ];

    assert!(normalize_records(&records).is_err());
}

// =============================================================================
// Worked examples
// =============================================================================

/// Three interval records, one below a whole hour; zero-hour employees stay
/// in the summary and the chart gives them a zero sweep.
#[test]
fn test_worked_example_alice_and_bob() {
    let records = vec![
        interval("Alice", "2022-02-21 08:00:00", "2022-02-21 12:00:00"),
        interval("Bob", "2022-02-21 09:00:00", "2022-02-21 09:30:00"),
        interval("Alice", "2022-02-21 13:00:00", "2022-02-21 15:00:00"),
    ];

    let canonical = normalize_records(&records).unwrap();
    assert_eq!(
        canonical,
        vec![
            CanonicalRecord {
                employee: "Alice".to_string(),
                hours: 4,
            },
            CanonicalRecord {
                employee: "Bob".to_string(),
                hours: 0,
            },
            CanonicalRecord {
                employee: "Alice".to_string(),
                hours: 2,
            },
        ]
    );

    let summary = aggregate_records(&canonical);
    assert_eq!(summary[0].name, "Alice");
    assert_eq!(summary[0].total_time, 6);
    assert_eq!(summary[1].name, "Bob");
    assert_eq!(summary[1].total_time, 0);

    // Both totals sit below the default threshold of 100.
    let html = render_table(&summary, &ReportConfig::default());
    assert!(html.contains(
        "<tr style='background-color: #f99;'><td>Alice</td><td>6</td></tr>"
    ));
    assert!(html.contains(
        "<tr style='background-color: #f99;'><td>Bob</td><td>0</td></tr>"
    ));

    let wedges = layout_wedges(&summary, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(wedges[0].sweep_angle, 360.0);
    assert_eq!(wedges[1].sweep_angle, 0.0);
}

/// Two equal shares split the circle exactly in half.
#[test]
fn test_worked_example_even_split() {
    let summary = vec![
        EmployeeSummary {
            name: "A".to_string(),
            total_time: 50,
        },
        EmployeeSummary {
            name: "B".to_string(),
            total_time: 50,
        },
    ];

    let html = render_table(&summary, &ReportConfig::default());
    assert_eq!(html.matches("background-color: #f99;").count(), 2);

    let wedges = layout_wedges(&summary, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(wedges[0].sweep_angle, 180.0);
    assert_eq!(wedges[1].sweep_angle, 180.0);
}

// =============================================================================
// Ordering and independence of the renderers
// =============================================================================

#[test]
fn test_renderers_consume_the_same_order() {
    let summary = summarize(&[
        interval("Bob", "2022-02-21 00:00:00", "2022-02-21 05:00:00"),
        interval("Alice", "2022-02-21 00:00:00", "2022-02-21 09:00:00"),
        interval("Carol", "2022-02-21 00:00:00", "2022-02-21 02:00:00"),
    ]);

    let names: Vec<&str> = summary.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    // Table rows follow summary order.
    let html = render_table(&summary, &ReportConfig::default());
    let positions: Vec<usize> = names
        .iter()
        .map(|n| html.find(&format!("<td>{n}</td>")).unwrap())
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);

    // Wedges follow the same order with proportional sweeps.
    let wedges = layout_wedges(&summary, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(wedges[0].sweep_angle, 9.0 / 16.0 * 360.0);
    assert_eq!(wedges[1].sweep_angle, 5.0 / 16.0 * 360.0);
}

#[test]
fn test_table_still_renders_when_chart_is_empty() {
    let summary = summarize(&[interval(
        "Bob",
        "2022-02-21 09:00:00",
        "2022-02-21 09:30:00",
    )]);

    let config = ReportConfig::default();
    let html = render_table(&summary, &config);
    assert!(html.contains("<td>Bob</td><td>0</td>"));

    assert!(render_chart(&summary, &config).is_err());
}

// =============================================================================
// Properties over generated inputs
// =============================================================================

const NAMES: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

fn canonical_records() -> impl Strategy<Value = Vec<CanonicalRecord>> {
    proptest::collection::vec((0usize..NAMES.len(), 0u64..500), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(i, hours)| CanonicalRecord {
                employee: NAMES[i].to_string(),
                hours,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_total_time_is_conserved(records in canonical_records()) {
        let input_total: u64 = records.iter().map(|r| r.hours).sum();
        let summary_total: u64 = aggregate_records(&records)
            .iter()
            .map(|s| s.total_time)
            .sum();
        prop_assert_eq!(input_total, summary_total);
    }

    #[test]
    fn prop_summary_is_sorted_descending(records in canonical_records()) {
        let summary = aggregate_records(&records);
        for pair in summary.windows(2) {
            prop_assert!(pair[0].total_time >= pair[1].total_time);
        }
    }

    #[test]
    fn prop_wedge_angles_close_at_360(records in canonical_records(), seed in any::<u64>()) {
        let summary = aggregate_records(&records);
        let total: u64 = summary.iter().map(|s| s.total_time).sum();
        prop_assume!(total > 0);

        let wedges = layout_wedges(&summary, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(wedges.len(), summary.len());

        let last = wedges.last().unwrap();
        prop_assert!((last.start_angle + last.sweep_angle - 360.0).abs() < 1e-9);
        for wedge in &wedges {
            prop_assert!(wedge.sweep_angle >= 0.0);
        }
    }

    #[test]
    fn prop_empty_dataset_iff_zero_total(records in canonical_records()) {
        let summary = aggregate_records(&records);
        let total: u64 = summary.iter().map(|s| s.total_time).sum();

        let layout = layout_wedges(&summary, &mut StdRng::seed_from_u64(0));
        prop_assert_eq!(total == 0, layout.is_err());
    }

    #[test]
    fn prop_table_marks_exactly_rows_below_threshold(records in canonical_records()) {
        let summary = aggregate_records(&records);
        let config = ReportConfig::default();
        let html = render_table(&summary, &config);

        let expected = summary
            .iter()
            .filter(|s| s.total_time < config.low_hours_threshold)
            .count();
        prop_assert_eq!(html.matches("background-color: #f99;").count(), expected);
    }
}
