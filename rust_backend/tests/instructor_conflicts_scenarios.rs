//! End-to-end instructor conflict reports, from snapshot JSON to CSV.

mod support;

use serde_json::json;

use examtt_reports::algorithms::ConflictSettings;
use examtt_reports::core::domain::RoomId;
use examtt_reports::distance::{DistanceMetric, GeoDistanceMetric};
use examtt_reports::io::writers::to_csv_string;
use examtt_reports::services::report_checksum;

/// Every distinct pair of rooms is 120 m apart.
struct FixedMetric;

impl DistanceMetric for FixedMetric {
    fn distance_in_meters(
        &self,
        _id1: RoomId,
        _x1: Option<f64>,
        _y1: Option<f64>,
        _id2: RoomId,
        _x2: Option<f64>,
        _y2: Option<f64>,
    ) -> f64 {
        120.0
    }

    fn distance_in_minutes(
        &self,
        _id1: RoomId,
        _x1: Option<f64>,
        _y1: Option<f64>,
        _id2: RoomId,
        _x2: Option<f64>,
        _y2: Option<f64>,
    ) -> u32 {
        2
    }
}

fn rooms() -> serde_json::Value {
    json!([
        {"id": 1, "name": "EE 129"},
        {"id": 2, "name": "EE 170"},
        {"id": 3, "name": "Annex", "ignoreTooFar": true}
    ])
}

fn threshold(meters: f64) -> ConflictSettings {
    ConflictSettings {
        back_to_back_distance: meters,
        ..ConflictSettings::default()
    }
}

#[test]
fn direct_conflict_in_one_period() {
    let snapshot = support::single_instructor(
        support::periods(1, 6),
        rooms(),
        &[(1, "A", &[], 3, &[1]), (2, "B", &[], 3, &[2])],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &GeoDistanceMetric::default(), ConflictSettings::default());

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row[0], "I");
    assert_eq!(row[1], "direct");
    assert_eq!(row[2], "A\nB");
    assert_eq!(row[3].lines().next(), Some("4"));
}

#[test]
fn back_to_back_with_distance() {
    let snapshot = support::single_instructor(
        support::periods(1, 6),
        rooms(),
        &[(1, "A", &[], 2, &[1]), (2, "B", &[], 3, &[2])],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &FixedMetric, threshold(50.0));

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][1], "back-to-back");
    assert_eq!(table.rows[0][3], "3\n4");
    assert_eq!(table.rows[0][7], "120.0");
}

#[test]
fn back_to_back_in_the_same_room_has_blank_distance() {
    let snapshot = support::single_instructor(
        support::periods(1, 6),
        rooms(),
        &[(1, "A", &[], 2, &[1]), (2, "B", &[], 3, &[1])],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &FixedMetric, threshold(50.0));

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][1], "back-to-back");
    assert_eq!(table.rows[0][7], "");
}

#[test]
fn back_to_back_from_ignored_room_has_blank_distance() {
    let snapshot = support::single_instructor(
        support::periods(1, 6),
        rooms(),
        &[(1, "A", &[], 2, &[3]), (2, "B", &[], 3, &[1])],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &FixedMetric, threshold(0.0));
    assert_eq!(table.rows[0][7], "");
}

#[test]
fn back_to_back_distance_disabled_by_negative_threshold() {
    let snapshot = support::single_instructor(
        support::periods(1, 6),
        rooms(),
        &[(1, "A", &[], 2, &[1]), (2, "B", &[], 3, &[2])],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &FixedMetric, threshold(-1.0));
    assert_eq!(table.rows[0][7], "");
}

#[test]
fn more_than_two_exams_reported_once_at_day_end() {
    let snapshot = support::single_instructor(
        support::periods(2, 10),
        rooms(),
        &[
            (1, "A", &["A Lec 1"], 0, &[1]),
            (2, "B", &[], 4, &[2]),
            (3, "C", &[], 8, &[1, 2]),
        ],
    );
    let loaded = support::load(&snapshot);
    let table = support::report(&loaded, &GeoDistanceMetric::default(), ConflictSettings::default());

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row[1], "more-2-day");
    assert_eq!(row[2], "A Lec 1\nB\nC");
    assert_eq!(row[3], "1\n5\n9");
    assert_eq!(row[4], "Day 1\nDay 1\nDay 1");
    assert_eq!(row[5], "8:00\n16:00\n24:00");
    assert_eq!(row[6], "EE 129\nEE 170\nEE 129, EE 170");
}

#[test]
fn no_back_to_back_across_days_without_day_break() {
    let snapshot = support::single_instructor(
        support::periods(2, 4),
        rooms(),
        &[(1, "A", &[], 3, &[1]), (2, "B", &[], 4, &[2])],
    );
    let loaded = support::load(&snapshot);

    let table = support::report(&loaded, &FixedMetric, threshold(50.0));
    assert!(table.is_empty());

    let settings = ConflictSettings {
        day_break_back_to_back: true,
        back_to_back_distance: 50.0,
    };
    let table = support::report(&loaded, &FixedMetric, settings);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][4], "Day 1\nDay 2");
}

#[test]
fn report_is_byte_identical_across_runs() {
    let snapshot = support::single_instructor(
        support::periods(2, 4),
        rooms(),
        &[
            (1, "A", &["A Lec 1", "A Lec 2"], 0, &[1]),
            (2, "B", &[], 0, &[2]),
            (3, "C", &[], 1, &[3]),
            (4, "D", &[], 2, &[1]),
        ],
    );
    let loaded = support::load(&snapshot);
    let metric = GeoDistanceMetric::default();

    let first = support::report(&loaded, &metric, threshold(0.0));
    let second = support::report(&loaded, &metric, threshold(0.0));
    assert_eq!(to_csv_string(&first), to_csv_string(&second));
    assert_eq!(report_checksum(&first), report_checksum(&second));
    assert!(to_csv_string(&first).starts_with(
        "Instructor,Type,Section/Course,Period,Day,Time,Room,Distance\n"
    ));
}
