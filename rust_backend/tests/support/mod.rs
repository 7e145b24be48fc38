use serde_json::{json, Value};

use examtt_reports::algorithms::ConflictSettings;
use examtt_reports::distance::DistanceMetric;
use examtt_reports::io::loaders::{SnapshotLoadResult, SnapshotLoader};
use examtt_reports::services::{ReportAssembler, ReportTable};

/// `days` days of `per_day` periods, labelled like a registrar would.
pub fn periods(days: usize, per_day: usize) -> Vec<Value> {
    (0..days * per_day)
        .map(|i| {
            json!({
                "index": i,
                "day": i / per_day,
                "dayStr": format!("Day {}", i / per_day + 1),
                "timeStr": format!("{}:00", 8 + 2 * (i % per_day)),
            })
        })
        .collect()
}

/// A snapshot with one instructor "I" (id 1) teaching every exam.
///
/// `exams` holds `(id, name, owners, period, rooms)`.
pub fn single_instructor(
    periods: Vec<Value>,
    rooms: Value,
    exams: &[(u64, &str, &[&str], usize, &[u64])],
) -> Value {
    let exam_values: Vec<Value> = exams
        .iter()
        .map(|(id, name, owners, _, _)| {
            let owners: Vec<Value> = owners
                .iter()
                .enumerate()
                .map(|(k, o)| json!({"id": id * 100 + k as u64, "name": o, "instructors": [1]}))
                .collect();
            json!({"id": id, "name": name, "owners": owners})
        })
        .collect();
    let assignment: Vec<Value> = exams
        .iter()
        .map(|(id, _, _, period, rooms)| json!({"exam": id, "period": period, "rooms": rooms}))
        .collect();
    let exam_ids: Vec<u64> = exams.iter().map(|e| e.0).collect();

    json!({
        "periods": periods,
        "rooms": rooms,
        "exams": exam_values,
        "instructors": [{"id": 1, "name": "I", "exams": exam_ids}],
        "assignment": assignment,
    })
}

pub fn load(snapshot: &Value) -> SnapshotLoadResult {
    SnapshotLoader::load_from_json_str(&snapshot.to_string()).expect("snapshot should load")
}

pub fn report(
    loaded: &SnapshotLoadResult,
    metric: &dyn DistanceMetric,
    settings: ConflictSettings,
) -> ReportTable {
    ReportAssembler::new(
        &loaded.snapshot.timetable,
        &loaded.snapshot.assignment,
        &loaded.index,
        metric,
        settings,
    )
    .report()
    .expect("report should generate")
}
