use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::core::domain::{
    Exam, ExamId, Instructor, InstructorId, Owner, OwnerId, Period, Placement, Room, RoomId,
    RoomPlacement,
};
use crate::core::error::ReportError;
use crate::core::timetable::{Assignment, Timetable};

/// Custom deserializer that accepts either string or integer ids
fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(u64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
        StringOrInt::Int(i) => Ok(i),
    }
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Id(#[serde(deserialize_with = "deserialize_id")] u64);

    Ok(Vec::<Id>::deserialize(deserializer)?
        .into_iter()
        .map(|id| id.0)
        .collect())
}

/// Raw JSON structure for a period
#[derive(Debug, Deserialize)]
struct RawPeriod {
    index: usize,
    day: usize,
    #[serde(rename = "dayStr", default)]
    day_str: String,
    #[serde(rename = "timeStr", default)]
    time_str: String,
}

/// Raw JSON structure for a room
#[derive(Debug, Deserialize)]
struct RawRoom {
    #[serde(deserialize_with = "deserialize_id")]
    id: u64,
    name: String,
    x: Option<f64>,
    y: Option<f64>,
    #[serde(rename = "ignoreTooFar", default)]
    ignore_too_far: bool,
}

/// Raw JSON structure for an exam owner (section or course)
#[derive(Debug, Deserialize)]
struct RawOwner {
    #[serde(deserialize_with = "deserialize_id")]
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "deserialize_ids")]
    instructors: Vec<u64>,
}

/// Raw JSON structure for an exam
#[derive(Debug, Deserialize)]
struct RawExam {
    #[serde(deserialize_with = "deserialize_id")]
    id: u64,
    name: String,
    #[serde(default)]
    owners: Vec<RawOwner>,
}

/// Raw JSON structure for an instructor
#[derive(Debug, Deserialize)]
struct RawInstructor {
    #[serde(deserialize_with = "deserialize_id")]
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "deserialize_ids")]
    exams: Vec<u64>,
}

/// Raw JSON structure for one exam placement
#[derive(Debug, Deserialize)]
struct RawPlacement {
    #[serde(deserialize_with = "deserialize_id")]
    exam: u64,
    period: usize,
    #[serde(default, deserialize_with = "deserialize_ids")]
    rooms: Vec<u64>,
}

/// Container for the snapshot file structure
#[derive(Debug, Deserialize)]
struct SnapshotJson {
    periods: Vec<RawPeriod>,
    #[serde(default)]
    rooms: Vec<RawRoom>,
    #[serde(default)]
    exams: Vec<RawExam>,
    #[serde(default)]
    instructors: Vec<RawInstructor>,
    #[serde(default)]
    assignment: Vec<RawPlacement>,
}

/// A timetable together with one assignment of its exams.
#[derive(Debug, Clone)]
pub struct TimetableSnapshot {
    pub timetable: Timetable,
    pub assignment: Assignment,
}

/// Parse a snapshot JSON file
pub fn parse_snapshot_json(json_path: &Path) -> Result<TimetableSnapshot> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_snapshot_json_str(&json_content)
        .with_context(|| format!("Failed to parse snapshot: {}", json_path.display()))
}

/// Parse a snapshot from a JSON string
pub fn parse_snapshot_json_str(json_str: &str) -> Result<TimetableSnapshot> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: SnapshotJson = serde_path_to_error::deserialize(deserializer).map_err(|e| {
        anyhow::anyhow!("JSON deserialization error at '{}': {}", e.path(), e.inner())
    })?;

    convert_raw_to_domain(raw)
}

/// Convert raw JSON structure to domain model
fn convert_raw_to_domain(raw: SnapshotJson) -> Result<TimetableSnapshot> {
    let mut periods: Vec<Period> = raw
        .periods
        .into_iter()
        .map(|p| Period::new(p.index, p.day, p.day_str, p.time_str))
        .collect();
    periods.sort_by_key(|p| p.index);

    let rooms: Vec<Room> = raw
        .rooms
        .into_iter()
        .map(|r| Room {
            id: RoomId(r.id),
            name: r.name,
            x: r.x,
            y: r.y,
            ignore_too_far: r.ignore_too_far,
        })
        .collect();

    let exams: Vec<Exam> = raw
        .exams
        .into_iter()
        .map(|e| Exam {
            id: ExamId(e.id),
            name: e.name,
            owners: e
                .owners
                .into_iter()
                .map(|o| Owner {
                    id: OwnerId(o.id),
                    name: o.name,
                    instructors: o.instructors.into_iter().map(InstructorId).collect(),
                })
                .collect(),
        })
        .collect();

    let instructors: Vec<Instructor> = raw
        .instructors
        .into_iter()
        .map(|i| Instructor {
            id: InstructorId(i.id),
            name: i.name,
            exams: i.exams.into_iter().map(ExamId).collect(),
        })
        .collect();

    let timetable = Timetable::new(periods, rooms, exams, instructors)
        .context("Invalid timetable topology")?;

    let mut assignment = Assignment::new();
    for (idx, p) in raw.assignment.into_iter().enumerate() {
        let exam = ExamId(p.exam);
        if timetable.exam(exam).is_none() {
            return Err(ReportError::UnknownExam(exam))
                .with_context(|| format!("Error in assignment at index {}", idx));
        }
        if timetable.period(p.period).is_none() {
            return Err(ReportError::UnknownPeriod(p.period))
                .with_context(|| format!("Error in assignment at index {}", idx));
        }
        let rooms = p
            .rooms
            .into_iter()
            .map(|id| {
                timetable
                    .room(RoomId(id))
                    .map(RoomPlacement::from)
                    .ok_or_else(|| ReportError::NotFound(format!("room {}", id)))
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Error in assignment at index {}", idx))?;

        if assignment.assign(exam, Placement::new(p.period, rooms)).is_some() {
            anyhow::bail!("Exam {} is assigned more than once", exam);
        }
    }

    debug!(
        "parsed snapshot: {} periods, {} exams, {} instructors, {} placements",
        timetable.periods().len(),
        timetable.exams().len(),
        timetable.instructors().len(),
        assignment.len()
    );

    Ok(TimetableSnapshot {
        timetable,
        assignment,
    })
}
