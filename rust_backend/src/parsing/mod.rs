//! Parsers for timetable snapshot formats.
//!
//! - [`snapshot_json`]: periods, rooms, exams, instructors and an assignment
//!   in one JSON document
//!
//! # Example
//!
//! ```no_run
//! use examtt_reports::parsing::snapshot_json::parse_snapshot_json;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot_json(Path::new("snapshot.json"))
//!     .expect("Failed to parse snapshot");
//! println!("{} exams placed", snapshot.assignment.len());
//! ```

pub mod snapshot_json;


pub use snapshot_json::{parse_snapshot_json, parse_snapshot_json_str, TimetableSnapshot};
