//! Core domain models for examination timetables.
//!
//! This module defines the read-only entities a report is computed from, the
//! timetable topology with its per-instructor lookups, and the error type.

pub mod domain;
pub mod error;
pub mod macros;
pub mod timetable;

pub use domain::{
    Exam, ExamId, Instructor, InstructorId, Owner, OwnerId, Period, Placement, Room, RoomId,
    RoomPlacement,
};
pub use error::{ReportError, ReportResult};
pub use timetable::{Assignment, InstructorIndex, Timetable};
