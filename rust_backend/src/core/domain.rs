//! Domain models for examination timetables.
//!
//! This module provides the read-only entities a conflict report is computed
//! from: periods, rooms, exams with their owners (sections or courses), and
//! instructors. None of them is mutated while a report is generated.

use serde::{Deserialize, Serialize};

use crate::timetable_ids;

timetable_ids! {
    /// An exam to be placed.
    ExamId,
    /// A person responsible for one or more exams.
    InstructorId,
    RoomId,
    /// A section or course attached to an exam.
    OwnerId,
}

/// One discrete timetable slot.
///
/// Periods form a strict chronological order; `index` is the position of the
/// period in that order and `day` groups a contiguous run of periods.
///
/// # Examples
///
/// ```
/// use examtt_reports::core::domain::Period;
///
/// let period = Period::new(3, 1, "Tue 05/05", "8:00a - 10:00a");
/// assert_eq!(period.label(), "4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub index: usize,
    pub day: usize,
    pub day_str: String,
    pub time_str: String,
}

impl Period {
    pub fn new(index: usize, day: usize, day_str: impl Into<String>, time_str: impl Into<String>) -> Self {
        Self {
            index,
            day,
            day_str: day_str.into(),
            time_str: time_str.into(),
        }
    }

    /// 1-based period number as printed in reports.
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

/// A room with its geographic attributes.
///
/// `x` and `y` are either planar coordinates or latitude/longitude, depending
/// on the distance metric in use. `ignore_too_far` disables travel distance
/// for every pair involving this room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub ignore_too_far: bool,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x: None,
            y: None,
            ignore_too_far: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn ignoring_distance(mut self) -> Self {
        self.ignore_too_far = true;
        self
    }
}

/// A room as placed for one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlacement {
    pub id: RoomId,
    pub name: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub ignore_too_far: bool,
}

impl From<&Room> for RoomPlacement {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            x: room.x,
            y: room.y,
            ignore_too_far: room.ignore_too_far,
        }
    }
}

/// The committed (period, rooms) assignment of one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub period: usize,
    pub rooms: Vec<RoomPlacement>,
}

impl Placement {
    pub fn new(period: usize, rooms: Vec<RoomPlacement>) -> Self {
        Self { period, rooms }
    }

    /// Comma separated room names in placement order.
    pub fn room_names(&self) -> String {
        self.rooms
            .iter()
            .map(|room| room.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A section or course enrolled in an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    /// Instructors teaching this section; the owner is listed on their reports.
    #[serde(default)]
    pub instructors: Vec<InstructorId>,
}

impl Owner {
    pub fn new(id: impl Into<OwnerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instructors: Vec::new(),
        }
    }

    pub fn taught_by(mut self, instructor: impl Into<InstructorId>) -> Self {
        self.instructors.push(instructor.into());
        self
    }
}

/// An examination and the sections it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub name: String,
    #[serde(default)]
    pub owners: Vec<Owner>,
}

impl Exam {
    pub fn new(id: impl Into<ExamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owners: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owners.push(owner);
        self
    }

    /// Owners of this exam taught by `instructor`, in model order.
    pub fn owners_for(&self, instructor: InstructorId) -> impl Iterator<Item = &Owner> + '_ {
        self.owners
            .iter()
            .filter(move |owner| owner.instructors.contains(&instructor))
    }
}

/// An instructor and the exams they are associated with, in model order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    #[serde(default)]
    pub exams: Vec<ExamId>,
}

impl Instructor {
    pub fn new(id: impl Into<InstructorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exams: Vec::new(),
        }
    }

    pub fn with_exam(mut self, exam: impl Into<ExamId>) -> Self {
        self.exams.push(exam.into());
        self
    }
}
