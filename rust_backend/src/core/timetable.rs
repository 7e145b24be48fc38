//! Timetable topology, assignment snapshot, and per-instructor lookups.
//!
//! A [`Timetable`] owns the ordered periods and the model entities. An
//! [`Assignment`] maps exams to their placements. An [`InstructorIndex`]
//! answers "which exams does this instructor have in this period / on this
//! day" for one assignment. All three are built once and then only read.

use std::collections::{HashMap, HashSet};

use super::domain::{Exam, ExamId, Instructor, InstructorId, Period, Placement, Room, RoomId};
use super::error::{ReportError, ReportResult};

/// Ordered periods plus the rooms, exams and instructors of one problem.
#[derive(Debug, Clone)]
pub struct Timetable {
    periods: Vec<Period>,
    rooms: Vec<Room>,
    exams: Vec<Exam>,
    instructors: Vec<Instructor>,
    room_index: HashMap<RoomId, usize>,
    exam_index: HashMap<ExamId, usize>,
}

impl Timetable {
    /// Build a timetable, checking that periods are listed chronologically.
    ///
    /// Every period's `index` must equal its position and days must never
    /// decrease along the sequence. Room, exam and instructor ids must be unique.
    pub fn new(
        periods: Vec<Period>,
        rooms: Vec<Room>,
        exams: Vec<Exam>,
        instructors: Vec<Instructor>,
    ) -> ReportResult<Self> {
        for (position, period) in periods.iter().enumerate() {
            if period.index != position {
                return Err(ReportError::ValidationError(format!(
                    "period at position {} has index {}",
                    position, period.index
                )));
            }
            if position > 0 && period.day < periods[position - 1].day {
                return Err(ReportError::ValidationError(format!(
                    "period {} is on day {} which precedes day {} of period {}",
                    period.index,
                    period.day,
                    periods[position - 1].day,
                    position - 1
                )));
            }
        }

        let mut room_index = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            if room_index.insert(room.id, i).is_some() {
                return Err(ReportError::ValidationError(format!(
                    "duplicate room id {}",
                    room.id
                )));
            }
        }

        let mut exam_index = HashMap::with_capacity(exams.len());
        for (i, exam) in exams.iter().enumerate() {
            if exam_index.insert(exam.id, i).is_some() {
                return Err(ReportError::ValidationError(format!(
                    "duplicate exam id {}",
                    exam.id
                )));
            }
        }

        let mut instructor_ids = HashSet::with_capacity(instructors.len());
        for instructor in &instructors {
            if !instructor_ids.insert(instructor.id) {
                return Err(ReportError::ValidationError(format!(
                    "duplicate instructor id {} ({})",
                    instructor.id, instructor.name
                )));
            }
        }

        Ok(Self {
            periods,
            rooms,
            exams,
            instructors,
            room_index,
            exam_index,
        })
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn period(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// The chronologically next period, or `None` for the last one.
    pub fn next_period(&self, period: &Period) -> Option<&Period> {
        self.periods.get(period.index + 1)
    }

    /// True when `period` closes its day: it is the last period overall or
    /// its successor starts another day.
    pub fn is_last_of_day(&self, period: &Period) -> bool {
        self.next_period(period)
            .map_or(true, |next| next.day != period.day)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.room_index.get(&id).map(|&i| &self.rooms[i])
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn exam(&self, id: ExamId) -> Option<&Exam> {
        self.exam_index.get(&id).map(|&i| &self.exams[i])
    }

    /// Instructors in model order.
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }
}

/// Read-only snapshot of exam placements.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    placements: HashMap<ExamId, Placement>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the placement of `exam`, returning the previous one if any.
    pub fn assign(&mut self, exam: ExamId, placement: Placement) -> Option<Placement> {
        self.placements.insert(exam, placement)
    }

    pub fn placement(&self, exam: ExamId) -> Option<&Placement> {
        self.placements.get(&exam)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Per-instructor, per-period exam lists.
///
/// Lists keep insertion order; report output order follows it directly.
#[derive(Debug, Clone)]
pub struct InstructorIndex {
    period_days: Vec<usize>,
    slots: HashMap<InstructorId, Vec<Vec<ExamId>>>,
}

impl InstructorIndex {
    /// An empty index over the periods of `timetable`.
    pub fn new(timetable: &Timetable) -> Self {
        Self {
            period_days: timetable.periods().iter().map(|p| p.day).collect(),
            slots: HashMap::new(),
        }
    }

    /// Index every assigned exam of every instructor, in the instructor's
    /// exam order. Exams without a placement are left out.
    pub fn build(timetable: &Timetable, assignment: &Assignment) -> ReportResult<Self> {
        let mut index = Self::new(timetable);
        for instructor in timetable.instructors() {
            let mut seen = HashSet::new();
            for &exam in &instructor.exams {
                if timetable.exam(exam).is_none() {
                    return Err(ReportError::UnknownExam(exam));
                }
                if !seen.insert(exam) {
                    continue;
                }
                if let Some(placement) = assignment.placement(exam) {
                    index.insert(instructor.id, placement.period, exam)?;
                }
            }
        }
        Ok(index)
    }

    /// Append `exam` to the list of `instructor` at `period`.
    pub fn insert(&mut self, instructor: InstructorId, period: usize, exam: ExamId) -> ReportResult<()> {
        if period >= self.period_days.len() {
            return Err(ReportError::UnknownPeriod(period));
        }
        let period_count = self.period_days.len();
        let slots = self
            .slots
            .entry(instructor)
            .or_insert_with(|| vec![Vec::new(); period_count]);
        slots[period].push(exam);
        Ok(())
    }

    /// Exams of `instructor` placed in `period`.
    pub fn exams_at(&self, instructor: InstructorId, period: usize) -> &[ExamId] {
        self.slots
            .get(&instructor)
            .and_then(|slots| slots.get(period))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exams of `instructor` on `day`, period by period.
    pub fn exams_on_day(&self, instructor: InstructorId, day: usize) -> Vec<ExamId> {
        let Some(slots) = self.slots.get(&instructor) else {
            return Vec::new();
        };
        self.period_days
            .iter()
            .zip(slots)
            .filter(|(&period_day, _)| period_day == day)
            .flat_map(|(_, exams)| exams.iter().copied())
            .collect()
    }
}
