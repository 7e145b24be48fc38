//! Expansion of conflict occurrences into report rows.
//!
//! A row lists each implicated exam once per owner the instructor teaches,
//! or once under the exam's own name when there is no such owner. Every
//! [`ReportLine`] carries the full data of its exam so the columns stay
//! aligned; blanking of repeated values happens only in [`ConflictRow::cells`].

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::domain::{ExamId, Instructor, Period};
use crate::core::error::{ReportError, ReportResult};
use crate::core::timetable::{Assignment, Timetable};

use super::conflicts::{ConflictKind, ConflictOccurrence};

/// Column names of the instructor conflicts table.
pub const REPORT_HEADER: [&str; 8] = [
    "Instructor",
    "Type",
    "Section/Course",
    "Period",
    "Day",
    "Time",
    "Room",
    "Distance",
];

/// One line inside a multi-line report cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Owner name, or the exam name when the exam has no owner for the instructor.
    pub section: String,
    /// 0-based period index.
    pub period: usize,
    pub day: String,
    pub time: String,
    pub rooms: String,
    /// First line contributed by this exam.
    pub first_of_exam: bool,
}

/// One logical output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRow {
    pub instructor: String,
    pub kind: ConflictKind,
    pub lines: Vec<ReportLine>,
    pub distance_meters: Option<f64>,
    pub distance_minutes: Option<u32>,
}

impl ConflictRow {
    /// The eight text cells of this row, in [`REPORT_HEADER`] order.
    ///
    /// Room, period, day and time are printed on the first line of each exam;
    /// owner continuation lines leave them blank. A direct row prints the
    /// shared period only once, on its first line.
    pub fn cells(&self) -> [String; 8] {
        [
            self.instructor.clone(),
            self.kind.tag().to_string(),
            self.column(|_, line| line.section.clone()),
            self.column(|i, line| self.when_period_shown(i, line, (line.period + 1).to_string())),
            self.column(|i, line| self.when_period_shown(i, line, line.day.clone())),
            self.column(|i, line| self.when_period_shown(i, line, line.time.clone())),
            self.column(|_, line| {
                if line.first_of_exam {
                    line.rooms.clone()
                } else {
                    String::new()
                }
            }),
            self.distance_meters.map(format_distance).unwrap_or_default(),
        ]
    }

    fn column(&self, f: impl Fn(usize, &ReportLine) -> String) -> String {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| f(i, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn when_period_shown(&self, i: usize, line: &ReportLine, value: String) -> String {
        if line.first_of_exam && (self.kind != ConflictKind::Direct || i == 0) {
            value
        } else {
            String::new()
        }
    }
}

/// Plain decimal with at least one fractional digit, e.g. `120.0`.
pub fn format_distance(meters: f64) -> String {
    format!("{:?}", meters)
}

/// Builds [`ConflictRow`]s from occurrences.
#[derive(Debug, Clone, Copy)]
pub struct ConflictRowBuilder<'a> {
    timetable: &'a Timetable,
    assignment: &'a Assignment,
}

impl<'a> ConflictRowBuilder<'a> {
    pub fn new(timetable: &'a Timetable, assignment: &'a Assignment) -> Self {
        Self {
            timetable,
            assignment,
        }
    }

    /// Expand `occurrence` of `instructor` into exactly one row.
    pub fn build(&self, instructor: &Instructor, occurrence: &ConflictOccurrence) -> ReportResult<ConflictRow> {
        let mut lines = Vec::new();
        let (mut distance_meters, mut distance_minutes) = (None, None);

        match occurrence {
            ConflictOccurrence::Direct { period, exams, .. } => {
                let period = self.period(*period)?;
                for &exam in exams {
                    self.push_exam_lines(instructor, exam, Some(period), &mut lines)?;
                }
            }
            ConflictOccurrence::BackToBack {
                period,
                next_period,
                first,
                second,
                distance_meters: meters,
                distance_minutes: minutes,
                ..
            } => {
                let period = self.period(*period)?;
                let next = self.period(*next_period)?;
                self.push_exam_lines(instructor, *first, Some(period), &mut lines)?;
                self.push_exam_lines(instructor, *second, Some(next), &mut lines)?;
                distance_meters = *meters;
                distance_minutes = *minutes;
            }
            ConflictOccurrence::MoreTwoADay { exams, .. } => {
                for &exam in exams {
                    self.push_exam_lines(instructor, exam, None, &mut lines)?;
                }
            }
        }

        Ok(ConflictRow {
            instructor: instructor.name.clone(),
            kind: occurrence.kind(),
            lines,
            distance_meters,
            distance_minutes,
        })
    }

    /// Append the lines of one exam. `period` overrides the placement's own
    /// period when the occurrence already fixes it.
    fn push_exam_lines(
        &self,
        instructor: &Instructor,
        exam_id: ExamId,
        period: Option<&Period>,
        lines: &mut Vec<ReportLine>,
    ) -> ReportResult<()> {
        let exam = self
            .timetable
            .exam(exam_id)
            .ok_or(ReportError::UnknownExam(exam_id))?;
        let placement = self
            .assignment
            .placement(exam_id)
            .ok_or(ReportError::MissingPlacement {
                exam: exam_id,
                instructor: instructor.id,
            })?;
        let period = match period {
            Some(period) => period,
            None => self.period(placement.period)?,
        };

        if placement.rooms.is_empty() {
            warn!("exam {} ({}) is placed without rooms", exam.name, exam.id);
        }
        let rooms = placement.room_names();

        let mut sections: Vec<&str> = exam
            .owners_for(instructor.id)
            .map(|owner| owner.name.as_str())
            .collect();
        if sections.is_empty() {
            sections.push(exam.name.as_str());
        }

        for (k, section) in sections.into_iter().enumerate() {
            lines.push(ReportLine {
                section: section.to_string(),
                period: period.index,
                day: period.day_str.clone(),
                time: period.time_str.clone(),
                rooms: rooms.clone(),
                first_of_exam: k == 0,
            });
        }
        Ok(())
    }

    fn period(&self, index: usize) -> ReportResult<&'a Period> {
        self.timetable
            .period(index)
            .ok_or(ReportError::UnknownPeriod(index))
    }
}
