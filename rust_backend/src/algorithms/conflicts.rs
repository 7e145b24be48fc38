//! Instructor conflict classification.
//!
//! For every instructor and every period, in that order, three independent
//! checks run:
//!
//! - **direct**: more than one exam in the period
//! - **back-to-back**: exams in the period and in its successor, one
//!   occurrence per (first, second) exam pair
//! - **more-2-day**: more than two exams on the day, checked only at the
//!   period closing the day so each day is reported once

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::domain::{ExamId, Instructor, InstructorId, Period, Placement};
use crate::core::error::{ReportError, ReportResult};
use crate::core::timetable::{Assignment, InstructorIndex, Timetable};
use crate::distance::DistanceResolver;

/// The three kinds of instructor conflicts, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "back-to-back")]
    BackToBack,
    #[serde(rename = "more-2-day")]
    MoreTwoADay,
}

impl ConflictKind {
    /// Literal written in the `Type` column.
    pub fn tag(&self) -> &'static str {
        match self {
            ConflictKind::Direct => "direct",
            ConflictKind::BackToBack => "back-to-back",
            ConflictKind::MoreTwoADay => "more-2-day",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classifier settings, read from the `[conflicts]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConflictSettings {
    /// Count a back-to-back pair whose second period starts the next day.
    #[serde(default)]
    pub day_break_back_to_back: bool,
    /// Back-to-back distance threshold in meters; negative disables distances.
    #[serde(default = "default_back_to_back_distance")]
    pub back_to_back_distance: f64,
}

fn default_back_to_back_distance() -> f64 {
    -1.0
}

impl Default for ConflictSettings {
    fn default() -> Self {
        Self {
            day_break_back_to_back: false,
            back_to_back_distance: default_back_to_back_distance(),
        }
    }
}

/// One detected conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictOccurrence {
    /// Several exams of one instructor in the same period.
    Direct {
        instructor: InstructorId,
        period: usize,
        exams: Vec<ExamId>,
    },
    /// An exam in `period` followed by an exam in the next period.
    BackToBack {
        instructor: InstructorId,
        period: usize,
        next_period: usize,
        first: ExamId,
        second: ExamId,
        /// Positive travel distance, when distances are enabled.
        distance_meters: Option<f64>,
        distance_minutes: Option<u32>,
    },
    /// More than two exams on one day; `period` closes that day.
    MoreTwoADay {
        instructor: InstructorId,
        day: usize,
        period: usize,
        exams: Vec<ExamId>,
    },
}

impl ConflictOccurrence {
    pub fn kind(&self) -> ConflictKind {
        match self {
            ConflictOccurrence::Direct { .. } => ConflictKind::Direct,
            ConflictOccurrence::BackToBack { .. } => ConflictKind::BackToBack,
            ConflictOccurrence::MoreTwoADay { .. } => ConflictKind::MoreTwoADay,
        }
    }

    pub fn instructor(&self) -> InstructorId {
        match self {
            ConflictOccurrence::Direct { instructor, .. }
            | ConflictOccurrence::BackToBack { instructor, .. }
            | ConflictOccurrence::MoreTwoADay { instructor, .. } => *instructor,
        }
    }
}

/// Walks an assignment snapshot and yields conflict occurrences.
#[derive(Debug, Clone, Copy)]
pub struct ConflictClassifier<'a> {
    timetable: &'a Timetable,
    assignment: &'a Assignment,
    index: &'a InstructorIndex,
    resolver: DistanceResolver<'a>,
    settings: ConflictSettings,
}

impl<'a> ConflictClassifier<'a> {
    pub fn new(
        timetable: &'a Timetable,
        assignment: &'a Assignment,
        index: &'a InstructorIndex,
        resolver: DistanceResolver<'a>,
        settings: ConflictSettings,
    ) -> Self {
        Self {
            timetable,
            assignment,
            index,
            resolver,
            settings,
        }
    }

    /// Conflicts of every instructor, instructor-major and period-minor.
    pub fn classify(&self) -> ReportResult<Vec<ConflictOccurrence>> {
        let mut occurrences = Vec::new();
        for instructor in self.timetable.instructors() {
            occurrences.extend(self.classify_instructor(instructor)?);
        }
        Ok(occurrences)
    }

    /// Conflicts of one instructor, period by period, each period yielding
    /// direct, then back-to-back, then more-2-day occurrences.
    pub fn classify_instructor(&self, instructor: &Instructor) -> ReportResult<Vec<ConflictOccurrence>> {
        let mut occurrences = Vec::new();
        for period in self.timetable.periods() {
            self.classify_period(instructor, period, &mut occurrences)?;
        }
        debug!(
            "instructor {} ({}): {} conflict(s)",
            instructor.name,
            instructor.id,
            occurrences.len()
        );
        Ok(occurrences)
    }

    fn classify_period(
        &self,
        instructor: &Instructor,
        period: &Period,
        out: &mut Vec<ConflictOccurrence>,
    ) -> ReportResult<()> {
        let exams = self.index.exams_at(instructor.id, period.index);

        if exams.len() > 1 {
            out.push(ConflictOccurrence::Direct {
                instructor: instructor.id,
                period: period.index,
                exams: exams.to_vec(),
            });
        }

        if !exams.is_empty() {
            if let Some(next) = self.back_to_back_successor(instructor, period) {
                for &first in exams {
                    for &second in self.index.exams_at(instructor.id, next.index) {
                        out.push(self.back_to_back(instructor.id, period, next, first, second)?);
                    }
                }
            }
        }

        if self.timetable.is_last_of_day(period) {
            let day_exams = self.index.exams_on_day(instructor.id, period.day);
            if day_exams.len() > 2 {
                out.push(ConflictOccurrence::MoreTwoADay {
                    instructor: instructor.id,
                    day: period.day,
                    period: period.index,
                    exams: day_exams,
                });
            }
        }

        Ok(())
    }

    /// The successor of `period` if it holds exams of `instructor` and the
    /// pair may count as back-to-back.
    fn back_to_back_successor(&self, instructor: &Instructor, period: &Period) -> Option<&'a Period> {
        let next = self.timetable.next_period(period)?;
        if self.index.exams_at(instructor.id, next.index).is_empty() {
            return None;
        }
        if next.day != period.day && !self.settings.day_break_back_to_back {
            return None;
        }
        Some(next)
    }

    fn back_to_back(
        &self,
        instructor: InstructorId,
        period: &Period,
        next: &Period,
        first: ExamId,
        second: ExamId,
    ) -> ReportResult<ConflictOccurrence> {
        let (mut distance_meters, mut distance_minutes) = (None, None);
        if self.settings.back_to_back_distance >= 0.0 {
            let a = self.placement(instructor, first)?;
            let b = self.placement(instructor, second)?;
            let meters = self.resolver.placement_distance_in_meters(a, b);
            if meters > 0.0 {
                distance_meters = Some(meters);
                distance_minutes = Some(self.resolver.placement_distance_in_minutes(a, b));
            }
        }
        Ok(ConflictOccurrence::BackToBack {
            instructor,
            period: period.index,
            next_period: next.index,
            first,
            second,
            distance_meters,
            distance_minutes,
        })
    }

    fn placement(&self, instructor: InstructorId, exam: ExamId) -> ReportResult<&'a Placement> {
        self.assignment
            .placement(exam)
            .ok_or(ReportError::MissingPlacement { exam, instructor })
    }
}
