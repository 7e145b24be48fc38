//! Instructor conflicts report.
//!
//! Drives the classifier and the row builder over every instructor and
//! collects one table row per conflict. Row order is the traversal order:
//! instructor-major, period-minor, and direct, back-to-back, more-2-day
//! within a period. Nothing is sorted or deduplicated afterwards.

use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithms::conflicts::{ConflictClassifier, ConflictSettings};
use crate::algorithms::rows::{ConflictRow, ConflictRowBuilder, REPORT_HEADER};
use crate::core::domain::Instructor;
use crate::core::error::ReportResult;
use crate::core::timetable::{Assignment, InstructorIndex, Timetable};
use crate::distance::{DistanceMetric, DistanceResolver};

use super::summary::ReportSummary;

/// Header plus text rows, ready for a writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn from_rows(rows: &[ConflictRow]) -> Self {
        Self {
            header: REPORT_HEADER.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(|row| row.cells().to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Assembles the instructor conflicts report for one assignment.
#[derive(Debug, Clone, Copy)]
pub struct ReportAssembler<'a> {
    timetable: &'a Timetable,
    classifier: ConflictClassifier<'a>,
    builder: ConflictRowBuilder<'a>,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(
        timetable: &'a Timetable,
        assignment: &'a Assignment,
        index: &'a InstructorIndex,
        metric: &'a dyn DistanceMetric,
        settings: ConflictSettings,
    ) -> Self {
        Self {
            timetable,
            classifier: ConflictClassifier::new(
                timetable,
                assignment,
                index,
                DistanceResolver::new(metric),
                settings,
            ),
            builder: ConflictRowBuilder::new(timetable, assignment),
        }
    }

    /// All conflict rows, one instructor after another.
    pub fn rows(&self) -> ReportResult<Vec<ConflictRow>> {
        let mut rows = Vec::new();
        for instructor in self.timetable.instructors() {
            rows.extend(self.instructor_rows(instructor)?);
        }
        self.log_summary(&rows);
        Ok(rows)
    }

    /// Same rows as [`ReportAssembler::rows`], instructors fanned out over
    /// the rayon pool and concatenated back in instructor order.
    #[cfg(feature = "parallel")]
    pub fn rows_parallel(&self) -> ReportResult<Vec<ConflictRow>> {
        use rayon::prelude::*;

        let per_instructor = self
            .timetable
            .instructors()
            .par_iter()
            .map(|instructor| self.instructor_rows(instructor))
            .collect::<ReportResult<Vec<Vec<ConflictRow>>>>()?;
        let rows: Vec<ConflictRow> = per_instructor.into_iter().flatten().collect();
        self.log_summary(&rows);
        Ok(rows)
    }

    /// Rows of a single instructor.
    pub fn instructor_rows(&self, instructor: &Instructor) -> ReportResult<Vec<ConflictRow>> {
        self.classifier
            .classify_instructor(instructor)?
            .iter()
            .map(|occurrence| self.builder.build(instructor, occurrence))
            .collect()
    }

    /// The report as a text table.
    pub fn report(&self) -> ReportResult<ReportTable> {
        Ok(ReportTable::from_rows(&self.rows()?))
    }

    #[cfg(feature = "parallel")]
    pub fn report_parallel(&self) -> ReportResult<ReportTable> {
        Ok(ReportTable::from_rows(&self.rows_parallel()?))
    }

    fn log_summary(&self, rows: &[ConflictRow]) {
        let summary = ReportSummary::from_rows(rows);
        info!(
            "instructor conflicts: {} direct, {} back-to-back, {} more-2-day across {} instructor(s)",
            summary.direct, summary.back_to_back, summary.more_two_a_day, summary.instructors
        );
    }
}

/// Build the index for `assignment` and produce the report table.
///
/// `parallel` is honoured only when the `parallel` feature is enabled.
pub fn instructor_conflicts_report(
    timetable: &Timetable,
    assignment: &Assignment,
    metric: &dyn DistanceMetric,
    settings: ConflictSettings,
    parallel: bool,
) -> ReportResult<ReportTable> {
    let index = InstructorIndex::build(timetable, assignment)?;
    let assembler = ReportAssembler::new(timetable, assignment, &index, metric, settings);

    #[cfg(feature = "parallel")]
    {
        if parallel {
            return assembler.report_parallel();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    assembler.report()
}
