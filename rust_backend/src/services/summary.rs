//! Per-kind counts over a generated report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::algorithms::conflicts::ConflictKind;
use crate::algorithms::rows::ConflictRow;

/// Row counts of an instructor conflicts report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_rows: usize,
    pub direct: usize,
    pub back_to_back: usize,
    pub more_two_a_day: usize,
    /// Instructors with at least one row.
    pub instructors: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[ConflictRow]) -> Self {
        let mut summary = Self {
            total_rows: rows.len(),
            ..Self::default()
        };
        let mut instructors = HashSet::new();
        for row in rows {
            match row.kind {
                ConflictKind::Direct => summary.direct += 1,
                ConflictKind::BackToBack => summary.back_to_back += 1,
                ConflictKind::MoreTwoADay => summary.more_two_a_day += 1,
            }
            instructors.insert(row.instructor.as_str());
        }
        summary.instructors = instructors.len();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(instructor: &str, kind: ConflictKind) -> ConflictRow {
        ConflictRow {
            instructor: instructor.to_string(),
            kind,
            lines: vec![],
            distance_meters: None,
            distance_minutes: None,
        }
    }

    #[test]
    fn test_counts_by_kind() {
        let rows = vec![
            row("Smith", ConflictKind::Direct),
            row("Smith", ConflictKind::BackToBack),
            row("Jones", ConflictKind::BackToBack),
            row("Jones", ConflictKind::MoreTwoADay),
        ];
        let summary = ReportSummary::from_rows(&rows);
        assert_eq!(
            summary,
            ReportSummary {
                total_rows: 4,
                direct: 1,
                back_to_back: 2,
                more_two_a_day: 1,
                instructors: 2,
            }
        );
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(ReportSummary::from_rows(&[]), ReportSummary::default());
    }
}
