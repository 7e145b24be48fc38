//! Error types for report generation.

use super::domain::{ExamId, InstructorId};

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type for report operations
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An exam listed for an instructor at a period has no placement in the
    /// assignment. The index and the assignment disagree, so the report is
    /// aborted instead of being produced partially.
    #[error("Missing placement: exam {exam} of instructor {instructor} is not assigned")]
    MissingPlacement {
        exam: ExamId,
        instructor: InstructorId,
    },

    #[error("Unknown exam: {0}")]
    UnknownExam(ExamId),

    #[error("Unknown period: {0}")]
    UnknownPeriod(usize),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
