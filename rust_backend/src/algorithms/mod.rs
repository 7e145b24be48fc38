//! Conflict detection algorithms.
//!
//! # Components
//!
//! - [`conflicts`]: per-instructor, per-period conflict classification
//! - [`rows`]: expansion of conflicts into aligned multi-line report rows

pub mod conflicts;
pub mod rows;

#[cfg(test)]
pub(crate) mod fixtures;

pub use conflicts::{ConflictClassifier, ConflictKind, ConflictOccurrence, ConflictSettings};
pub use rows::{format_distance, ConflictRow, ConflictRowBuilder, ReportLine, REPORT_HEADER};
