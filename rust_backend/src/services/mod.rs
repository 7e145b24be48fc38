//! Report services built on the conflict algorithms.
//!
//! - [`instructor_conflicts`]: the report assembler and its text table
//! - [`summary`]: per-kind counts
//! - [`checksum`]: fingerprint of a rendered table

pub mod checksum;
pub mod instructor_conflicts;
pub mod summary;


pub use checksum::{calculate_checksum, report_checksum};
pub use instructor_conflicts::{instructor_conflicts_report, ReportAssembler, ReportTable};
pub use summary::ReportSummary;
