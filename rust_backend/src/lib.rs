//! Instructor conflict reports for examination timetables.
//!
//! Given a timetable and an assignment of its exams to periods and rooms,
//! the crate lists, per instructor, direct conflicts, back-to-back exams
//! (optionally with the travel distance between rooms) and days with more
//! than two exams.
//!
//! # Example
//!
//! ```no_run
//! use examtt_reports::config::ReportConfig;
//! use examtt_reports::distance::GeoDistanceMetric;
//! use examtt_reports::io::{loaders::SnapshotLoader, writers::to_csv_string};
//! use examtt_reports::services::ReportAssembler;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ReportConfig::default();
//! let loaded = SnapshotLoader::load_from_file(Path::new("snapshot.json"))?;
//! let metric = GeoDistanceMetric::new(config.distance.clone());
//! let assembler = ReportAssembler::new(
//!     &loaded.snapshot.timetable,
//!     &loaded.snapshot.assignment,
//!     &loaded.index,
//!     &metric,
//!     config.conflicts,
//! );
//! print!("{}", to_csv_string(&assembler.report()?));
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod distance;
pub mod io;
pub mod parsing;
pub mod services;

pub use crate::core::error::{ReportError, ReportResult};
