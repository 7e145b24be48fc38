//! Snapshot loading and report writing.
//!
//! # Example
//!
//! ```no_run
//! use examtt_reports::io::loaders::SnapshotLoader;
//! use std::path::Path;
//!
//! let loaded = SnapshotLoader::load_from_file(Path::new("snapshot.json"))
//!     .expect("Failed to load");
//! println!("Loaded {} placements", loaded.num_placements);
//! ```

pub mod loaders;
pub mod writers;


pub use loaders::{SnapshotLoadResult, SnapshotLoader};
pub use writers::{save_report, to_csv_string, to_json_string, write_csv, OutputFormat};
