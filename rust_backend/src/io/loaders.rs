use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

use crate::core::timetable::InstructorIndex;
use crate::parsing::snapshot_json::{self, TimetableSnapshot};

/// A parsed snapshot with its instructor index built.
#[derive(Debug, Clone)]
pub struct SnapshotLoadResult {
    pub snapshot: TimetableSnapshot,
    pub index: InstructorIndex,
    pub num_placements: usize,
}

impl SnapshotLoadResult {
    pub fn new(snapshot: TimetableSnapshot) -> Result<Self> {
        let index = InstructorIndex::build(&snapshot.timetable, &snapshot.assignment)
            .context("Failed to index instructor exams")?;
        if snapshot.assignment.is_empty() {
            warn!("snapshot places no exams; the report will be empty");
        }
        let num_placements = snapshot.assignment.len();
        Ok(Self {
            snapshot,
            index,
            num_placements,
        })
    }
}

/// Unified interface for loading timetable snapshots
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot from a file (only JSON is supported)
    pub fn load_from_file(path: &Path) -> Result<SnapshotLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<SnapshotLoadResult> {
        let snapshot =
            snapshot_json::parse_snapshot_json(json_path).context("Failed to parse JSON file")?;
        SnapshotLoadResult::new(snapshot)
    }

    /// Load a snapshot from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<SnapshotLoadResult> {
        let snapshot = snapshot_json::parse_snapshot_json_str(json_str)
            .context("Failed to parse JSON string")?;
        SnapshotLoadResult::new(snapshot)
    }
}
