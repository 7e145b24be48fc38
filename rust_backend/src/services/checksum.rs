//! Checksum of a rendered report.

use sha2::{Digest, Sha256};

use crate::io::writers::to_csv_string;

use super::instructor_conflicts::ReportTable;

/// Lowercase hex SHA-256 of `content`.
///
/// Used to tell two renderings of a report apart without diffing them.
pub fn calculate_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Checksum of the CSV rendering of `table`; equal tables give equal checksums.
pub fn report_checksum(table: &ReportTable) -> String {
    calculate_checksum(&to_csv_string(table))
}
