use serde::Serialize;
use uuid::Uuid;

use crate::position::Position;

/// Where one replaced occurrence sat in the text a pass read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Site {
    pub start: Position,
    /// Exclusive
    pub end: Position,
}

/// Outcome of one substitution pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub search: String,
    pub replace: String,
    /// Number of occurrences replaced
    pub occurrences: usize,
    /// Each replaced occurrence, left to right
    pub sites: Vec<Site>,
}

/// Outcome of patching one file
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// Identifies the run in log output
    pub run_id: Uuid,
    pub path: String,
    /// BLAKE3 of the content as read
    pub checksum_before: String,
    /// BLAKE3 of the content as written
    pub checksum_after: String,
    /// Whether the written content differs from what was read
    pub changed: bool,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub passes: Vec<PassReport>,
}

impl PatchReport {
    pub fn total_occurrences(&self) -> usize {
        self.passes.iter().map(|p| p.occurrences).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Generate a unique run id (UUID v4)
pub fn generate_run_id() -> Uuid {
    Uuid::new_v4()
}
