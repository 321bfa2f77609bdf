//! Versioned weapon-code snapshot files
//!
//! Records arrive as a JSON envelope (`weapon_codes.json`) produced by the
//! data pipeline. Loading validates the payload shape up front; the query
//! layer then assumes a well-formed record list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codes::{Source, WeaponCode};

/// Snapshot format version this library writes and expects
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// The on-disk snapshot envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub last_updated: String,
    pub total_count: usize,
    /// Pipeline that produced the file ("local-excel", "api", ...)
    pub data_source: String,
    pub weapon_codes: Vec<WeaponCode>,
}

/// Errors loading or parsing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid snapshot payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-source record counts for a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    pub total: usize,
    pub dao_zai: usize,
    pub weapon_master: usize,
}

impl Snapshot {
    /// Parse a snapshot from its JSON text
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Whether the file was written by the current format version.
    ///
    /// A mismatch is a warning condition, not an error; older snapshots
    /// still parse as long as the shape holds.
    pub fn is_current_version(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }

    /// The record list for one data provider
    pub fn by_source(&self, source: Source) -> Vec<&WeaponCode> {
        self.weapon_codes
            .iter()
            .filter(|code| code.source == source)
            .collect()
    }

    /// Count records overall and per provider
    pub fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats {
            total: self.weapon_codes.len(),
            ..SnapshotStats::default()
        };
        for code in &self.weapon_codes {
            match code.source {
                Source::DaoZai => stats.dao_zai += 1,
                Source::WeaponMaster => stats.weapon_master += 1,
            }
        }
        stats
    }
}
