//! Append-only mission history backed by a single local JSON file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use intercept_engine::MissionOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HISTORY_VERSION: u32 = 1;

/// One stored mission run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub id: u64,
    pub name: String,
    pub data: MissionOutcome,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to access mission history: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode mission history: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported mission history version {found} (expected {HISTORY_VERSION})")]
    UnsupportedVersion { found: u32 },
}

#[derive(Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    next_id: u64,
    records: Vec<MissionRecord>,
}

/// Ordered mission records keyed by an auto-incrementing id.
///
/// Records are never edited in place and ids are never reused, even after `clear`.
/// Ids saturate at `u64::MAX`; a file already holding that id keeps appending under it.
#[derive(Debug, Clone)]
pub struct MissionLog {
    next_id: u64,
    records: Vec<MissionRecord>,
}

impl Default for MissionLog {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl MissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a history file; a missing file yields an empty log.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no mission history at {}, starting empty", path.display());
            return Ok(Self::default());
        }
        let file: HistoryFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        if file.version != HISTORY_VERSION {
            return Err(HistoryError::UnsupportedVersion {
                found: file.version,
            });
        }
        let floor = file
            .records
            .iter()
            .map(|r| r.id.saturating_add(1))
            .max()
            .unwrap_or(1);
        Ok(Self {
            next_id: file.next_id.max(floor),
            records: file.records,
        })
    }

    /// Write the log as pretty JSON, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HistoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = HistoryFile {
            version: HISTORY_VERSION,
            next_id: self.next_id,
            records: self.records.clone(),
        };
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;
        log::debug!(
            "saved {} mission records to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    /// Append an outcome unmodified and return its id.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        data: MissionOutcome,
        timestamp: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.records.push(MissionRecord {
            id,
            name: name.into(),
            data,
            timestamp,
        });
        id
    }

    /// Append under the default `Mission #N` name.
    pub fn record(&mut self, data: MissionOutcome, timestamp: DateTime<Utc>) -> &MissionRecord {
        let name = self.next_mission_name();
        self.append(name, data, timestamp);
        &self.records[self.records.len() - 1]
    }

    pub fn next_mission_name(&self) -> String {
        format!("Mission #{}", self.records.len() + 1)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[MissionRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&MissionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
