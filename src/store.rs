//! Record storage behind a narrow port.
//!
//! The store holds an append-only ordered list of intake records. The
//! file-backed implementation reads and rewrites the whole list on every
//! append, with no locking: two writers appending concurrently can lose a
//! record (last write wins). The port keeps that hazard confined here so a
//! compare-and-swap scheme can replace it later without touching validation.

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{IntakeError, Result};
use crate::types::IntakeRecord;

/// File name of the local record list.
pub const STORE_FILE: &str = "dam_tickets.json";

/// Narrow storage port: whole-list read, single-record append.
pub trait TicketStore {
    /// Read the full record list. A store that was never written to is an
    /// empty list, not an error.
    fn load(&self) -> Result<Vec<IntakeRecord>>;

    /// Append one record to the stored list.
    fn append(&self, record: &IntakeRecord) -> Result<()>;
}

/// JSON-file-backed store: one file holding the serialized record list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// The platform-conventional location for the record list.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "intake").ok_or(IntakeError::DataDir)?;
        Ok(dirs.data_dir().join(STORE_FILE))
    }

    /// Open the store at its default location.
    pub fn open_default() -> Result<Self> {
        Ok(JsonFileStore::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, records: &[IntakeRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TicketStore for JsonFileStore {
    fn load(&self) -> Result<Vec<IntakeRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn append(&self, record: &IntakeRecord) -> Result<()> {
        // Read-modify-write over the whole list. Not atomic across
        // processes; a concurrent append can be lost.
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)?;
        debug!(
            ticket = %record.ticket_id,
            count = records.len(),
            "appended intake record"
        );
        Ok(())
    }
}
