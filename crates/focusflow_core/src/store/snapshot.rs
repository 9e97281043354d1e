//! Snapshot persistence collaborator.
//!
//! # Responsibility
//! - Define the opaque save/load contract the core delegates persistence to.
//! - Provide a JSON-file implementation with atomic writes.
//!
//! # Invariants
//! - A missing snapshot file loads as `Ok(None)`, never as an error.
//! - Saves are atomic: readers observe either the old or the new file,
//!   never a partial write.
//! - The core never fails because of a persistence error; callers decide
//!   whether to surface or ignore it.

use crate::model::profile::UserProfile;
use crate::model::task::Task;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Full persisted state: everything the core needs to resume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub profile: UserProfile,
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persistence failures for snapshot save/load.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    /// File exists but does not parse as a snapshot.
    Corrupt(String),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "corrupt snapshot data: {message}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Abstract persistence contract. The core calls `save` after mutations
/// and `load` before first read; implementations own format and location.
pub trait SnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()>;
    fn load(&self) -> SnapshotResult<Option<Snapshot>>;
}

/// JSON-file snapshot store.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        let parent = self.path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir)?;
        }

        // Write to a sibling temp file and rename over the target so a
        // crash mid-write cannot leave a truncated snapshot behind.
        let dir = parent.unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        let json =
            serde_json::to_string_pretty(snapshot).map_err(SnapshotError::Serialize)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&self.path).map_err(|err| SnapshotError::Io(err.error))?;

        info!(
            "event=snapshot_save module=snapshot status=ok task_count={}",
            snapshot.tasks.len()
        );
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<Snapshot>> {
        if !self.path.exists() {
            info!("event=snapshot_load module=snapshot status=ok outcome=absent");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Snapshot>(&contents) {
            Ok(snapshot) => {
                info!(
                    "event=snapshot_load module=snapshot status=ok outcome=loaded task_count={}",
                    snapshot.tasks.len()
                );
                Ok(Some(snapshot))
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=snapshot status=error error_code=snapshot_corrupt error={err}"
                );
                Err(SnapshotError::Corrupt(err.to_string()))
            }
        }
    }
}
