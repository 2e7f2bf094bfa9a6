//! Single-slot JSON file persistence for the portfolio profile.
//!
//! One fixed key, one file. `load` is lenient: a missing or corrupt file is
//! a cache miss, logged and reported as `None`, never an error. `save`
//! overwrites the whole slot with pretty-printed JSON; last write wins, no
//! locking, no versioning.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::portfolio::models::{CachedProfile, Profile};

/// File name of the single profile slot, fixed across deployments.
const STORE_FILE: &str = "portfolioData.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write profile store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence sink for the profile. Reads parse into the lenient
/// [`CachedProfile`]; writes serialize the full [`Profile`].
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE),
        }
    }

    /// Path of the backing file, for logging.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached profile. A missing file means a fresh deployment;
    /// unreadable or unparseable content is logged and treated the same way.
    pub fn load(&self) -> Option<CachedProfile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No cached profile at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!(
                    "Failed to read cached profile at {}: {e}",
                    self.path.display()
                );
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!(
                    "Cached profile at {} is not valid JSON, treating as empty: {e}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Overwrites the slot with the full profile. Creates the data directory
    /// on first write.
    pub fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
