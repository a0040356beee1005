// Facade for the API module; query logic lives in `resolve`.

use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;
use crate::logging::{AuditSink, FactsEmitter, NullSink};
use crate::types::SnapshotStamp;

pub mod errors;
mod builder;
mod resolve;

pub use builder::LocatorBuilder;
pub use errors::{LocatorError, NoBackupReason};

/// Read-only view over the backup tree below `config.root`.
///
/// Holds no state between calls, so one locator can be shared across threads whenever its sinks
/// allow it.
pub struct BackupLocator<E: FactsEmitter = NullSink, A: AuditSink = NullSink> {
    facts: E,
    audit: A,
    config: LocatorConfig,
    redact_facts: bool,
}

impl BackupLocator<NullSink, NullSink> {
    /// Locator that emits nothing.
    #[must_use]
    pub fn with_config(config: LocatorConfig) -> Self {
        Self::new(NullSink, NullSink, config)
    }
}

impl<E: FactsEmitter, A: AuditSink> BackupLocator<E, A> {
    pub fn new(facts: E, audit: A, config: LocatorConfig) -> Self {
        Self {
            facts,
            audit,
            config,
            redact_facts: false,
        }
    }

    /// Zero timestamps and drop timings in emitted facts.
    #[must_use]
    pub fn with_redacted_facts(mut self) -> Self {
        self.redact_facts = true;
        self
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn tmp_dir(&self) -> &Path {
        &self.config.tmp
    }

    /// `{root}/{profile}`. Pure path composition, no filesystem access.
    pub fn backup_dir(&self, profile: &str) -> PathBuf {
        crate::fs::profile_dir(&self.config.root, profile)
    }

    /// `{root}/{profile}/data/{stamp}/data`. Pure path composition.
    pub fn snapshot_data_dir(&self, profile: &str, stamp: &SnapshotStamp) -> PathBuf {
        crate::fs::snapshot_data_dir(&self.config.root, profile, stamp)
    }

    /// Path to the data directory of the newest snapshot of `profile`.
    ///
    /// The returned inner `data` directory is not checked for existence.
    ///
    /// # Errors
    ///
    /// - `LocatorError::NoBackup` when the profile has no `data` directory or it is empty.
    /// - `LocatorError::InvalidSnapshotName` when any entry is not a snapshot timestamp.
    /// - `LocatorError::Io` when the snapshot directory cannot be listed.
    pub fn latest_backup(&self, profile: &str) -> Result<PathBuf, LocatorError> {
        resolve::latest(self, profile)
    }

    /// Path to the data directory of the second newest snapshot, `None` if there is only one.
    ///
    /// # Errors
    ///
    /// Same conditions as `latest_backup`.
    pub fn previous_backup(&self, profile: &str) -> Result<Option<PathBuf>, LocatorError> {
        resolve::previous(self, profile)
    }

    /// Every snapshot of `profile`, oldest first.
    ///
    /// # Errors
    ///
    /// Same conditions as `latest_backup`.
    pub fn snapshots(&self, profile: &str) -> Result<Vec<SnapshotStamp>, LocatorError> {
        resolve::list(self, profile)
    }
}
