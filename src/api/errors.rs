use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::errors::StampError;

/// Why a profile has no snapshot to hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoBackupReason {
    /// `{root}/{profile}/data` is absent.
    ProfileMissing,
    /// `{root}/{profile}/data` exists but contains no entries.
    Empty,
}

impl fmt::Display for NoBackupReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoBackupReason::ProfileMissing => f.write_str("backup profile does not exist"),
            NoBackupReason::Empty => f.write_str("no backups exist for this profile"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LocatorError {
    /// Recoverable: the caller may create a first backup and retry.
    #[error("{reason}: {profile}")]
    NoBackup {
        profile: String,
        reason: NoBackupReason,
    },
    /// A snapshot directory name is not a timestamp. Treated as corruption, never skipped.
    #[error("invalid snapshot directory {name:?} in {}", dir.display())]
    InvalidSnapshotName {
        dir: PathBuf,
        name: String,
        #[source]
        source: StampError,
    },
    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocatorError {
    pub(crate) fn no_backup(profile: &str, reason: NoBackupReason) -> Self {
        LocatorError::NoBackup {
            profile: profile.to_string(),
            reason,
        }
    }

    #[must_use]
    pub fn is_no_backup(&self) -> bool {
        matches!(self, LocatorError::NoBackup { .. })
    }

    #[must_use]
    pub const fn id(&self) -> ErrorId {
        match self {
            LocatorError::NoBackup { .. } => ErrorId::E_NO_BACKUP,
            LocatorError::InvalidSnapshotName { .. } => ErrorId::E_SNAPSHOT_NAME,
            LocatorError::Io { .. } => ErrorId::E_IO,
        }
    }
}

// Stable identifiers emitted in facts and used by hosts to pick exit codes.
// SCREAMING_SNAKE_CASE matches the emitted strings.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_NO_BACKUP,
    E_SNAPSHOT_NAME,
    E_IO,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_NO_BACKUP => "E_NO_BACKUP",
        ErrorId::E_SNAPSHOT_NAME => "E_SNAPSHOT_NAME",
        ErrorId::E_IO => "E_IO",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_NO_BACKUP => 60,
        ErrorId::E_SNAPSHOT_NAME => 65,
        ErrorId::E_IO => 74,
    }
}

#[must_use]
pub fn exit_code_for_id_str(s: &str) -> Option<i32> {
    match s {
        "E_NO_BACKUP" => Some(exit_code_for(ErrorId::E_NO_BACKUP)),
        "E_SNAPSHOT_NAME" => Some(exit_code_for(ErrorId::E_SNAPSHOT_NAME)),
        "E_IO" => Some(exit_code_for(ErrorId::E_IO)),
        _ => None,
    }
}
