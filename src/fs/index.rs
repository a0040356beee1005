use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::api::errors::{LocatorError, NoBackupReason};
use crate::types::SnapshotStamp;

use super::layout::snapshots_dir;

/// Names of the entries directly inside `dir`, in whatever order the OS returns them.
///
/// # Errors
///
/// Propagates any error from opening or iterating the directory.
pub fn list_entry_names(dir: &Path) -> std::io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}

/// Parse every name as a snapshot stamp. The first name that fails aborts the whole scan.
///
/// # Errors
///
/// Returns `LocatorError::InvalidSnapshotName` for the first unparseable name.
pub fn parse_entries(dir: &Path, names: &[OsString]) -> Result<Vec<SnapshotStamp>, LocatorError> {
    names
        .iter()
        .map(|name| {
            SnapshotStamp::parse_os(name).map_err(|source| LocatorError::InvalidSnapshotName {
                dir: dir.to_path_buf(),
                name: name.to_string_lossy().into_owned(),
                source,
            })
        })
        .collect()
}

/// Read the snapshot index of a profile: existence check, listing, strict parse.
/// Returns the snapshots directory and its stamps sorted oldest first.
///
/// # Errors
///
/// - `NoBackup(ProfileMissing)` when `{root}/{profile}/data` does not exist.
/// - `NoBackup(Empty)` when it has no entries.
/// - `InvalidSnapshotName` when any entry is not a snapshot stamp.
/// - `Io` when the existence check itself fails, or the directory exists but cannot be listed.
pub fn scan_snapshots(
    root: &Path,
    profile: &str,
) -> Result<(PathBuf, Vec<SnapshotStamp>), LocatorError> {
    let dir = snapshots_dir(root, profile);
    // Absent (including a dangling symlink) is a missing profile; failing to check is not.
    let present = dir.try_exists().map_err(|source| LocatorError::Io {
        path: dir.clone(),
        source,
    })?;
    if !present {
        return Err(LocatorError::no_backup(profile, NoBackupReason::ProfileMissing));
    }
    let names = list_entry_names(&dir).map_err(|source| LocatorError::Io {
        path: dir.clone(),
        source,
    })?;
    if names.is_empty() {
        return Err(LocatorError::no_backup(profile, NoBackupReason::Empty));
    }
    let mut stamps = parse_entries(&dir, &names)?;
    stamps.sort();
    Ok((dir, stamps))
}

#[must_use]
pub fn latest(stamps: &[SnapshotStamp]) -> Option<SnapshotStamp> {
    stamps.iter().max().copied()
}

/// Second newest stamp, if there are at least two distinct ones.
#[must_use]
pub fn previous(stamps: &[SnapshotStamp]) -> Option<SnapshotStamp> {
    let newest = latest(stamps)?;
    stamps.iter().filter(|s| **s < newest).max().copied()
}
