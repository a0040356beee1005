//! Path composition for the on-disk backup layout. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use crate::constants::DATA_DIR;
use crate::types::SnapshotStamp;

/// `{root}/{profile}`.
///
/// The profile name is used verbatim as a path segment. Names containing `..` or an absolute
/// path are not rejected; callers accepting untrusted names must vet them first.
#[must_use]
pub fn profile_dir(root: &Path, profile: &str) -> PathBuf {
    root.join(profile)
}

/// `{root}/{profile}/data`, the directory whose entries are snapshots.
#[must_use]
pub fn snapshots_dir(root: &Path, profile: &str) -> PathBuf {
    profile_dir(root, profile).join(DATA_DIR)
}

/// `{root}/{profile}/data/{stamp}/data`.
#[must_use]
pub fn snapshot_data_dir(root: &Path, profile: &str, stamp: &SnapshotStamp) -> PathBuf {
    snapshots_dir(root, profile)
        .join(stamp.dir_name())
        .join(DATA_DIR)
}
