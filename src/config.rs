//! Locator configuration: where backups live and where scratch space is.
//!
//! The roots are fixed for the lifetime of a `BackupLocator`; build a new locator to point
//! somewhere else.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BACKUP_ROOT, DEFAULT_TMP_ROOT, ENV_BACKUP_ROOT, ENV_TMP_ROOT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Directory containing one subdirectory per backup profile.
    pub root: PathBuf,
    /// Scratch directory for tooling built around the locator.
    pub tmp: PathBuf,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_BACKUP_ROOT),
            tmp: PathBuf::from(DEFAULT_TMP_ROOT),
        }
    }
}

impl LocatorConfig {
    /// Config rooted at `root`, keeping the default scratch directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tmp(mut self, tmp: impl Into<PathBuf>) -> Self {
        self.tmp = tmp.into();
        self
    }

    /// Defaults, overridden by `DATADB_ROOT` / `DATADB_TMP` when set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = std::env::var_os(ENV_BACKUP_ROOT).filter(|v| !v.is_empty()) {
            cfg.root = PathBuf::from(v);
        }
        if let Some(v) = std::env::var_os(ENV_TMP_ROOT).filter(|v| !v.is_empty()) {
            cfg.tmp = PathBuf::from(v);
        }
        cfg
    }
}
