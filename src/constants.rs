//! Shared crate-wide constants for datadb.
//!
//! Centralizes default locations and layout labels used across modules.

/// Default backup root. Every profile is a directory directly below it.
pub const DEFAULT_BACKUP_ROOT: &str = "/data/data/datadb/backups/";

/// Default scratch root handed to surrounding tooling (restores, staging).
pub const DEFAULT_TMP_ROOT: &str = "/data/data/datadb/tmp/";

/// Name of the directory holding snapshots inside a profile, and of the payload directory inside
/// each snapshot.
pub const DATA_DIR: &str = "data";

/// Environment variable overriding the backup root (see `LocatorConfig::from_env`).
pub const ENV_BACKUP_ROOT: &str = "DATADB_ROOT";

/// Environment variable overriding the scratch root.
pub const ENV_TMP_ROOT: &str = "DATADB_TMP";

/// Subsystem label attached to every emitted fact.
pub const FACTS_SUBSYSTEM: &str = "datadb";

/// Schema version stamped into the envelope of every fact.
pub const FACTS_SCHEMA_VERSION: i64 = 1;
