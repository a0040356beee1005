#![forbid(unsafe_code)]
//! datadb: locate timestamped backup snapshots on local disk.
//!
//! Layout model:
//! - Every backup profile lives at `{root}/{profile}`.
//! - Snapshots live at `{root}/{profile}/data/{YYYY-MM-DDTHH:MM:SS.ffffff}/data`.
//! - Snapshot directory names are parsed strictly; an unparseable name is a hard error, never skipped.
//! - Every operation here is read-only. Producing snapshots belongs to the backup job.

pub mod api;
pub mod config;
pub mod constants;
pub mod fs;
pub mod logging;
pub mod types;

pub use api::*;
