use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

use super::errors::{StampError, StampResult};

/// Directory-name format for snapshots, used for both reading and writing names.
/// Every field is zero-padded, so the rendered form has a fixed width.
pub const SNAPSHOT_DIR_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]"
);

/// Years a snapshot name may carry: exactly four unsigned digits, no year zero.
pub const SNAPSHOT_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Point in time identifying one snapshot directory.
///
/// Ordering is chronological. Callers must compare stamps, never raw directory names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapshotStamp(PrimitiveDateTime);

impl SnapshotStamp {
    /// Parse a snapshot directory name.
    ///
    /// # Errors
    ///
    /// Returns `StampError::Parse` when the name does not match `SNAPSHOT_DIR_FORMAT`,
    /// `StampError::YearOutOfRange` for years outside `1..=9999` (signed or zero years), and
    /// `StampError::NotCanonical` when it parses but would not be rendered back identically.
    pub fn parse(name: &str) -> StampResult<Self> {
        let stamp = SnapshotStamp(PrimitiveDateTime::parse(name, SNAPSHOT_DIR_FORMAT)?);
        let year = stamp.0.year();
        if !SNAPSHOT_YEARS.contains(&year) {
            return Err(StampError::YearOutOfRange { year });
        }
        let canonical = stamp.dir_name();
        if canonical != name {
            return Err(StampError::NotCanonical { canonical });
        }
        Ok(stamp)
    }

    /// Parse a raw directory entry name as returned by `read_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StampError::NotUtf8` for names that are not valid UTF-8, otherwise as `parse`.
    pub fn parse_os(name: &OsStr) -> StampResult<Self> {
        name.to_str().ok_or(StampError::NotUtf8).and_then(Self::parse)
    }

    /// Truncates to microsecond precision so the value survives a trip through a directory name.
    #[must_use]
    pub fn from_datetime(dt: PrimitiveDateTime) -> Self {
        let micros = dt.microsecond();
        SnapshotStamp(dt.replace_nanosecond(micros * 1_000).unwrap_or(dt))
    }

    #[must_use]
    pub fn as_datetime(&self) -> PrimitiveDateTime {
        self.0
    }

    /// The directory name for this snapshot.
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SnapshotStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(SNAPSHOT_DIR_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for SnapshotStamp {
    type Err = StampError;

    fn from_str(s: &str) -> StampResult<Self> {
        Self::parse(s)
    }
}

impl From<PrimitiveDateTime> for SnapshotStamp {
    fn from(dt: PrimitiveDateTime) -> Self {
        Self::from_datetime(dt)
    }
}
