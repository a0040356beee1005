//! Error types for snapshot-name handling.
use thiserror::Error;

/// Why a directory name could not be read as a snapshot timestamp.
#[derive(Debug, Error)]
pub enum StampError {
    #[error("name is not valid UTF-8")]
    NotUtf8,
    #[error("name does not match YYYY-MM-DDTHH:MM:SS.ffffff: {0}")]
    Parse(#[from] time::error::Parse),
    #[error("year {year} is outside 0001..=9999")]
    YearOutOfRange { year: i32 },
    /// Parsed, but formatting the value back does not reproduce the name byte-for-byte.
    #[error("name is not in canonical form (expected {canonical})")]
    NotCanonical { canonical: String },
}

/// Convenient alias for results returning a `StampError`.
pub type StampResult<T> = std::result::Result<T, StampError>;
