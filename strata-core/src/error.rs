//! The small set of non-recoverable error conditions the generator can hit.
//!
//! Everything else — an out-of-range coordinate, a biome the caller didn't
//! expect — is a normal return value, not an error: the generator always
//! produces *some* deterministic answer for a valid seed and version.

use crate::version::McVersion;

/// Failure modes for generator construction and sampling.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("horizontal scale {0} is not one of {{1, 4, 16, 64, 256}}")]
    InvalidScale(i32),

    #[error("version {0:?} has no data tables compiled in")]
    UnsupportedVersion(McVersion),

    #[error("requested buffer of {requested} elements exceeds the {limit} element cap")]
    OutOfMemory { requested: usize, limit: usize },

    #[error("malformed table: {0}")]
    MalformedTable(&'static str),

    #[error("block y={y} is out of range for scale-1 sampling in the overworld (-64..=319)")]
    YOutOfRange { y: i32 },
}

pub type Result<T> = std::result::Result<T, GenError>;
