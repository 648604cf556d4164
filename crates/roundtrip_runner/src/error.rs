use std::fmt;
use std::path::PathBuf;

use netjson_contract::{CanonicalError, CodecError, ValidationError};
use thiserror::Error;

/// The test setup itself is broken; the whole family is abandoned.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("glob {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("no files matched {pattern}")]
    NoMatches { pattern: String },
}

/// Which side of the comparison a canonicalization failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The fixture as read from disk.
    Expected,
    /// The re-encoded message.
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Expected => "expected",
            Side::Actual => "actual",
        })
    }
}

/// Pipeline step at which a fixture failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Read,
    Canonicalize,
    Decode,
    Validate,
    Encode,
    Compare,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Canonicalize => "canonicalize",
            Stage::Decode => "decode",
            Stage::Validate => "validate",
            Stage::Encode => "encode",
            Stage::Compare => "compare",
        })
    }
}

/// A single fixture failed; other fixtures are unaffected.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{side} side: {source}")]
    Canonicalize {
        side: Side,
        #[source]
        source: CanonicalError,
    },
    #[error("unmarshal into {message_type}: {source}")]
    Decode {
        message_type: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("validate {message_type}: {source}")]
    Validate {
        message_type: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("marshal {message_type}: {source}")]
    Encode {
        message_type: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("round-trip mismatch:\nexpected: {expected}\nactual:   {actual}")]
    Mismatch { expected: String, actual: String },
}

impl FixtureError {
    pub fn stage(&self) -> Stage {
        match self {
            FixtureError::Read { .. } => Stage::Read,
            FixtureError::Canonicalize { .. } => Stage::Canonicalize,
            FixtureError::Decode { .. } => Stage::Decode,
            FixtureError::Validate { .. } => Stage::Validate,
            FixtureError::Encode { .. } => Stage::Encode,
            FixtureError::Mismatch { .. } => Stage::Compare,
        }
    }
}

/// Returned by [`Report::into_result`](crate::Report::into_result) when anything failed.
#[derive(Debug, Error)]
#[error("{failed} round-trip failure(s) across {families} family(ies):\n{details}")]
pub struct RunFailed {
    pub failed: usize,
    pub families: usize,
    pub details: String,
}
