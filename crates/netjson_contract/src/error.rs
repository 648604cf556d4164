use std::fmt;

use thiserror::Error;

/// Failure to bring a document into canonical form.
#[derive(Debug, Error)]
pub enum CanonicalError {
    /// Input is not JSON.
    #[error("normalize json: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("marshal normalized json: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failure of the JSON codec for a schema message.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON or a value whose type does not fit the schema.
    /// Unknown fields never end up here.
    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One broken constraint, located by JSON pointer into the encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{} at {}", self.message, path)
    }
}

/// Every violation found in a message, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// `Ok(())` when `violations` is empty.
    pub fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { violations: vec![Violation::new(path, message)] }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema validation failed ({} violation(s))", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
