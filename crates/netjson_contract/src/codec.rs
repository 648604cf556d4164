//! JSON codec for schema messages.
//!
//! Decoding silently drops fields the schema does not declare, so fixtures
//! may carry keys from newer or unrelated schema versions. Schema types must
//! therefore never use `#[serde(deny_unknown_fields)]`.
//!
//! Encoding writes field names exactly as declared on the Rust types; schema
//! types must not carry `rename_all` presentation casing.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T, CodecError> {
    tracing::trace!(bytes = raw.len(), "decoding schema message");
    serde_json::from_slice(raw).map_err(CodecError::Decode)
}

pub fn encode<T: Serialize + ?Sized>(msg: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(msg).map_err(CodecError::Encode)
}
