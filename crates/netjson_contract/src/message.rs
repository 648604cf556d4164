use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::error::{CodecError, ValidationError};

/// Structural and value constraints of a configuration family.
pub trait Validate {
    /// Checks every rule and reports all violations together.
    fn validate_all(&self) -> Result<(), ValidationError>;
}

/// What the round-trip runner needs from a configuration family's message.
///
/// Object safe, so a family table can hold `Box<dyn SchemaMessage>`
/// factories for unrelated message types. Any serde type that implements
/// [`Validate`] gets it for free.
pub trait SchemaMessage: Send {
    /// Rust type name, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Replaces the contents of `self` with the message decoded from `raw`.
    fn decode(&mut self, raw: &[u8]) -> Result<(), CodecError>;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Serializes using the schema's declared field names.
    fn encode(&self) -> Result<Vec<u8>, CodecError>;
}

impl<T> SchemaMessage for T
where
    T: Serialize + DeserializeOwned + Validate + Send,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn decode(&mut self, raw: &[u8]) -> Result<(), CodecError> {
        *self = codec::decode(raw)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validate::validate_all(self)
    }

    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }
}
