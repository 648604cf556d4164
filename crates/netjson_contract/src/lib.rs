//! Contract shared by the NetJSON round-trip harness.
//!
//! [`canonicalize`] defines when two JSON documents are equivalent.
//! [`SchemaMessage`] is the capability set every configuration family
//! exposes to the runner: decode, validate, encode.

mod canonical;
pub mod codec;
mod error;
mod message;

pub use canonical::{canonical_bytes, canonicalize, equivalent, normalize};
pub use error::{CanonicalError, CodecError, ValidationError, Violation};
pub use message::{SchemaMessage, Validate};
