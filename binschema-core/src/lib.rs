//! binschema-core - Schema-Driven Binary Codec Definitions
//!
//! This crate provides the core data model and encode/decode engine for
//! the binschema wire format: a compact, schema-directed binary encoding
//! with no wire-level self-description. The schema used to encode a
//! value must also be used to decode it - bytes alone cannot recover
//! their own shape.
//!
//! The crate is pure computation: no I/O, no transport, no persistent
//! state. Both `encode` and `decode` are reentrant and safe to call
//! concurrently against a shared schema.

pub mod codec;
pub mod error;
pub mod schema;
pub mod value;

pub use codec::{decode, encode};
pub use error::{CodecError, Result};
pub use schema::{NumberKind, Property, Schema, MAX_LENGTH};
pub use value::Value;

// Callers build `Value::Map` with this; re-exported so they do not
// need a direct indexmap dependency.
pub use indexmap::IndexMap;
