//! binschema - Schema-Driven Binary Serialization
//!
//! A compact binary codec where a declarative schema, not wire tags,
//! determines how bytes are interpreted. The same schema used to encode
//! a value must be supplied to decode it back.
//!
//! ## Architecture
//!
//! The workspace follows a specification/implementation split:
//!
//! - **binschema-core**: schema and value models, error taxonomy, and
//!   the recursive encode/decode engine (pure computation, no I/O)
//! - **binschema**: the schema-bound [`SchemaCodec`] wrapper and JSON
//!   interchange for schemas and values
//!
//! ## Quick Start
//!
//! ```rust
//! use binschema::{NumberKind, Property, Schema, SchemaCodec, Value};
//! use binschema::IndexMap;
//!
//! fn example() -> binschema::Result<()> {
//!     let codec = SchemaCodec::new(Schema::Struct {
//!         properties: vec![
//!             Property::new("id", Schema::Number(NumberKind::Uint16)),
//!             Property::new("name", Schema::String),
//!         ],
//!     });
//!
//!     let mut record = IndexMap::new();
//!     record.insert("id".to_string(), Value::Number(7));
//!     record.insert("name".to_string(), Value::from("anvil"));
//!
//!     let bytes = codec.encode(&Value::Map(record))?;
//!     let decoded = codec.decode(&bytes)?;
//!     assert_eq!(decoded.as_map().unwrap()["id"], Value::Number(7));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Wire Format
//!
//! | Schema node | Empty/absent | Present |
//! |---|---|---|
//! | bool | - | 1 byte, `0x00`/`0x01` |
//! | uintN/intN | - | N/8 bytes, big-endian; signed = sign bit + magnitude |
//! | string | `0x00` | 1 length byte + UTF-8 bytes |
//! | array | `0x00` | 1 count byte + each element |
//! | struct | `0x00` | 1 byte = schema property count + fields in schema order |
//! | map | `0x00` | 1 count byte + each (string key, value) pair |

// Re-export the core data model and engine
pub use binschema_core::{
    decode, encode, CodecError, IndexMap, NumberKind, Property, Result, Schema, Value, MAX_LENGTH,
};

pub mod codec;

pub use codec::SchemaCodec;
