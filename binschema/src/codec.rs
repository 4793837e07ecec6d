//! Schema-bound codec handle

use binschema_core::{decode, encode, Result, Schema, Value};

/// A codec bound to one schema for its lifetime
///
/// Holds the schema once so repeated encode/decode calls do not need
/// to pass it around. The handle is stateless between calls and safe
/// to share across threads behind a reference.
#[derive(Debug, Clone)]
pub struct SchemaCodec {
    schema: Schema,
}

impl SchemaCodec {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// The schema this codec encodes and decodes against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Serialize a value conforming to the bound schema
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        encode(value, &self.schema)
    }

    /// Parse a value from the front of `bytes`, ignoring anything the
    /// schema does not reach
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        decode(bytes, &self.schema).map(|(value, _)| value)
    }

    /// Parse a value and report how many bytes it occupied, for
    /// callers that must enforce exact consumption
    pub fn decode_with_consumed(&self, bytes: &[u8]) -> Result<(Value, usize)> {
        decode(bytes, &self.schema)
    }
}

#[cfg(feature = "serde")]
impl SchemaCodec {
    /// Build a codec from a JSON-serialized schema
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// JSON representation of the bound schema
    pub fn schema_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.schema)
    }
}
