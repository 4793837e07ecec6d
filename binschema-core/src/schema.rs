//! Schema model for the binschema wire format
//!
//! A schema is a closed, recursively-defined description of a value's
//! shape. It is built once by the caller, never mutates afterwards, and
//! is shared read-only between encode and decode. The wire format has
//! no field tags or type markers, so the exact schema (or a
//! structurally identical copy) used to encode a buffer must be used to
//! decode it.

/// Maximum byte length of a string and maximum entry count of an
/// array, struct, or map. Variable-length payloads carry a single
/// length-prefix byte, so anything longer cannot be represented.
pub const MAX_LENGTH: usize = 255;

/// Fixed-width number kinds supported in schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberKind {
    Uint8,
    Uint16,
    Uint32,
    Int8,
    Int16,
    Int32,
}

impl NumberKind {
    /// Encoded size in bytes
    pub const fn size_bytes(self) -> usize {
        match self {
            NumberKind::Uint8 | NumberKind::Int8 => 1,
            NumberKind::Uint16 | NumberKind::Int16 => 2,
            NumberKind::Uint32 | NumberKind::Int32 => 4,
        }
    }

    /// Smallest encodable value (inclusive)
    pub const fn min(self) -> i64 {
        match self {
            NumberKind::Uint8 | NumberKind::Uint16 | NumberKind::Uint32 => 0,
            NumberKind::Int8 => i8::MIN as i64,
            NumberKind::Int16 => i16::MIN as i64,
            NumberKind::Int32 => i32::MIN as i64,
        }
    }

    /// Largest encodable value (inclusive)
    pub const fn max(self) -> i64 {
        match self {
            NumberKind::Uint8 => u8::MAX as i64,
            NumberKind::Uint16 => u16::MAX as i64,
            NumberKind::Uint32 => u32::MAX as i64,
            NumberKind::Int8 => i8::MAX as i64,
            NumberKind::Int16 => i16::MAX as i64,
            NumberKind::Int32 => i32::MAX as i64,
        }
    }

    /// Whether the kind carries a sign bit on the wire
    pub const fn is_signed(self) -> bool {
        matches!(self, NumberKind::Int8 | NumberKind::Int16 | NumberKind::Int32)
    }
}

impl core::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            NumberKind::Uint8 => "uint8",
            NumberKind::Uint16 => "uint16",
            NumberKind::Uint32 => "uint32",
            NumberKind::Int8 => "int8",
            NumberKind::Int16 => "int16",
            NumberKind::Int32 => "int32",
        };
        write!(f, "{name}")
    }
}

/// One named field of a struct schema
///
/// Properties are identified by wire position, not by any on-wire tag:
/// encode and decode both walk the property list in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub key: String,
    pub schema: Schema,
}

impl Property {
    pub fn new(key: impl Into<String>, schema: Schema) -> Self {
        Self {
            key: key.into(),
            schema,
        }
    }
}

/// A node in a schema tree
///
/// There is no builder API: callers construct the enum directly as
/// data, or deserialize it (with the `serde` feature) from a stored
/// representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Schema {
    /// Single byte, `0x00` or `0x01`
    Bool,
    /// Fixed-width integer; signed kinds use sign-magnitude packing
    Number(NumberKind),
    /// UTF-8 text with a one-byte length prefix (0-255 bytes)
    String,
    /// Homogeneous ordered sequence; one count byte, then each element
    Array { items: Box<Schema> },
    /// Fixed-shape record; fields appear on the wire in property order
    Struct { properties: Vec<Property> },
    /// String-keyed dictionary with one shared value schema
    Map { value: Box<Schema> },
}

impl Schema {
    /// Short name of the node kind, used in diagnostics
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Schema::Bool => "bool",
            Schema::Number(_) => "number",
            Schema::String => "string",
            Schema::Array { .. } => "array",
            Schema::Struct { .. } => "struct",
            Schema::Map { .. } => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_kind_sizes() {
        assert_eq!(NumberKind::Uint8.size_bytes(), 1);
        assert_eq!(NumberKind::Uint16.size_bytes(), 2);
        assert_eq!(NumberKind::Uint32.size_bytes(), 4);
        assert_eq!(NumberKind::Int8.size_bytes(), 1);
        assert_eq!(NumberKind::Int16.size_bytes(), 2);
        assert_eq!(NumberKind::Int32.size_bytes(), 4);
    }

    #[test]
    fn test_number_kind_ranges() {
        assert_eq!(NumberKind::Uint8.min(), 0);
        assert_eq!(NumberKind::Uint8.max(), 255);
        assert_eq!(NumberKind::Uint16.max(), 65535);
        assert_eq!(NumberKind::Uint32.max(), 4294967295);
        assert_eq!(NumberKind::Int8.min(), -128);
        assert_eq!(NumberKind::Int8.max(), 127);
        assert_eq!(NumberKind::Int16.min(), -32768);
        assert_eq!(NumberKind::Int16.max(), 32767);
        assert_eq!(NumberKind::Int32.min(), -2147483648);
        assert_eq!(NumberKind::Int32.max(), 2147483647);
    }

    #[test]
    fn test_number_kind_display() {
        assert_eq!(NumberKind::Uint16.to_string(), "uint16");
        assert_eq!(NumberKind::Int32.to_string(), "int32");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Schema::Bool.kind_name(), "bool");
        assert_eq!(Schema::Number(NumberKind::Uint8).kind_name(), "number");
        assert_eq!(
            Schema::Array {
                items: Box::new(Schema::String)
            }
            .kind_name(),
            "array"
        );
    }

    #[test]
    fn test_schema_trees_compare_structurally() {
        let a = Schema::Struct {
            properties: vec![Property::new("id", Schema::Number(NumberKind::Uint16))],
        };
        let b = Schema::Struct {
            properties: vec![Property::new("id", Schema::Number(NumberKind::Uint16))],
        };
        assert_eq!(a, b);
    }
}
