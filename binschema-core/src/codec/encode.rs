//! Schema-directed recursive encoder

use super::number::encode_number;
use crate::error::{CodecError, Result};
use crate::schema::{Schema, MAX_LENGTH};
use crate::value::Value;

/// Serialize a value against a schema
///
/// The call is atomic: on error nothing is returned, never a partial
/// buffer. A value whose runtime shape disagrees with the schema node
/// fails with [`CodecError::TypeMismatch`]; numbers outside their
/// kind's range fail with [`CodecError::Range`]; strings and
/// containers longer than 255 bytes/entries fail with
/// [`CodecError::LengthOverflow`].
pub fn encode(value: &Value, schema: &Schema) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_node(value, schema, &mut out)?;
    Ok(out)
}

fn encode_node(value: &Value, schema: &Schema, out: &mut Vec<u8>) -> Result<()> {
    match schema {
        Schema::Bool => {
            let b = expect_bool(value, schema)?;
            out.push(b as u8);
            Ok(())
        }
        Schema::Number(kind) => {
            let n = value.as_number().ok_or_else(|| mismatch(schema, value))?;
            encode_number(n, *kind, out)
        }
        Schema::String => {
            let s = value.as_str().ok_or_else(|| mismatch(schema, value))?;
            encode_string(s, out)
        }
        Schema::Array { items } => {
            let elements = value.as_array().ok_or_else(|| mismatch(schema, value))?;
            out.push(check_length(elements.len())?);
            for element in elements {
                encode_node(element, items, out)?;
            }
            Ok(())
        }
        Schema::Struct { properties } => {
            let fields = value.as_map().ok_or_else(|| mismatch(schema, value))?;
            // The count byte comes from the schema, not the value
            out.push(check_length(properties.len())?);
            for property in properties {
                match fields.get(&property.key) {
                    Some(field) => encode_node(field, &property.schema, out)?,
                    None => encode_absent(&property.schema, out),
                }
            }
            Ok(())
        }
        Schema::Map { value: value_schema } => {
            let entries = value.as_map().ok_or_else(|| mismatch(schema, value))?;
            out.push(check_length(entries.len())?);
            for (key, entry) in entries {
                encode_string(key, out)?;
                encode_node(entry, value_schema, out)?;
            }
            Ok(())
        }
    }
}

/// Empty string: a single zero byte. Otherwise one length byte plus
/// the UTF-8 bytes. The zero byte doubles as the absence sentinel for
/// every variable-length node.
fn encode_string(s: &str, out: &mut Vec<u8>) -> Result<()> {
    let bytes = s.as_bytes();
    out.push(check_length(bytes.len())?);
    out.extend_from_slice(bytes);
    Ok(())
}

/// Wire form of a struct field whose key is missing from the value:
/// false for bool, zero bytes for numbers, the zero-length sentinel
/// for everything variable-length.
fn encode_absent(schema: &Schema, out: &mut Vec<u8>) {
    match schema {
        Schema::Number(kind) => out.extend(core::iter::repeat(0u8).take(kind.size_bytes())),
        Schema::Bool
        | Schema::String
        | Schema::Array { .. }
        | Schema::Struct { .. }
        | Schema::Map { .. } => out.push(0),
    }
}

fn check_length(len: usize) -> Result<u8> {
    if len > MAX_LENGTH {
        return Err(CodecError::LengthOverflow { len });
    }
    Ok(len as u8)
}

fn expect_bool(value: &Value, schema: &Schema) -> Result<bool> {
    value.as_bool().ok_or_else(|| mismatch(schema, value))
}

fn mismatch(schema: &Schema, value: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: schema.kind_name(),
        found: value.kind_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NumberKind, Property};
    use indexmap::IndexMap;

    fn uint8_array() -> Schema {
        Schema::Array {
            items: Box::new(Schema::Number(NumberKind::Uint8)),
        }
    }

    #[test]
    fn test_encode_bool() {
        assert_eq!(encode(&Value::Bool(true), &Schema::Bool).unwrap(), [1]);
        assert_eq!(encode(&Value::Bool(false), &Schema::Bool).unwrap(), [0]);
    }

    #[test]
    fn test_encode_string() {
        assert_eq!(
            encode(&Value::from("hello world"), &Schema::String).unwrap(),
            [
                11, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x20, 0x77, 0x6f, 0x72, 0x6c, 0x64
            ]
        );
    }

    #[test]
    fn test_encode_empty_string() {
        assert_eq!(encode(&Value::from(""), &Schema::String).unwrap(), [0x00]);
    }

    #[test]
    fn test_encode_string_counts_utf8_bytes() {
        // Three characters, six UTF-8 bytes
        let encoded = encode(&Value::from("日本語"), &Schema::String).unwrap();
        assert_eq!(encoded[0], 9);
        assert_eq!(encoded.len(), 10);
    }

    #[test]
    fn test_encode_empty_array() {
        assert_eq!(encode(&Value::Array(vec![]), &uint8_array()).unwrap(), [0x00]);
    }

    #[test]
    fn test_encode_array_of_uint16() {
        let value = Value::Array(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        let schema = Schema::Array {
            items: Box::new(Schema::Number(NumberKind::Uint16)),
        };
        assert_eq!(encode(&value, &schema).unwrap(), [3, 0, 1, 0, 2, 0, 3]);
    }

    #[test]
    fn test_encode_struct_uses_schema_order_and_count() {
        let schema = Schema::Struct {
            properties: vec![
                Property::new("a", Schema::Number(NumberKind::Uint8)),
                Property::new("b", Schema::Number(NumberKind::Uint8)),
                Property::new("c", Schema::Number(NumberKind::Uint8)),
            ],
        };
        // Insert out of schema order; wire order follows the schema
        let mut fields = IndexMap::new();
        fields.insert("c".to_string(), Value::Number(3));
        fields.insert("a".to_string(), Value::Number(1));
        fields.insert("b".to_string(), Value::Number(2));

        assert_eq!(encode(&Value::Map(fields), &schema).unwrap(), [3, 1, 2, 3]);
    }

    #[test]
    fn test_encode_struct_missing_keys_as_absent() {
        let schema = Schema::Struct {
            properties: vec![
                Property::new("flag", Schema::Bool),
                Property::new("count", Schema::Number(NumberKind::Uint16)),
                Property::new("label", Schema::String),
                Property::new("items", uint8_array()),
            ],
        };
        let encoded = encode(&Value::Map(IndexMap::new()), &schema).unwrap();
        assert_eq!(encoded, [4, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_empty_map() {
        let schema = Schema::Map {
            value: Box::new(Schema::String),
        };
        assert_eq!(encode(&Value::Map(IndexMap::new()), &schema).unwrap(), [0x00]);
    }

    #[test]
    fn test_encode_map_iterates_insertion_order() {
        let schema = Schema::Map {
            value: Box::new(Schema::Number(NumberKind::Uint8)),
        };
        let mut entries = IndexMap::new();
        entries.insert("b".to_string(), Value::Number(2));
        entries.insert("a".to_string(), Value::Number(1));

        assert_eq!(
            encode(&Value::Map(entries), &schema).unwrap(),
            [2, 1, b'b', 2, 1, b'a', 1]
        );
    }

    #[test]
    fn test_encode_string_over_255_bytes_rejected() {
        let long = "x".repeat(256);
        assert_eq!(
            encode(&Value::from(long), &Schema::String),
            Err(CodecError::LengthOverflow { len: 256 })
        );
        // 255 bytes is the cap, not past it
        assert!(encode(&Value::from("y".repeat(255)), &Schema::String).is_ok());
    }

    #[test]
    fn test_encode_array_over_255_elements_rejected() {
        let value = Value::Array(vec![Value::Number(0); 256]);
        assert_eq!(
            encode(&value, &uint8_array()),
            Err(CodecError::LengthOverflow { len: 256 })
        );
    }

    #[test]
    fn test_encode_map_key_over_255_bytes_rejected() {
        let schema = Schema::Map {
            value: Box::new(Schema::Bool),
        };
        let mut entries = IndexMap::new();
        entries.insert("k".repeat(300), Value::Bool(true));
        assert_eq!(
            encode(&Value::Map(entries), &schema),
            Err(CodecError::LengthOverflow { len: 300 })
        );
    }

    #[test]
    fn test_encode_type_mismatch() {
        assert_eq!(
            encode(&Value::Number(1), &Schema::Bool),
            Err(CodecError::TypeMismatch {
                expected: "bool",
                found: "number"
            })
        );
        assert_eq!(
            encode(&Value::from("nope"), &uint8_array()),
            Err(CodecError::TypeMismatch {
                expected: "array",
                found: "string"
            })
        );
    }

    #[test]
    fn test_encode_is_atomic_on_error() {
        // Second element is out of range; the caller sees only the error
        let value = Value::Array(vec![Value::Number(1), Value::Number(256)]);
        assert_eq!(
            encode(&value, &uint8_array()),
            Err(CodecError::Range {
                value: 256,
                kind: NumberKind::Uint8
            })
        );
    }
}
