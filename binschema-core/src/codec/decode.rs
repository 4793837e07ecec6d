//! Schema-directed recursive decoder

use super::number::decode_number;
use super::reader::ByteReader;
use crate::error::Result;
use crate::schema::Schema;
use crate::value::Value;
use indexmap::IndexMap;

/// Parse a value from the front of `bytes` against a schema
///
/// Returns the value together with the number of bytes consumed. The
/// count stops wherever the schema stops: trailing bytes are not an
/// error here, and callers that require exact consumption compare the
/// count to `bytes.len()` themselves.
pub fn decode(bytes: &[u8], schema: &Schema) -> Result<(Value, usize)> {
    let mut reader = ByteReader::new(bytes);
    let value = decode_node(&mut reader, schema)?;
    Ok((value, reader.consumed()))
}

fn decode_node(reader: &mut ByteReader<'_>, schema: &Schema) -> Result<Value> {
    match schema {
        Schema::Bool => Ok(Value::Bool(reader.read_byte()? == 1)),
        Schema::Number(kind) => Ok(Value::Number(decode_number(reader, *kind)?)),
        Schema::String => Ok(Value::String(decode_string(reader)?)),
        Schema::Array { items } => {
            let count = reader.read_byte()?;
            let mut elements = Vec::with_capacity(count as usize);
            for _ in 0..count {
                elements.push(decode_node(reader, items)?);
            }
            Ok(Value::Array(elements))
        }
        Schema::Struct { properties } => {
            let mut fields = IndexMap::new();
            // The lead byte is a presence sentinel only. Any nonzero
            // value means "walk the schema's property list"; it is
            // never compared against the property count.
            if reader.read_byte()? != 0 {
                for property in properties {
                    let field = decode_node(reader, &property.schema)?;
                    fields.insert(property.key.clone(), field);
                }
            }
            Ok(Value::Map(fields))
        }
        Schema::Map { value: value_schema } => {
            let count = reader.read_byte()?;
            let mut entries = IndexMap::with_capacity(count as usize);
            for _ in 0..count {
                let key = decode_string(reader)?;
                let entry = decode_node(reader, value_schema)?;
                entries.insert(key, entry);
            }
            Ok(Value::Map(entries))
        }
    }
}

/// One length byte, then that many UTF-8 bytes. Invalid sequences
/// decode lossily to U+FFFD rather than failing, matching the bytes
/// already in the wild.
fn decode_string(reader: &mut ByteReader<'_>) -> Result<String> {
    let len = reader.read_byte()? as usize;
    let bytes = reader.read_bytes(len)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}
