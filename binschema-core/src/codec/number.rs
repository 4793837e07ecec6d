//! Fixed-width numeric packing
//!
//! Unsigned kinds are plain big-endian bytes. Signed kinds are
//! sign-magnitude, not two's complement: the most-significant bit of
//! the first byte is the sign flag and the remaining bits hold the
//! absolute value. This leaves the magnitude one bit narrower than the
//! kind's advertised width, so the most negative value of each signed
//! kind (e.g. -32768 for int16) passes the range check but encodes
//! with a zero magnitude and does not round-trip. Existing wire data
//! depends on this packing, so it must not be "corrected" to two's
//! complement.

use super::reader::ByteReader;
use crate::error::{CodecError, Result};
use crate::schema::NumberKind;

/// Reject values outside the kind's closed interval before any bytes
/// are written
pub(crate) fn check_range(value: i64, kind: NumberKind) -> Result<()> {
    if value < kind.min() || value > kind.max() {
        return Err(CodecError::Range { value, kind });
    }
    Ok(())
}

/// Encode a range-checked integer as `kind.size_bytes()` bytes
pub(crate) fn encode_number(value: i64, kind: NumberKind, out: &mut Vec<u8>) -> Result<()> {
    check_range(value, kind)?;

    match kind {
        NumberKind::Uint8 => out.push(value as u8),
        NumberKind::Uint16 => out.extend_from_slice(&(value as u16).to_be_bytes()),
        NumberKind::Uint32 => out.extend_from_slice(&(value as u32).to_be_bytes()),
        NumberKind::Int8 => {
            let magnitude = (value.unsigned_abs() as u8) & 0x7f;
            out.push(sign_bit(value) | magnitude);
        }
        NumberKind::Int16 => {
            let magnitude = (value.unsigned_abs() as u16) & 0x7fff;
            let bytes = magnitude.to_be_bytes();
            out.push(sign_bit(value) | bytes[0]);
            out.push(bytes[1]);
        }
        NumberKind::Int32 => {
            let magnitude = (value.unsigned_abs() as u32) & 0x7fff_ffff;
            let bytes = magnitude.to_be_bytes();
            out.push(sign_bit(value) | bytes[0]);
            out.extend_from_slice(&bytes[1..]);
        }
    }
    Ok(())
}

/// Decode `kind.size_bytes()` bytes into an integer
pub(crate) fn decode_number(reader: &mut ByteReader<'_>, kind: NumberKind) -> Result<i64> {
    let bytes = reader.read_bytes(kind.size_bytes())?;

    let value = match kind {
        NumberKind::Uint8 => bytes[0] as i64,
        NumberKind::Uint16 => u16::from_be_bytes([bytes[0], bytes[1]]) as i64,
        NumberKind::Uint32 => {
            u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64
        }
        NumberKind::Int8 => apply_sign(bytes[0], (bytes[0] & 0x7f) as i64),
        NumberKind::Int16 => {
            let magnitude = u16::from_be_bytes([bytes[0] & 0x7f, bytes[1]]) as i64;
            apply_sign(bytes[0], magnitude)
        }
        NumberKind::Int32 => {
            let magnitude =
                u32::from_be_bytes([bytes[0] & 0x7f, bytes[1], bytes[2], bytes[3]]) as i64;
            apply_sign(bytes[0], magnitude)
        }
    };
    Ok(value)
}

fn sign_bit(value: i64) -> u8 {
    if value < 0 {
        0x80
    } else {
        0
    }
}

fn apply_sign(first_byte: u8, magnitude: i64) -> i64 {
    if first_byte & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
