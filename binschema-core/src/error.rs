//! Error types for encode and decode operations

use crate::schema::NumberKind;

/// Errors that can occur during encoding or decoding
///
/// Every error is raised synchronously at the point of detection and
/// propagates unchanged to the top-level call. A failed encode or
/// decode yields no partial output; callers should treat any variant
/// as "this value/buffer does not conform to this schema".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Numeric value outside the closed interval of its number kind
    Range { value: i64, kind: NumberKind },
    /// Decode needs more bytes than the buffer holds
    OutOfBounds { needed: usize, available: usize },
    /// String byte length or container entry count exceeds the
    /// one-byte length prefix (255)
    LengthOverflow { len: usize },
    /// Runtime shape of the value does not match the schema node
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Schema node kind not recognized
    ///
    /// Unreachable with the closed [`Schema`](crate::Schema) enum;
    /// retained as the defensive contract for schema sources that may
    /// grow new node kinds.
    UnknownSchema,
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::Range { value, kind } => {
                write!(f, "value {value} is out of range for type {kind}")
            }
            CodecError::OutOfBounds { needed, available } => {
                write!(f, "out of bounds: need {needed} bytes, have {available}")
            }
            CodecError::LengthOverflow { len } => {
                write!(f, "length {len} exceeds one-byte prefix maximum of 255")
            }
            CodecError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: schema expects {expected}, value is {found}")
            }
            CodecError::UnknownSchema => write!(f, "unknown schema type"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;
