//! Schema-directed encode/decode engine
//!
//! Two mutually-recursive traversals over a schema tree: `encode` maps
//! a value to bytes, `decode` maps bytes back to a value plus the
//! number of bytes consumed. The decoder threads a single byte cursor
//! through the whole traversal instead of slicing fresh sub-buffers
//! per recursive call.

pub mod decode;
pub mod encode;
pub mod number;
pub(crate) mod reader;

pub use decode::decode;
pub use encode::encode;
