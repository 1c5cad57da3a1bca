//! A hand-rolled RFC 8259 JSON parser, serializer, and mutable document model.
//!
//! [`Value`] is the document type: parse text into one with [`Value::parse`],
//! edit it with the container operations on [`Array`]/[`Object`], and turn it
//! back into bytes with [`Value::to_json_bytes`]. Streaming parsing, schema
//! validation, JSON Pointer/JSONPath, and number preservation beyond IEEE-754
//! binary64 are out of scope; see the crate-level design notes for the
//! deliberate deviations from strict RFC 8259 (trailing-comma rejection,
//! permissive duplicate object keys, `\/` acceptance).

mod array;
mod error;
mod object;
mod options;
mod parser;
mod scratch;
mod ser;
mod value;

pub use array::Array;
pub use error::ParseError;
pub use object::{Member, Object};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use value::{Value, ValueKind};
