use std::str::Utf8Error;

use crate::array::Array;
use crate::error::ParseError;
use crate::object::Object;
use crate::options::ParseOptions;
use crate::parser;
use crate::ser;

/// The tag of a [`Value`], returned by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Num,
    Str,
    Arr,
    Obj,
}

/// A JSON value: a native sum type in place of a tagged union. The variant
/// itself is the tag, so there is no separate "free the old payload" step:
/// assigning a new variant drops the old one's payload automatically.
///
/// `Str` (and object keys, see [`crate::object::Member`]) are stored as
/// `Box<[u8]>` rather than `String`/`Box<str>`: bytes `>= 0x80` are passed
/// through during parsing and serialization without UTF-8 validation, so the
/// type can't promise validity. [`Value::as_str`] and
/// [`Value::to_string_lossy`] are provided for the common case where the
/// caller knows (or doesn't care) that the bytes are valid UTF-8.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Num(f64),
    Str(Box<[u8]>),
    Arr(Array),
    Obj(Object),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Parse `text` as JSON with default [`ParseOptions`].
    pub fn parse(text: impl AsRef<[u8]>) -> Result<Value, ParseError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parse `text` as JSON with caller-supplied options.
    pub fn parse_with(text: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Value, ParseError> {
        parser::parse(text.as_ref(), options)
    }

    /// Serialize to compact JSON bytes.
    ///
    /// # Panics
    /// Panics if any `Num` in the tree is NaN or infinite; the parser never
    /// produces such a value, but `set_num` does not prevent constructing
    /// one directly.
    #[must_use]
    pub fn to_json_bytes(&self) -> Vec<u8> {
        ser::to_bytes(self)
    }

    /// Serialize to a JSON string, failing if the output isn't valid UTF-8
    /// (possible only when a `Str` payload contains non-UTF-8 bytes that
    /// were never re-validated, per this crate's pass-through policy).
    pub fn to_json_string(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.to_json_bytes())
    }

    #[must_use]
    pub fn to_json_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_json_bytes()).into_owned()
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Num(_) => ValueKind::Num,
            Value::Str(_) => ValueKind::Str,
            Value::Arr(_) => ValueKind::Arr,
            Value::Obj(_) => ValueKind::Obj,
        }
    }

    /// Release the current payload, leaving `Null` behind. Idempotent.
    pub fn clear_to_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_null(&mut self) {
        self.clear_to_null();
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn set_num(&mut self, n: f64) {
        *self = Value::Num(n);
    }

    pub fn set_str(&mut self, bytes: impl Into<Box<[u8]>>) {
        *self = Value::Str(bytes.into());
    }

    pub fn set_array(&mut self, cap: usize) {
        *self = Value::Arr(Array::with_capacity(cap));
    }

    pub fn set_object(&mut self, cap: usize) {
        *self = Value::Obj(Object::with_capacity(cap));
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// `Str` payload as `&str`; `None` if this isn't a `Str`, `Some(Err(_))`
    /// if it is but the bytes aren't valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<Result<&str, Utf8Error>> {
        match self {
            Value::Str(s) => Some(std::str::from_utf8(s)),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_string_lossy(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(String::from_utf8_lossy(s)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_arr(&self) -> Option<&Array> {
        match self {
            Value::Arr(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_arr_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Arr(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_obj(&self) -> Option<&Object> {
        match self {
            Value::Obj(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_obj_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Obj(o) => Some(o),
            _ => None,
        }
    }

    /// Take the payload, leaving `Null` behind. The "move" of the original
    /// design: `*dst = src.take()`. Rust's borrow checker rejects any call
    /// where `dst` and `src` alias, so the "cannot move onto self"
    /// precondition is enforced at compile time rather than at runtime.
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::replace(self, Value::Null)
    }

    /// Exchange the payloads of `a` and `b`. Calling this with `a` and `b`
    /// as the same place does not typecheck (you cannot hold two `&mut` to
    /// one location), so the "no-op when a == b" guard the original needs at
    /// runtime is simply unreachable here.
    pub fn swap(a: &mut Value, b: &mut Value) {
        core::mem::swap(a, b);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default().kind(), ValueKind::Null);
    }

    #[test]
    fn clear_to_null_is_idempotent() {
        let mut v = Value::Bool(true);
        v.clear_to_null();
        assert_eq!(v, Value::Null);
        v.clear_to_null();
        assert_eq!(v, Value::Null);
    }

    #[test]
    fn take_moves_payload_and_resets_source() {
        let mut src = Value::Num(42.0);
        let moved = src.take();
        assert_eq!(src, Value::Null);
        assert_eq!(moved, Value::Num(42.0));
    }

    #[test]
    fn swap_is_an_involution() {
        let mut a = Value::Num(1.0);
        let mut b = Value::Bool(true);
        Value::swap(&mut a, &mut b);
        Value::swap(&mut a, &mut b);
        assert_eq!(a, Value::Num(1.0));
        assert_eq!(b, Value::Bool(true));
    }

    #[test]
    fn clone_is_independent_of_source() {
        let mut src = Value::Null;
        src.set_array(0);
        src.as_arr_mut().unwrap().push();
        let mut cloned = src.clone();
        cloned.as_arr_mut().unwrap().push();
        assert_eq!(src.as_arr().unwrap().len(), 1);
        assert_eq!(cloned.as_arr().unwrap().len(), 2);
    }

    #[test]
    fn nan_has_no_reflexive_equality() {
        assert_ne!(Value::Num(f64::NAN), Value::Num(f64::NAN));
    }
}
