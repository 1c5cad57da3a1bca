use crate::scratch::Scratch;
use crate::value::Value;

/// Serialize `value` into compact (no whitespace) JSON bytes.
///
/// # Panics
/// Panics if a `Num` payload is NaN or infinite; the parser can never
/// produce one (`NumTooBig` rejects infinities, and the JSON grammar has no
/// spelling for NaN), but `Value::set_num` is a safe function a caller could
/// still hand one to directly.
pub(crate) fn to_bytes(value: &Value) -> Vec<u8> {
    let mut scratch = Scratch::new();
    write_value(&mut scratch, value);
    scratch.take()
}

fn write_value(out: &mut Scratch, value: &Value) {
    match value {
        Value::Null => out.push_bytes(b"null"),
        Value::Bool(true) => out.push_bytes(b"true"),
        Value::Bool(false) => out.push_bytes(b"false"),
        Value::Num(n) => write_num(out, *n),
        Value::Str(s) => write_str(out, s),
        Value::Arr(arr) => {
            out.push_byte(b'[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_value(out, elem);
            }
            out.push_byte(b']');
        }
        Value::Obj(obj) => {
            out.push_byte(b'{');
            for (i, member) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_byte(b',');
                }
                write_str(out, &member.key);
                out.push_byte(b':');
                write_value(out, &member.value);
            }
            out.push_byte(b'}');
        }
    }
}

fn write_num(out: &mut Scratch, n: f64) {
    assert!(
        n.is_finite(),
        "cannot serialize a NaN or infinite number as JSON"
    );
    let mut buf = ryu::Buffer::new();
    out.push_bytes(buf.format(n).as_bytes());
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn write_str(out: &mut Scratch, bytes: &[u8]) {
    out.push_byte(b'"');
    for &b in bytes {
        match b {
            b'"' => out.push_bytes(b"\\\""),
            b'\\' => out.push_bytes(b"\\\\"),
            0x08 => out.push_bytes(b"\\b"),
            0x0C => out.push_bytes(b"\\f"),
            b'\n' => out.push_bytes(b"\\n"),
            b'\r' => out.push_bytes(b"\\r"),
            b'\t' => out.push_bytes(b"\\t"),
            b if b < 0x20 => {
                out.push_bytes(b"\\u00");
                out.push_byte(HEX[(b >> 4) as usize]);
                out.push_byte(HEX[(b & 0xF) as usize]);
            }
            b => out.push_byte(b),
        }
    }
    out.push_byte(b'"');
}
