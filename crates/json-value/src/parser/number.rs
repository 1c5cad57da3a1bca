use miette::SourceSpan;

use crate::error::ParseError;

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_digit_1to9(b: u8) -> bool {
    (b'1'..=b'9').contains(&b)
}

/// Validate a JSON number at `input[start..]` and return its end offset.
///
/// Grammar: optional `-`, then `0` or `[1-9][0-9]*`, optional `.` fraction,
/// optional `[eE]` exponent. Pure syntax check; the caller converts the
/// validated span with `str::parse::<f64>()`.
pub(crate) fn scan(input: &[u8], start: usize) -> Result<usize, ParseError> {
    let mut p = start;
    let bad = |at: usize| ParseError::InvalidValue {
        span: SourceSpan::from((at, 1)),
    };

    if input.get(p) == Some(&b'-') {
        p += 1;
    }

    if input.get(p) == Some(&b'0') {
        p += 1;
    } else {
        if !matches!(input.get(p), Some(&b) if is_digit_1to9(b)) {
            return Err(bad(p));
        }
        p += 1;
        while matches!(input.get(p), Some(&b) if is_digit(b)) {
            p += 1;
        }
    }

    if input.get(p) == Some(&b'.') {
        p += 1;
        if !matches!(input.get(p), Some(&b) if is_digit(b)) {
            return Err(bad(p));
        }
        p += 1;
        while matches!(input.get(p), Some(&b) if is_digit(b)) {
            p += 1;
        }
    }

    if matches!(input.get(p), Some(&b'e' | &b'E')) {
        p += 1;
        if matches!(input.get(p), Some(&b'+' | &b'-')) {
            p += 1;
        }
        if !matches!(input.get(p), Some(&b) if is_digit(b)) {
            return Err(bad(p));
        }
        p += 1;
        while matches!(input.get(p), Some(&b) if is_digit(b)) {
            p += 1;
        }
    }

    Ok(p)
}

/// Parse the validated `[start, end)` span as an `f64`.
///
/// `str::parse::<f64>()` performs the same round-to-nearest binary64
/// conversion as `strtod`, and already saturates to infinity on overflow and
/// to zero on underflow rather than erroring, so overflow is detected
/// after the fact via `is_infinite()`.
pub(crate) fn convert(input: &[u8], start: usize, end: usize) -> Result<f64, ParseError> {
    // The grammar validated by `scan` only accepts ASCII bytes, so this is
    // always valid UTF-8.
    let text = std::str::from_utf8(&input[start..end]).expect("number span is ASCII");
    let value: f64 = text.parse().expect("number span matched the JSON grammar");
    if value.is_infinite() {
        return Err(ParseError::NumTooBig {
            span: SourceSpan::from((start, end - start)),
        });
    }
    Ok(value)
}
