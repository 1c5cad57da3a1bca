mod number;
mod string;

use miette::SourceSpan;

use crate::array::Array;
use crate::error::ParseError;
use crate::object::{Member, Object};
use crate::options::ParseOptions;
use crate::scratch::Scratch;
use crate::value::Value;

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
    scratch: Scratch,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8], options: &ParseOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
            scratch: Scratch::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect_byte(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_literal(&mut self, text: &[u8], value: Value) -> Result<Value, ParseError> {
        if self.input[self.pos..].starts_with(text) {
            self.pos += text.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue {
                span: SourceSpan::from((self.pos, text.len())),
            })
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let end = number::scan(self.input, start)?;
        let n = number::convert(self.input, start, end)?;
        self.pos = end;
        Ok(Value::Num(n))
    }

    fn parse_string_value(&mut self) -> Result<Value, ParseError> {
        let bytes = string::parse(self.input, &mut self.pos, &mut self.scratch)?;
        Ok(Value::Str(bytes.into_owned().into_boxed_slice()))
    }

    fn parse_key(&mut self) -> Result<Box<[u8]>, ParseError> {
        let bytes = string::parse(self.input, &mut self.pos, &mut self.scratch)?;
        Ok(bytes.into_owned().into_boxed_slice())
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.max_depth,
                span: SourceSpan::from((self.pos, 1)),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_container(&mut self) {
        self.depth -= 1;
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.pos += 1; // '['
        self.skip_whitespace();

        let mut elems = Vec::new();
        if self.expect_byte(b']') {
            self.leave_container();
            return Ok(Value::Arr(elems.into_iter().collect::<Array>()));
        }

        loop {
            match self.parse_value() {
                Ok(v) => elems.push(v),
                Err(e) => {
                    self.leave_container();
                    return Err(e);
                }
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    self.leave_container();
                    return Ok(Value::Arr(elems.into_iter().collect::<Array>()));
                }
                _ => {
                    self.leave_container();
                    return Err(ParseError::MissCommaOrSquareBracket {
                        span: SourceSpan::from((self.pos, 1)),
                    });
                }
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.pos += 1; // '{'
        self.skip_whitespace();

        let mut members = Vec::new();
        if self.expect_byte(b'}') {
            self.leave_container();
            return Ok(Value::Obj(members.into_iter().collect::<Object>()));
        }

        loop {
            if self.peek() != Some(b'"') {
                self.leave_container();
                return Err(ParseError::MissKey {
                    span: SourceSpan::from((self.pos, 1)),
                });
            }
            let key = match self.parse_key() {
                Ok(k) => k,
                Err(e) => {
                    self.leave_container();
                    return Err(e);
                }
            };
            self.skip_whitespace();
            if !self.expect_byte(b':') {
                self.leave_container();
                return Err(ParseError::MissColon {
                    span: SourceSpan::from((self.pos, 1)),
                });
            }
            self.skip_whitespace();
            let value = match self.parse_value() {
                Ok(v) => v,
                Err(e) => {
                    self.leave_container();
                    return Err(e);
                }
            };
            members.push(Member { key, value });

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    self.leave_container();
                    return Ok(Value::Obj(members.into_iter().collect::<Object>()));
                }
                _ => {
                    self.leave_container();
                    return Err(ParseError::MissCommaOrCurlyBracket {
                        span: SourceSpan::from((self.pos, 1)),
                    });
                }
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'"') => self.parse_string_value(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            None => Err(ParseError::ExpectValue {
                span: SourceSpan::from((self.pos, 0)),
            }),
            Some(_) => Err(ParseError::InvalidValue {
                span: SourceSpan::from((self.pos, 1)),
            }),
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len(), outcome))]
pub(crate) fn parse(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input, options);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != parser.input.len() {
        tracing::Span::current().record("outcome", "root_not_singular");
        return Err(ParseError::RootNotSingular {
            span: SourceSpan::from((parser.pos, parser.input.len() - parser.pos)),
        });
    }
    debug_assert!(parser.scratch.is_empty(), "scratch leaked past a successful parse");
    tracing::Span::current().record("outcome", "ok");
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    fn parse_ok(text: &str) -> Value {
        parse(text.as_bytes(), &ParseOptions::default()).expect("expected a successful parse")
    }

    fn parse_err(text: &str) -> ParseError {
        parse(text.as_bytes(), &ParseOptions::default()).expect_err("expected a parse error")
    }

    #[test]
    fn parses_whitespace_padded_null() {
        assert_eq!(parse_ok(" null "), Value::Null);
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(matches!(
            parse_err("null x"),
            ParseError::RootNotSingular { .. }
        ));
    }

    #[test]
    fn parses_simple_array() {
        let v = parse_ok(r#"[ null , false , true , 123 , "abc" ]"#);
        let arr = v.as_arr().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0].kind(), ValueKind::Null);
        assert_eq!(arr[1], Value::Bool(false));
        assert_eq!(arr[2], Value::Bool(true));
        assert_eq!(arr[3], Value::Num(123.0));
        assert_eq!(arr[4].as_str_bytes(), Some(b"abc".as_slice()));
    }

    #[test]
    fn parses_nested_object_roundtrip() {
        // Re-parsing the serialized bytes must yield an equal value. An
        // exact byte comparison against the input wouldn't hold here:
        // `ryu` always emits a decimal point (`123` round-trips as
        // `123.0`), unlike the original's `%.17g`-style formatting.
        let text = r#"{"n":null,"f":false,"t":true,"i":123,"s":"abc","a":[1,2,3],"o":{"1":1,"2":2,"3":3}}"#;
        let v = parse_ok(text);
        let reparsed = parse_ok(std::str::from_utf8(&v.to_json_bytes()).unwrap());
        assert_eq!(v, reparsed);
    }

    #[test]
    fn rejects_trailing_comma_in_array() {
        assert!(matches!(
            parse_err("[1,]"),
            ParseError::InvalidValue { .. }
        ));
    }

    #[test]
    fn duplicate_object_keys_are_preserved() {
        let v = parse_ok(r#"{"a":1,"a":2}"#);
        let obj = v.as_obj().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.find(b"a"), Some(&Value::Num(1.0)));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let text = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let opts = ParseOptions::default();
        assert!(matches!(
            parse(text.as_bytes(), &opts),
            Err(ParseError::DepthLimitExceeded { .. })
        ));
    }

    #[test]
    fn array_cleans_up_on_mid_parse_error() {
        assert!(parse("[1, 2, ".as_bytes(), &ParseOptions::default()).is_err());
    }

    #[test]
    fn object_missing_colon_errors() {
        assert!(matches!(parse_err(r#"{"a" 1}"#), ParseError::MissColon { .. }));
    }

    #[test]
    fn object_missing_key_errors() {
        assert!(matches!(parse_err("{1:2}"), ParseError::MissKey { .. }));
    }
}
