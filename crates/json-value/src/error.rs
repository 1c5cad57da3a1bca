use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Every way [`crate::Value::parse`] can fail, each pinned to the byte range
/// that triggered it so callers can render a `miette` diagnostic against the
/// original source text.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("expected a value")]
    #[diagnostic(code(json_value::expect_value))]
    ExpectValue {
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("invalid value")]
    #[diagnostic(code(json_value::invalid_value))]
    InvalidValue {
        #[label("not a valid JSON value")]
        span: SourceSpan,
    },

    #[error("trailing content after the root value")]
    #[diagnostic(code(json_value::root_not_singular))]
    RootNotSingular {
        #[label("unexpected trailing content")]
        span: SourceSpan,
    },

    #[error("number is out of range for a 64-bit float")]
    #[diagnostic(code(json_value::num_too_big))]
    NumTooBig {
        #[label("overflows f64")]
        span: SourceSpan,
    },

    #[error("missing closing quotation mark")]
    #[diagnostic(code(json_value::miss_quotation_mark))]
    MissQuotationMark {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("invalid string escape")]
    #[diagnostic(code(json_value::invalid_string_escape))]
    InvalidStringEscape {
        #[label("not a recognized escape")]
        span: SourceSpan,
    },

    #[error("invalid unescaped control character in string")]
    #[diagnostic(code(json_value::invalid_string_char))]
    InvalidStringChar {
        #[label("control characters must be escaped")]
        span: SourceSpan,
    },

    #[error("invalid \\u hex digits")]
    #[diagnostic(code(json_value::invalid_unicode_hex))]
    InvalidUnicodeHex {
        #[label("expected four hex digits")]
        span: SourceSpan,
    },

    #[error("invalid UTF-16 surrogate pair")]
    #[diagnostic(code(json_value::invalid_unicode_surrogate))]
    InvalidUnicodeSurrogate {
        #[label("lone or mismatched surrogate")]
        span: SourceSpan,
    },

    #[error("expected ',' or ']'")]
    #[diagnostic(code(json_value::miss_comma_or_square_bracket))]
    MissCommaOrSquareBracket {
        #[label("expected ',' or ']' here")]
        span: SourceSpan,
    },

    #[error("expected a string key")]
    #[diagnostic(code(json_value::miss_key))]
    MissKey {
        #[label("object keys must be strings")]
        span: SourceSpan,
    },

    #[error("expected ':' after object key")]
    #[diagnostic(code(json_value::miss_colon))]
    MissColon {
        #[label("expected ':' here")]
        span: SourceSpan,
    },

    #[error("expected ',' or '}}'")]
    #[diagnostic(code(json_value::miss_comma_or_curly_bracket))]
    MissCommaOrCurlyBracket {
        #[label("expected ',' or '}}' here")]
        span: SourceSpan,
    },

    #[error("nesting exceeds the configured depth limit of {limit}")]
    #[diagnostic(
        code(json_value::depth_limit_exceeded),
        help("raise `ParseOptions::max_depth` if this document is legitimately this deep")
    )]
    DepthLimitExceeded {
        limit: usize,
        #[label("exceeds max_depth here")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Byte offset at which this error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::ExpectValue { span }
            | Self::InvalidValue { span }
            | Self::RootNotSingular { span }
            | Self::NumTooBig { span }
            | Self::MissQuotationMark { span }
            | Self::InvalidStringEscape { span }
            | Self::InvalidStringChar { span }
            | Self::InvalidUnicodeHex { span }
            | Self::InvalidUnicodeSurrogate { span }
            | Self::MissCommaOrSquareBracket { span }
            | Self::MissKey { span }
            | Self::MissColon { span }
            | Self::MissCommaOrCurlyBracket { span }
            | Self::DepthLimitExceeded { span, .. } => span.offset(),
        }
    }
}
