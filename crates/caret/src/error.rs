use thiserror::Error;

/// Literal-parse failures reported by [`Caret`](crate::Caret) parsers.
///
/// Every variant carries the byte offset at which the offending literal
/// starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaretError {
    #[error("malformed int32 literal at {0}")]
    InvalidInt32(usize),

    #[error("malformed int64 literal at {0}")]
    InvalidInt64(usize),

    #[error("malformed float32 literal at {0}")]
    InvalidFloat32(usize),

    #[error("malformed float64 literal at {0}")]
    InvalidFloat64(usize),

    #[error("malformed boolean literal at {0}")]
    InvalidBoolean(usize),

    #[error("'\"' - expected at {0}")]
    StringOpenExpected(usize),

    #[error("unterminated string at {0}")]
    UnterminatedString(usize),

    #[error("invalid escape sequence in string at {0}")]
    InvalidEscape(usize),

    #[error("invalid UTF-8 in string at {0}")]
    InvalidUtf8(usize),
}
