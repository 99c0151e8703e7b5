use thiserror::Error;
use typed_json_caret::CaretError;

/// Structural decode failures.
///
/// Grammar violations carry the byte offset at which the expectation
/// failed; literal-parse failures come through [`CaretError`] unchanged.
/// The first error raised anywhere in the recursion unwinds the whole
/// decode; partially-built records and sequences are discarded, never
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("'{{' - expected at {0}")]
    ObjectOpenExpected(usize),

    #[error("'}}' - expected at {0}")]
    ObjectCloseExpected(usize),

    #[error("':' - expected at {0}")]
    ObjectColonMissing(usize),

    #[error("unknown field '{key}' at {pos}")]
    ObjectUnknownField { key: String, pos: usize },

    #[error("'[' - expected at {0}")]
    ArrayOpenExpected(usize),

    #[error("']' - expected at {0}")]
    ArrayCloseExpected(usize),

    #[error(transparent)]
    Caret(#[from] CaretError),
}
