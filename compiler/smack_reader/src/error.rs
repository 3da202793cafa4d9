//! Reader failures.

use smack_ir::errors::syntax_error;
use smack_ir::EvalError;
use thiserror::Error;

/// Why source text could not be read. Offsets are byte positions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The input ran out while a form was still open.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    /// A closing delimiter with no matching opener.
    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedDelimiter { found: char, offset: usize },

    /// The scanner could not classify the text at `offset`.
    #[error("unrecognized token `{text}` at offset {offset}")]
    InvalidToken { text: String, offset: usize },

    /// Only whitespace and comments.
    #[error("no form to read")]
    Empty,
}

impl From<ReadError> for EvalError {
    fn from(err: ReadError) -> Self {
        syntax_error(err.to_string())
    }
}
