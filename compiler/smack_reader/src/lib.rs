//! Smack Reader - turns source text into unevaluated forms.
//!
//! Reading happens in two stages:
//! - [`tokenize`]: a logos-derived scanner splits text into punctuation,
//!   string, and bare-word tokens, dropping whitespace, commas and comments
//! - [`read`] / [`read_all`]: recursive descent over the tokens builds
//!   `Value` forms (lists, vectors, map literals, and scalar atoms)
//!
//! The reader never evaluates anything. Map literals are stored as their
//! flat key/value forms; the evaluator realizes them on first use.

mod error;
mod escape;
mod lexer;
mod reader;

pub use error::ReadError;
pub use lexer::{tokenize, Token, TokenKind};
pub use reader::{read, read_all};
