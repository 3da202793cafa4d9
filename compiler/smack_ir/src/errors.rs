//! Host-level evaluation errors.
//!
//! These abort the current read or eval step and are returned to the caller.
//! They are distinct from in-language `Value::Error` values, which builtins
//! produce for recoverable conditions and which the program can inspect
//! with `err?`.
//!
//! Constructor functions are the single import point for building errors:
//!
//! ```text
//! use smack_ir::errors::{unbound_symbol, arity_mismatch};
//! ```

use thiserror::Error;

use crate::value::Value;

/// Result of evaluating a form.
pub type EvalResult = Result<Value, EvalError>;

/// A failure that aborts evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Malformed source text, or a form whose shape the evaluator rejects
    /// before running it.
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// Symbol lookup walked the whole environment chain without a match.
    #[error("unbound symbol: {name}")]
    UnboundSymbol { name: String },

    /// Wrong number of arguments to a builtin, user function, or special form.
    #[error("{name} expects {expected} {}, got {got}", plural(.expected))]
    Arity {
        name: String,
        expected: String,
        got: usize,
    },

    /// A value of the wrong type reached an operation.
    #[error("type error: {message}")]
    Type { message: String },

    /// The head of an application evaluated to something other than a function.
    #[error("not callable: {type_name} value `{rendered}`")]
    NotCallable { type_name: String, rendered: String },
}

fn plural(expected: &str) -> &'static str {
    if expected == "1" {
        "argument"
    } else {
        "arguments"
    }
}

// Syntax

pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalError::Syntax {
        message: message.into(),
    }
}

// Lookup

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
    }
}

// Application

/// `expected` is a human-readable contract such as `"2"` or `"at least 1"`.
pub fn arity_mismatch(name: &str, expected: impl Into<String>, got: usize) -> EvalError {
    EvalError::Arity {
        name: name.to_string(),
        expected: expected.into(),
        got,
    }
}

pub fn not_callable(value: &Value) -> EvalError {
    EvalError::NotCallable {
        type_name: value.type_name().to_string(),
        rendered: value.to_string(),
    }
}

// Types

pub fn type_error(message: impl Into<String>) -> EvalError {
    EvalError::Type {
        message: message.into(),
    }
}

/// `value` was used where a `expected` was required.
pub fn expected_type(expected: &str, value: &Value) -> EvalError {
    type_error(format!(
        "expected {expected}, got {} `{value}`",
        value.type_name()
    ))
}
