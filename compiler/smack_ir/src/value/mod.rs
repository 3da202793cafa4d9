//! Runtime values.
//!
//! [`Value`] is both the reader's syntax tree and the evaluator's data: a
//! program is a `Value` before evaluation and produces one after. Aggregates
//! are reference counted, so cloning a `Value` is cheap and never copies
//! element storage.
//!
//! Every consumer matches exhaustively or goes through one of the typed
//! `as_*` extractors, which return a `TypeError` instead of trusting the tag.

mod channel;
mod display;
mod equality;
mod function;
mod map;
mod seq;

use std::sync::Arc;

use crate::atom::Atom;
use crate::errors::{expected_type, EvalError};

pub use channel::ChannelValue;
pub use function::{Arity, Closure, CoreFn, CoreFunction, FunctionValue, ParamList};
pub use map::{MapEntries, MapValue};
pub use seq::Seq;

/// A symbol: a name resolved through the environment chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Symbol(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The single tagged union for all data.
#[derive(Clone, Debug)]
pub enum Value {
    /// "No value": the result of a failed lookup. Distinct from nil.
    None,
    Number(f64),
    String(Arc<str>),
    Boolean(bool),
    /// Also the representation of nil (the empty list).
    List(Seq),
    Vector(Seq),
    Map(MapValue),
    Symbol(Symbol),
    Atom(Atom),
    Channel(ChannelValue),
    /// An in-language error produced by a builtin.
    Error(Arc<str>),
    Function(FunctionValue),
}

impl Value {
    /// The canonical nil: an empty list.
    pub fn nil() -> Self {
        Value::List(Seq::new(Vec::new()))
    }

    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Arc::from(s.as_ref()))
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Seq::new(items))
    }

    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Seq::new(items))
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    pub fn atom(name: &str) -> Self {
        Value::Atom(Atom::intern(name))
    }

    pub fn error(message: impl AsRef<str>) -> Self {
        Value::Error(Arc::from(message.as_ref()))
    }

    /// Name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::List(_) => "List",
            Value::Vector(_) => "Vector",
            Value::Map(_) => "Map",
            Value::Symbol(_) => "Symbol",
            Value::Atom(_) => "Atom",
            Value::Channel(_) => "Channel",
            Value::Error(_) => "Error",
            Value::Function(_) => "Function",
        }
    }

    /// Truthiness as `if` sees it.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(sym) => !sym.name().is_empty(),
            Value::Boolean(b) => *b,
            Value::List(items) | Value::Vector(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            // Functions always carry a callable body (native or closure)
            Value::Function(_) | Value::Atom(_) | Value::Channel(_) | Value::Error(_) => true,
            Value::None => false,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    // Typed extraction

    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(expected_type("a number", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str, EvalError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(expected_type("a string", other)),
        }
    }

    pub fn as_symbol(&self) -> Result<&Symbol, EvalError> {
        match self {
            Value::Symbol(sym) => Ok(sym),
            other => Err(expected_type("a symbol", other)),
        }
    }

    /// Elements of a list or vector.
    pub fn as_seq(&self) -> Result<&[Value], EvalError> {
        match self {
            Value::List(items) | Value::Vector(items) => Ok(&items[..]),
            other => Err(expected_type("a list or vector", other)),
        }
    }

    pub fn as_map(&self) -> Result<&MapValue, EvalError> {
        match self {
            Value::Map(map) => Ok(map),
            other => Err(expected_type("a map", other)),
        }
    }

    pub fn as_function(&self) -> Result<&FunctionValue, EvalError> {
        match self {
            Value::Function(func) => Ok(func),
            other => Err(expected_type("a function", other)),
        }
    }

    pub fn as_channel(&self) -> Result<&ChannelValue, EvalError> {
        match self {
            Value::Channel(chan) => Ok(chan),
            other => Err(expected_type("a channel", other)),
        }
    }

    /// The textual name used for map keys. Symbols, strings and atoms all
    /// coerce, so `:a`, `a` and `"a"` address the same entry.
    pub fn key_name(&self) -> Result<&str, EvalError> {
        match self {
            Value::Symbol(sym) => Ok(sym.name()),
            Value::String(s) => Ok(s),
            Value::Atom(atom) => Ok(atom.name()),
            other => Err(expected_type("a symbol, string or atom key", other)),
        }
    }
}

impl From<EvalError> for Value {
    /// Demote a host-level failure to an in-language error value.
    fn from(err: EvalError) -> Self {
        Value::error(err.to_string())
    }
}
