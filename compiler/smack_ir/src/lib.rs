//! Smack IR - the runtime data model shared by the reader and evaluator.
//!
//! # Contents
//!
//! - [`Value`]: the closed tagged union every form and runtime datum lives in
//! - [`Environment`]: chained lexical scopes with closure capture
//! - [`Atom`]: process-wide interned keywords
//! - [`EvalError`]: host-level failures that abort a read/eval step
//! - print handlers: where `println` output goes
//!
//! Everything here is `Send + Sync`; spawned tasks share environments and
//! maps with the task that spawned them.

mod atom;
mod environment;
pub mod errors;
mod print_handler;
mod value;

pub use atom::Atom;
pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{
    Arity, ChannelValue, Closure, CoreFn, CoreFunction, FunctionValue, MapEntries, MapValue,
    ParamList, Seq, Symbol, Value,
};
