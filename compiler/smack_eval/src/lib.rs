//! Smack Eval - the tree-walking evaluator and its core library.
//!
//! # Architecture
//!
//! - [`eval`]: one trampolined loop over a form/environment pair. `let`,
//!   `do`, `if` and calls to user functions in tail position replace the
//!   pair instead of recursing, so tail recursion runs in constant native
//!   stack.
//! - Special forms (`def`, `let`, `do`, `if`, `fn`, `quote`, `quasiquote`)
//!   are recognized by head symbol before ordinary application.
//! - [`new_core_environment`]: a root environment with every builtin bound.
//!   Builtins turn their own failures into in-language error values; only
//!   arity violations escape as host-level errors.
//! - `go` runs a function on its own thread; `send!`/`recv!` meet on an
//!   unbuffered channel.

mod builtins;
mod evaluator;

pub use builtins::{core_function_names, new_core_environment, new_core_environment_with_printer};
pub use evaluator::{apply, eval, eval_str};
pub use smack_ir::{EvalError, EvalResult, Environment, Value};
