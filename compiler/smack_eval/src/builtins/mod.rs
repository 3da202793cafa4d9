//! The core library: native functions bound in every root environment.
//!
//! Each builtin receives its arguments already evaluated. The table below
//! fixes its arity; the evaluator checks that before the call and raises an
//! `ArityError` on mismatch. Anything else a builtin reports as `Err` is
//! turned into an in-language error value at the call boundary.

mod arithmetic;
mod collections;
mod compare;
mod concurrency;
mod maps;
mod meta;
mod text;

use smack_ir::errors::{arity_mismatch, EvalError};
use smack_ir::{
    stdout_handler, Arity, CoreFunction, Environment, FunctionValue, SharedPrintHandler, Value,
};

/// Every builtin, in binding order.
const CORE_FUNCTIONS: &[CoreFunction] = &[
    // arithmetic
    CoreFunction::new("+", Arity::Any, arithmetic::add),
    CoreFunction::new("-", Arity::AtLeast(1), arithmetic::sub),
    CoreFunction::new("*", Arity::Any, arithmetic::mul),
    CoreFunction::new("/", Arity::AtLeast(1), arithmetic::div),
    // comparison
    CoreFunction::new("=", Arity::Exact(2), compare::equal),
    CoreFunction::new("<", Arity::Exact(2), compare::less),
    CoreFunction::new("<=", Arity::Exact(2), compare::less_equal),
    CoreFunction::new(">", Arity::Exact(2), compare::greater),
    CoreFunction::new(">=", Arity::Exact(2), compare::greater_equal),
    // sequences
    CoreFunction::new("list", Arity::Any, collections::list),
    CoreFunction::new("list?", Arity::Exact(1), collections::is_list),
    CoreFunction::new("vector", Arity::Any, collections::vector),
    CoreFunction::new("vector?", Arity::Exact(1), collections::is_vector),
    CoreFunction::new("empty?", Arity::Exact(1), collections::is_empty),
    CoreFunction::new("len", Arity::Exact(1), collections::len),
    CoreFunction::new("cons", Arity::Exact(2), collections::cons),
    CoreFunction::new("concat", Arity::Any, collections::concat),
    // maps
    CoreFunction::new("hash-map", Arity::Any, maps::hash_map),
    CoreFunction::new("map?", Arity::Exact(1), maps::is_map),
    CoreFunction::new("mget", Arity::Exact(2), maps::mget),
    CoreFunction::new("mset!", Arity::Exact(3), maps::mset),
    // tasks and channels
    CoreFunction::new("chan", Arity::Exact(0), concurrency::chan),
    CoreFunction::new("go", Arity::AtLeast(1), concurrency::go),
    CoreFunction::new("send!", Arity::Exact(2), concurrency::send),
    CoreFunction::new("recv!", Arity::Exact(1), concurrency::recv),
    // text and files
    CoreFunction::new("read-str", Arity::Exact(1), text::read_str),
    CoreFunction::new("slurp", Arity::Exact(1), text::slurp),
    CoreFunction::new("str", Arity::Any, text::concat_str),
    CoreFunction::new("println", Arity::Any, text::println),
    // evaluation and errors
    CoreFunction::new("eval", Arity::Exact(1), meta::eval),
    CoreFunction::new("err?", Arity::Exact(1), meta::is_error),
    CoreFunction::new("not", Arity::Exact(1), meta::not),
];

/// A root environment with every builtin bound, printing to stdout.
pub fn new_core_environment() -> Environment {
    new_core_environment_with_printer(stdout_handler())
}

/// A root environment with every builtin bound, sending `println` output
/// to `printer`.
pub fn new_core_environment_with_printer(printer: SharedPrintHandler) -> Environment {
    let env = Environment::with_printer(printer);
    for core in CORE_FUNCTIONS {
        env.set(core.name, Value::Function(FunctionValue::Core(*core)));
    }
    tracing::debug!(count = CORE_FUNCTIONS.len(), "core environment ready");
    env
}

/// The arguments of a fixed-arity builtin as an array. Calls through the
/// evaluator are already checked; a direct call with the wrong count gets the
/// same `ArityError`.
fn exact<'a, const N: usize>(name: &str, args: &'a [Value]) -> Result<&'a [Value; N], EvalError> {
    args.try_into().map_err(|_| arity_mismatch(name, N.to_string(), args.len()))
}

/// Names bound by [`new_core_environment`], in binding order.
pub fn core_function_names() -> impl Iterator<Item = &'static str> {
    CORE_FUNCTIONS.iter().map(|core| core.name)
}
