//! Equality and numeric ordering.

use smack_ir::{Environment, EvalResult, Value};

pub(super) fn equal(args: &[Value], _env: &Environment) -> EvalResult {
    let [a, b] = super::exact("=", args)?;
    Ok(Value::boolean(a == b))
}

/// Orderings are false unless both operands are numbers.
fn ordering(args: &[Value], test: fn(f64, f64) -> bool) -> EvalResult {
    Ok(Value::boolean(match args {
        [Value::Number(a), Value::Number(b)] => test(*a, *b),
        _ => false,
    }))
}

pub(super) fn less(args: &[Value], _env: &Environment) -> EvalResult {
    ordering(args, |a, b| a < b)
}

pub(super) fn less_equal(args: &[Value], _env: &Environment) -> EvalResult {
    ordering(args, |a, b| a <= b)
}

pub(super) fn greater(args: &[Value], _env: &Environment) -> EvalResult {
    ordering(args, |a, b| a > b)
}

pub(super) fn greater_equal(args: &[Value], _env: &Environment) -> EvalResult {
    ordering(args, |a, b| a >= b)
}
