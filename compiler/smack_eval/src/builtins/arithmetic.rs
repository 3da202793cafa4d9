//! Numeric folds.

use smack_ir::{Environment, EvalError, EvalResult, Value};

fn numbers(args: &[Value]) -> Result<Vec<f64>, EvalError> {
    args.iter().map(Value::as_number).collect()
}

pub(super) fn add(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::number(numbers(args)?.into_iter().sum()))
}

pub(super) fn mul(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::number(numbers(args)?.into_iter().product()))
}

/// `(- x)` negates; `(- a b c)` is `a - b - c`.
pub(super) fn sub(args: &[Value], _env: &Environment) -> EvalResult {
    let ns = numbers(args)?;
    Ok(Value::number(match ns.as_slice() {
        [] => 0.0,
        [n] => -n,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, n| acc - n),
    }))
}

/// `(/ x)` is the reciprocal; `(/ a b c)` is `a / b / c`. Division by zero
/// follows IEEE 754.
pub(super) fn div(args: &[Value], _env: &Environment) -> EvalResult {
    let ns = numbers(args)?;
    Ok(Value::number(match ns.as_slice() {
        [] => 1.0,
        [n] => 1.0 / n,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, n| acc / n),
    }))
}
