//! Lists and vectors.

use smack_ir::{Environment, EvalResult, Value};

pub(super) fn list(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

pub(super) fn vector(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::vector(args.to_vec()))
}

pub(super) fn is_list(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(matches!(args, [Value::List(_)])))
}

pub(super) fn is_vector(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(matches!(args, [Value::Vector(_)])))
}

/// Element count of a list, vector or map.
fn count(value: &Value) -> Option<usize> {
    match value {
        Value::List(items) | Value::Vector(items) => Some(items.len()),
        Value::Map(map) => Some(map.len()),
        _ => None,
    }
}

/// `(len x)`: the element count, or `-1` if `x` is not a collection.
// Collection sizes stay far below 2^53
#[allow(clippy::cast_precision_loss)]
pub(super) fn len(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::number(
        args.first().and_then(count).map_or(-1.0, |n| n as f64),
    ))
}

pub(super) fn is_empty(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(args.first().and_then(count) == Some(0)))
}

/// `(cons x seq)`: a new list with `x` in front.
pub(super) fn cons(args: &[Value], _env: &Environment) -> EvalResult {
    let [head, tail] = super::exact("cons", args)?;
    let tail = tail.as_seq()?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head.clone());
    items.extend_from_slice(tail);
    Ok(Value::list(items))
}

pub(super) fn concat(args: &[Value], _env: &Environment) -> EvalResult {
    let mut items = Vec::new();
    for arg in args {
        items.extend_from_slice(arg.as_seq()?);
    }
    Ok(Value::list(items))
}
