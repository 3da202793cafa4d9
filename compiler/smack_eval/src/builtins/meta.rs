use smack_ir::{Environment, EvalResult, Value};

use crate::evaluator::eval_nested;

/// `(eval form)`: evaluate in the root environment, not the caller's.
pub(super) fn eval(args: &[Value], env: &Environment) -> EvalResult {
    let [form] = super::exact("eval", args)?;
    eval_nested(form, &env.root())
}

pub(super) fn is_error(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(matches!(args, [Value::Error(_)])))
}

pub(super) fn not(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(!args.first().is_some_and(Value::is_truthy)))
}
