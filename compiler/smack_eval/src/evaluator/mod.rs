//! The evaluator loop.

mod apply;
mod map_literal;
mod quasiquote;
mod special_forms;

use smack_ir::errors::{not_callable, unbound_symbol};
use smack_ir::{Environment, EvalResult, FunctionValue, Value};
use smack_stack::ensure_sufficient_stack;

pub use apply::apply;
use apply::apply_core;

use special_forms::{SpecialForm, Step};

/// Evaluate `form` in `env`.
///
/// Host-level failures abort evaluation and are returned unchanged; there
/// is no partial result.
pub fn eval(form: &Value, env: &Environment) -> EvalResult {
    let mut form = form.clone();
    let mut env = env.clone();

    loop {
        let items = match &form {
            Value::List(items) if !items.is_empty() => Some(items.clone()),
            Value::Symbol(sym) => {
                return env
                    .lookup(sym.name())
                    .ok_or_else(|| unbound_symbol(sym.name()));
            }
            Value::Map(map) => return map_literal::realize(map, &env),
            _ => None,
        };
        // Everything else, nil included, evaluates to itself
        let Some(items) = items else {
            return Ok(form);
        };

        if let Some(special) = SpecialForm::from_head(&items[0]) {
            tracing::trace!(?special, "special form");
            match special.eval(&items, &env)? {
                Step::Done(value) => return Ok(value),
                Step::Tail(next, next_env) => {
                    form = next;
                    env = next_env;
                    continue;
                }
            }
        }

        let callee = eval_nested(&items[0], &env)?;
        let args = items[1..]
            .iter()
            .map(|arg| eval_nested(arg, &env))
            .collect::<Result<Vec<_>, _>>()?;

        match callee {
            // Builtins are leaves: nothing to loop into
            Value::Function(FunctionValue::Core(core)) => return apply_core(&core, &args, &env),
            Value::Function(FunctionValue::User(closure)) => {
                env = apply::call_frame(&closure, args)?;
                form = closure.body.clone();
            }
            other => return Err(not_callable(&other)),
        }
    }
}

/// Evaluate a form in non-tail position.
pub(crate) fn eval_nested(form: &Value, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| eval(form, env))
}

/// Read and evaluate every form in `source`, returning the last result
/// (nil when there are none).
pub fn eval_str(source: &str, env: &Environment) -> EvalResult {
    let forms = smack_reader::read_all(source)?;
    let mut result = Value::nil();
    for form in &forms {
        result = eval(form, env)?;
    }
    Ok(result)
}
