//! Function application.

use smack_ir::{Closure, CoreFunction, Environment, EvalError, EvalResult, FunctionValue, Value};

use super::eval_nested;

/// Apply `func` to already-evaluated `args`.
///
/// Used by builtins that call back into the language (`go`). The evaluator
/// loop does not come through here for closures, so it can keep their bodies
/// in tail position.
pub fn apply(func: &FunctionValue, args: Vec<Value>, env: &Environment) -> EvalResult {
    match func {
        FunctionValue::Core(core) => apply_core(core, &args, env),
        FunctionValue::User(closure) => {
            let frame = call_frame(closure, args)?;
            eval_nested(&closure.body, &frame)
        }
    }
}

/// Call a builtin. A wrong argument count aborts; any other failure becomes
/// an error value the program can test with `err?`.
#[tracing::instrument(level = "trace", skip_all, fields(builtin = core.name))]
pub(crate) fn apply_core(core: &CoreFunction, args: &[Value], env: &Environment) -> EvalResult {
    core.arity.check(core.name, args.len())?;
    Ok((core.func)(args, env).unwrap_or_else(|err| {
        tracing::trace!(%err, "builtin returned an error value");
        Value::from(err)
    }))
}

/// Bind `args` to the closure's parameters in a fresh frame under its
/// captured environment.
pub(super) fn call_frame(closure: &Closure, args: Vec<Value>) -> Result<Environment, EvalError> {
    tracing::trace!(params = %closure.params_form, argc = args.len(), "apply closure");
    let name = format!("fn {}", closure.params_form);
    closure.params.bind(&name, &closure.env, args)
}
