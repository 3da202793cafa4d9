//! Quasiquote templates.

use smack_ir::errors::{arity_mismatch, syntax_error};
use smack_ir::{Environment, EvalResult, Value};
use smack_stack::ensure_sufficient_stack;

use super::eval_nested;

/// Copy `template`, replacing each `(unquote e)` at any depth with the
/// value of `e`. Splicing is not supported.
pub(super) fn expand(template: &Value, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| match template {
        Value::List(items) => {
            if let Some(Value::Symbol(head)) = items.first() {
                match head.name() {
                    "unquote" => {
                        let [_, expr] = &items[..] else {
                            return Err(arity_mismatch("unquote", "1", items.len() - 1));
                        };
                        return eval_nested(expr, env);
                    }
                    "splice-unquote" => {
                        return Err(syntax_error("splice-unquote is not supported"));
                    }
                    _ => {}
                }
            }
            Ok(Value::list(expand_all(items, env)?))
        }
        Value::Vector(items) => Ok(Value::vector(expand_all(items, env)?)),
        other => Ok(other.clone()),
    })
}

fn expand_all(items: &[Value], env: &Environment) -> Result<Vec<Value>, smack_ir::EvalError> {
    items.iter().map(|item| expand(item, env)).collect()
}
