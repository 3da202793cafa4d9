//! Special forms: lists whose head symbol the evaluator handles itself.

use smack_ir::errors::{arity_mismatch, syntax_error};
use smack_ir::{Environment, EvalError, FunctionValue, ParamList, Value};

use super::{eval_nested, quasiquote};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SpecialForm {
    Def,
    Let,
    Do,
    If,
    Fn,
    Quote,
    Quasiquote,
}

/// What a special form hands back to the loop.
pub(super) enum Step {
    /// Evaluation finished with this value.
    Done(Value),
    /// Continue with this form in this environment (tail position).
    Tail(Value, Environment),
}

impl SpecialForm {
    pub(super) fn from_head(head: &Value) -> Option<Self> {
        let Value::Symbol(sym) = head else {
            return None;
        };
        match sym.name() {
            "def" => Some(SpecialForm::Def),
            "let" => Some(SpecialForm::Let),
            "do" => Some(SpecialForm::Do),
            "if" => Some(SpecialForm::If),
            "fn" => Some(SpecialForm::Fn),
            "quote" => Some(SpecialForm::Quote),
            "quasiquote" => Some(SpecialForm::Quasiquote),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SpecialForm::Def => "def",
            SpecialForm::Let => "let",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::Fn => "fn",
            SpecialForm::Quote => "quote",
            SpecialForm::Quasiquote => "quasiquote",
        }
    }

    /// `items` is the whole form, head included.
    pub(super) fn eval(self, items: &[Value], env: &Environment) -> Result<Step, EvalError> {
        let args = &items[1..];
        match self {
            SpecialForm::Def => {
                let [name, expr] = self.expect_args::<2>(args)?;
                let name = name
                    .as_symbol()
                    .map_err(|_| syntax_error(format!("def needs a symbol name, got `{name}`")))?;
                let value = eval_nested(expr, env)?;
                env.set(name.name(), value.clone());
                Ok(Step::Done(value))
            }
            SpecialForm::Let => {
                let [bindings, body] = self.expect_args::<2>(args)?;
                let frame = bind_let(bindings, env)?;
                Ok(Step::Tail(body.clone(), frame))
            }
            SpecialForm::Do => match args.split_last() {
                None => Ok(Step::Done(Value::nil())),
                Some((last, init)) => {
                    for form in init {
                        eval_nested(form, env)?;
                    }
                    Ok(Step::Tail(last.clone(), env.clone()))
                }
            },
            SpecialForm::If => {
                let (cond, then, otherwise) = match args {
                    [cond, then] => (cond, then, None),
                    [cond, then, otherwise] => (cond, then, Some(otherwise)),
                    _ => return Err(arity_mismatch("if", "2 or 3", args.len())),
                };
                if eval_nested(cond, env)?.is_truthy() {
                    Ok(Step::Tail(then.clone(), env.clone()))
                } else {
                    match otherwise {
                        Some(branch) => Ok(Step::Tail(branch.clone(), env.clone())),
                        None => Ok(Step::Done(Value::nil())),
                    }
                }
            }
            SpecialForm::Fn => {
                let [params_form, body] = self.expect_args::<2>(args)?;
                let params = ParamList::from_form(params_form)?;
                Ok(Step::Done(Value::Function(FunctionValue::closure(
                    params,
                    params_form.clone(),
                    body.clone(),
                    env.clone(),
                ))))
            }
            SpecialForm::Quote => {
                let [form] = self.expect_args::<1>(args)?;
                Ok(Step::Done(form.clone()))
            }
            SpecialForm::Quasiquote => {
                let [template] = self.expect_args::<1>(args)?;
                Ok(Step::Done(quasiquote::expand(template, env)?))
            }
        }
    }

    fn expect_args<'a, const N: usize>(
        self,
        args: &'a [Value],
    ) -> Result<&'a [Value; N], EvalError> {
        args.try_into()
            .map_err(|_| arity_mismatch(self.name(), N.to_string(), args.len()))
    }
}

/// Build the `let` frame. Each right-hand side is evaluated in the frame
/// as it grows, so later bindings see earlier ones.
fn bind_let(bindings: &Value, env: &Environment) -> Result<Environment, EvalError> {
    let pairs = bindings
        .as_seq()
        .map_err(|_| syntax_error(format!("let bindings must be a vector, got `{bindings}`")))?;
    if pairs.len() % 2 != 0 {
        return Err(syntax_error("let bindings need an even number of forms"));
    }

    let frame = Environment::with_parent(env);
    for pair in pairs.chunks_exact(2) {
        let name = pair[0].as_symbol().map_err(|_| {
            syntax_error(format!(
                "let binding name must be a symbol, got `{}`",
                pair[0]
            ))
        })?;
        let value = eval_nested(&pair[1], &frame)?;
        frame.set(name.name(), value);
    }
    Ok(frame)
}
