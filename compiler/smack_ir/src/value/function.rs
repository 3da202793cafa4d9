//! Function values: native core functions and user closures.

use std::fmt;
use std::sync::Arc;

use super::{Symbol, Value};
use crate::environment::Environment;
use crate::errors::{arity_mismatch, syntax_error, EvalError, EvalResult};

/// Native procedure over already-evaluated arguments.
///
/// The environment is the caller's; only `eval` looks at it (to find the
/// root). Errors returned here are converted to in-language error values at
/// the call boundary, never propagated.
pub type CoreFn = fn(&[Value], &Environment) -> EvalResult;

/// Argument count contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    pub fn accepts(self, got: usize) -> bool {
        match self {
            Arity::Exact(n) => got == n,
            Arity::AtLeast(n) => got >= n,
            Arity::Any => true,
        }
    }

    /// `Ok` if `got` arguments satisfy the contract, else an `ArityError`
    /// naming `name`.
    pub fn check(self, name: &str, got: usize) -> Result<(), EvalError> {
        if self.accepts(got) {
            return Ok(());
        }
        let expected = match self {
            Arity::Exact(n) => n.to_string(),
            Arity::AtLeast(n) => format!("at least {n}"),
            Arity::Any => "any number of".to_string(),
        };
        Err(arity_mismatch(name, expected, got))
    }
}

/// A builtin bound in the core environment.
#[derive(Clone, Copy)]
pub struct CoreFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: CoreFn,
}

impl CoreFunction {
    pub const fn new(name: &'static str, arity: Arity, func: CoreFn) -> Self {
        CoreFunction { name, arity, func }
    }
}

/// Parsed parameter form: `[a b]` or `[a b & rest]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamList {
    pub fixed: Vec<Symbol>,
    pub rest: Option<Symbol>,
}

impl ParamList {
    /// Parse a list or vector of symbols, with an optional trailing
    /// `& name` collecting the remaining arguments.
    pub fn from_form(form: &Value) -> Result<Self, EvalError> {
        let items = form
            .as_seq()
            .map_err(|_| syntax_error(format!("fn parameters must be a vector, got `{form}`")))?;

        let mut fixed = Vec::with_capacity(items.len());
        let mut iter = items.iter();
        while let Some(item) = iter.next() {
            let sym = item
                .as_symbol()
                .map_err(|_| syntax_error(format!("fn parameter must be a symbol, got `{item}`")))?;
            if sym.name() != "&" {
                fixed.push(sym.clone());
                continue;
            }
            let rest = match (iter.next(), iter.next()) {
                (Some(Value::Symbol(rest)), None) => rest.clone(),
                _ => return Err(syntax_error("`&` must be followed by exactly one symbol")),
            };
            return Ok(ParamList {
                fixed,
                rest: Some(rest),
            });
        }
        Ok(ParamList { fixed, rest: None })
    }

    pub fn arity(&self) -> Arity {
        match self.rest {
            Some(_) => Arity::AtLeast(self.fixed.len()),
            None => Arity::Exact(self.fixed.len()),
        }
    }

    /// Create the call frame for these parameters under `parent`.
    ///
    /// Checks arity first; the frame constructor itself never fails.
    pub fn bind(
        &self,
        name: &str,
        parent: &Environment,
        mut args: Vec<Value>,
    ) -> Result<Environment, EvalError> {
        self.arity().check(name, args.len())?;
        let rest = args.split_off(self.fixed.len());
        let frame = Environment::with_bindings(parent, &self.fixed, args);
        if let Some(rest_name) = &self.rest {
            frame.set(rest_name.name(), Value::list(rest));
        }
        Ok(frame)
    }
}

/// A user function: parameters, unevaluated body, and the environment it
/// was defined in.
pub struct Closure {
    pub params: ParamList,
    /// The literal parameter form, kept for printing.
    pub params_form: Value,
    pub body: Value,
    pub env: Environment,
}

#[derive(Clone)]
pub enum FunctionValue {
    Core(CoreFunction),
    User(Arc<Closure>),
}

impl FunctionValue {
    pub fn closure(params: ParamList, params_form: Value, body: Value, env: Environment) -> Self {
        FunctionValue::User(Arc::new(Closure {
            params,
            params_form,
            body,
            env,
        }))
    }

    /// Equal when the printed forms match: core functions by bound name,
    /// closures by parameter form and body. The captured environment is not
    /// compared.
    pub fn same_function(&self, other: &FunctionValue) -> bool {
        match (self, other) {
            (FunctionValue::Core(a), FunctionValue::Core(b)) => a.name == b.name,
            (FunctionValue::User(a), FunctionValue::User(b)) => {
                Arc::ptr_eq(a, b) || self.to_string() == other.to_string()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Core(core) => write!(f, "CoreFn({})", core.name),
            FunctionValue::User(closure) => {
                write!(f, "Closure({} {})", closure.params_form, closure.body)
            }
        }
    }
}
