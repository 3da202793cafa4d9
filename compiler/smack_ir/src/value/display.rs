//! Human-facing rendering, used by the driver to show results.
//!
//! Only numbers, booleans, atoms, symbols and lists of those read back to
//! an equal value; strings are shown without quotes. A closure renders as its
//! parameter form and body, which is also what `=` compares closures by.

use std::fmt::{self, Write};

use smack_stack::ensure_sufficient_stack;

use super::{FunctionValue, MapValue, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("<none>"),
            // Shortest form that parses back to the same f64
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::List(items) | Value::Vector(items) => {
                ensure_sufficient_stack(|| write_seq(f, items))
            }
            Value::Map(map) => ensure_sufficient_stack(|| write_map(f, map)),
            Value::Symbol(sym) => f.write_str(sym.name()),
            Value::Atom(atom) => f.write_str(atom.name()),
            Value::Channel(_) => f.write_str("<channel>"),
            Value::Error(message) => f.write_str(message),
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Core(core) => write!(f, "<core fn {}>", core.name),
            FunctionValue::User(closure) => {
                write!(f, "<fn {} {}>", closure.params_form, closure.body)
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(')')
}

/// Realized maps print sorted by key so output is stable across runs.
fn write_map(f: &mut fmt::Formatter<'_>, map: &MapValue) -> fmt::Result {
    let parts: Vec<String> = if let Some(entries) = map.snapshot() {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
            .iter()
            .map(|(key, value)| format!("{key} {value}"))
            .collect()
    } else {
        map.literal_forms()
            .map(|forms| forms.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    };
    write!(f, "{{{}}}", parts.join(" "))
}
