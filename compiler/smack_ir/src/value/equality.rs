//! Structural equality, as the `=` builtin sees it.
//!
//! Comparison is by tag, with one exception: a list and a vector holding
//! equal elements are equal. Maps are equal when they have the same key set
//! and equal values under every key; an unrealized literal only equals
//! itself.

use smack_stack::ensure_sufficient_stack;

use super::{MapValue, Value};

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| values_equal(self, other))
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::None, Value::None) => true,
        #[allow(clippy::float_cmp)]
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) | (Value::Error(a), Value::Error(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (
            Value::List(a) | Value::Vector(a),
            Value::List(b) | Value::Vector(b),
        ) => a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y),
        (Value::Map(a), Value::Map(b)) => maps_equal(a, b),
        (Value::Symbol(a), Value::Symbol(b)) => a == b,
        (Value::Atom(a), Value::Atom(b)) => a == b,
        (Value::Channel(a), Value::Channel(b)) => a.ptr_eq(b),
        (Value::Function(a), Value::Function(b)) => a.same_function(b),
        _ => false,
    }
}

fn maps_equal(a: &MapValue, b: &MapValue) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    // Snapshots, so no lock is held while comparing nested values
    match (a.snapshot(), b.snapshot()) {
        (Some(left), Some(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| value == other))
        }
        _ => false,
    }
}
