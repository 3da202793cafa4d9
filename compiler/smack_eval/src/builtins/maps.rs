//! Map construction, lookup and in-place update.

use smack_ir::errors::{type_error, EvalError};
use smack_ir::{Environment, EvalResult, MapEntries, MapValue, Value};

/// The map argument, which must already be realized.
fn realized(value: &Value) -> Result<&MapValue, EvalError> {
    let map = value.as_map()?;
    if !map.is_realized() {
        return Err(type_error("map literal has not been evaluated"));
    }
    Ok(map)
}

pub(super) fn hash_map(args: &[Value], _env: &Environment) -> EvalResult {
    if args.len() % 2 != 0 {
        return Err(type_error("hash-map needs an even number of arguments"));
    }
    let mut entries = MapEntries::default();
    for pair in args.chunks_exact(2) {
        entries.insert(pair[0].key_name()?.to_string(), pair[1].clone());
    }
    Ok(Value::Map(MapValue::from_entries(entries)))
}

pub(super) fn is_map(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::boolean(matches!(args, [Value::Map(_)])))
}

/// `(mget m k)`: the stored value, or `None` if `k` is absent.
pub(super) fn mget(args: &[Value], _env: &Environment) -> EvalResult {
    let [map, key] = super::exact("mget", args)?;
    let map = realized(map)?;
    Ok(map.get(key.key_name()?).unwrap_or(Value::None))
}

/// `(mset! m k v)`: store `v` under `k` in place and return `v`.
pub(super) fn mset(args: &[Value], _env: &Environment) -> EvalResult {
    let [map, key, value] = super::exact("mset!", args)?;
    let map = realized(map)?;
    if !map.insert(key.key_name()?.to_string(), value.clone()) {
        return Err(type_error("map literal has not been evaluated"));
    }
    Ok(value.clone())
}
