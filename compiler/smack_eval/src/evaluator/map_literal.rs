//! Map literal realization.
//!
//! The reader leaves `{k v ...}` as raw forms. The first evaluation builds
//! the entries and installs them in the shared cell, so every later
//! evaluation of the same node (and every alias of it) sees one map.

use smack_ir::errors::syntax_error;
use smack_ir::{Environment, EvalResult, MapEntries, MapValue, Value};

use super::eval_nested;

pub(super) fn realize(map: &MapValue, env: &Environment) -> EvalResult {
    // No lock is held while evaluating: values may themselves be map
    // literals or touch this map. If two evaluations race, the first
    // installed result wins.
    let Some(forms) = map.literal_forms() else {
        return Ok(Value::Map(map.clone()));
    };
    if forms.len() % 2 != 0 {
        return Err(syntax_error(format!(
            "map literal needs an even number of forms, got {}",
            forms.len()
        )));
    }

    let mut entries = MapEntries::default();
    for pair in forms.chunks_exact(2) {
        let key = pair[0].key_name()?.to_string();
        let value = eval_nested(&pair[1], env)?;
        entries.insert(key, value);
    }
    if !map.realize(entries) {
        tracing::trace!("map literal already realized");
    }
    Ok(Value::Map(map.clone()))
}
