//! Strings, source text and output.

use std::fs;

use smack_ir::{Environment, EvalResult, Value};

/// `(read-str s)`: the first form in `s`, unevaluated.
pub(super) fn read_str(args: &[Value], _env: &Environment) -> EvalResult {
    let [source] = super::exact("read-str", args)?;
    Ok(smack_reader::read(source.as_str()?)?)
}

/// `(slurp path)`: the file's contents as a string.
pub(super) fn slurp(args: &[Value], _env: &Environment) -> EvalResult {
    let [path] = super::exact("slurp", args)?;
    let path = path.as_str()?;
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Value::string(contents)),
        Err(err) => Ok(Value::error(format!("cannot read {path}: {err}"))),
    }
}

fn joined(args: &[Value], separator: &str) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&arg.to_string());
    }
    out
}

pub(super) fn concat_str(args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::string(joined(args, "")))
}

/// Print the arguments separated by spaces, then a newline.
pub(super) fn println(args: &[Value], env: &Environment) -> EvalResult {
    env.printer().println(&joined(args, " "));
    Ok(Value::nil())
}
