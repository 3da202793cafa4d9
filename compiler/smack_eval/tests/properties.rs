//! End-to-end behavior of the reader, evaluator and core library together.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smack_eval::{eval, eval_str, new_core_environment, Environment, EvalError, Value};

fn run(env: &Environment, source: &str) -> Value {
    eval_str(source, env).expect("evaluation failed")
}

#[test]
fn arithmetic_folds() {
    let env = new_core_environment();
    assert_eq!(run(&env, "(+ 1 2 3)"), Value::number(6.0));
    assert_eq!(run(&env, "(- 10 3 2)"), Value::number(5.0));
    assert_eq!(run(&env, "(/ 2)"), Value::number(0.5));
}

#[test]
fn structural_equality() {
    let env = new_core_environment();
    assert_eq!(run(&env, "(= (list 1 2) (list 1 2))"), Value::boolean(true));
    assert_eq!(run(&env, "(= (list 1 2) [1 2])"), Value::boolean(true));
    assert_eq!(run(&env, "(= 1 \"1\")"), Value::boolean(false));
}

proptest! {
    #[test]
    fn printed_numbers_read_back(
        n in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let printed = Value::number(n).to_string();
        let reread = smack_reader::read(&printed).expect("number should read back");
        prop_assert_eq!(&reread, &Value::number(n), "{}", printed);
        prop_assert_eq!(eval(&reread, &new_core_environment()), Ok(Value::number(n)));
    }
}

fn nested(depth: usize, open: &str, inner: &str, close: &str) -> String {
    format!("{}{inner}{}", open.repeat(depth), close.repeat(depth))
}

#[test]
fn deeply_nested_calls_evaluate() {
    let env = new_core_environment();
    let source = nested(20_000, "(+ 1 ", "0", ")");
    assert_eq!(run(&env, &source), Value::number(20_000.0));
}

#[test]
fn deeply_nested_forms_print_and_compare() {
    let source = nested(200_000, "(", "", ")");
    let form = smack_reader::read(&source).expect("deep form should read");
    assert_eq!(form.to_string(), source);
    let again = smack_reader::read(&source).expect("deep form should read");
    assert_eq!(form, again);
}

#[test]
fn deeply_nested_text_reads_at_runtime() {
    let env = new_core_environment();
    let program = format!("(len (read-str \"{}\"))", nested(50_000, "(", "", ")"));
    assert_eq!(run(&env, &program), Value::number(1.0));
}

#[test]
fn tail_recursion_runs_100k_iterations() {
    let env = new_core_environment();
    run(
        &env,
        "(def sum-to (fn [n acc] (if (= n 0) acc (sum-to (- n 1) (+ acc n)))))",
    );
    assert_eq!(run(&env, "(sum-to 100000 0)"), Value::number(5_000_050_000.0));
}

#[test]
fn tail_position_through_let_and_do() {
    let env = new_core_environment();
    run(
        &env,
        "(def spin (fn [n] (let [m (- n 1)] (do :ignored (if (> m 0) (spin m) :end)))))",
    );
    assert_eq!(run(&env, "(spin 100000)"), Value::atom("end"));
}

#[test]
fn closure_keeps_captured_binding() {
    let env = new_core_environment();
    run(&env, "(def x 1)");
    run(&env, "(def get-x (let [x 1] (fn [] x)))");
    run(&env, "(def x 2)");
    assert_eq!(run(&env, "(get-x)"), Value::number(1.0));
    assert_eq!(run(&env, "x"), Value::number(2.0));
}

#[test]
fn map_literal_is_realized_once() {
    let env = new_core_environment();
    run(&env, "(def hits (hash-map :n 0))");
    let form = smack_reader::read("{:a (mset! hits :n (+ (mget hits :n) 1)) :b 2}").unwrap();

    let first = eval(&form, &env).unwrap();
    let second = eval(&form, &env).unwrap();

    let keys = |value: &Value| {
        let Value::Map(map) = value else {
            panic!("expected a map, got {value}");
        };
        let mut keys: Vec<_> = map.snapshot().unwrap().into_keys().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&first), keys(&second));
    assert_eq!(keys(&first), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(run(&env, "(mget hits :n)"), Value::number(1.0));
}

#[test]
fn host_errors_abort() {
    let env = new_core_environment();
    assert!(matches!(
        eval_str("(+ 1 nope)", &env),
        Err(EvalError::UnboundSymbol { .. })
    ));
    assert!(matches!(
        eval_str("(\"f\" 1)", &env),
        Err(EvalError::NotCallable { .. })
    ));
    assert!(matches!(
        eval_str("(cons 1)", &env),
        Err(EvalError::Arity { .. })
    ));
    assert!(matches!(
        eval_str("(list 1", &env),
        Err(EvalError::Syntax { .. })
    ));
}

#[test]
fn failed_step_leaves_earlier_definitions() {
    let env = new_core_environment();
    assert!(eval_str("(def kept 1) (undefined)", &env).is_err());
    assert_eq!(run(&env, "kept"), Value::number(1.0));
}
