#![allow(clippy::unwrap_used, clippy::expect_used)]
//! `go`, `send!` and `recv!` across real threads.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{self, RecvTimeoutError};
use pretty_assertions::assert_eq;
use smack_eval::{eval_str, new_core_environment, new_core_environment_with_printer, Value};
use smack_ir::buffer_handler;

/// Poll `source` until it stops evaluating to `None`.
fn wait_for(env: &smack_eval::Environment, source: &str) -> Value {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let value = eval_str(source, env).unwrap();
        if !value.is_none() {
            return value;
        }
        assert!(Instant::now() < deadline, "timed out waiting for {source}");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn send_and_recv_meet() {
    let env = new_core_environment();
    eval_str("(def c (chan)) (def seen (hash-map))", &env).unwrap();
    eval_str("(go (fn [] (mset! seen :sent (send! c (list 1 :two)))))", &env).unwrap();

    let received = eval_str("(recv! c)", &env).unwrap();
    let sent = wait_for(&env, "(mget seen :sent)");
    assert_eq!(received, sent);
    assert_eq!(received.to_string(), "(1 two)");
}

#[test]
fn go_passes_arguments() {
    let env = new_core_environment();
    eval_str("(def c (chan))", &env).unwrap();
    eval_str("(go send! c 7)", &env).unwrap();
    assert_eq!(eval_str("(recv! c)", &env), Ok(Value::number(7.0)));
}

#[test]
fn go_returns_nil_immediately() {
    let env = new_core_environment();
    eval_str("(def c (chan))", &env).unwrap();
    // The task blocks forever on an unmatched send
    assert!(eval_str("(go send! c 1)", &env).unwrap().is_nil());
}

#[test]
fn recv_without_sender_stays_blocked() {
    let env = new_core_environment();
    eval_str("(def lonely (chan))", &env).unwrap();

    let (done_tx, done_rx) = channel::bounded(1);
    let task_env = env.clone();
    thread::spawn(move || {
        let result = eval_str("(recv! lonely)", &task_env);
        let _ = done_tx.send(result);
    });

    assert_eq!(
        done_rx.recv_timeout(Duration::from_millis(200)).err(),
        Some(RecvTimeoutError::Timeout)
    );
}

#[test]
fn tasks_share_root_definitions() {
    let env = new_core_environment();
    eval_str("(def reply (chan)) (def base 40)", &env).unwrap();
    eval_str("(go (fn [] (send! reply (+ base 2))))", &env).unwrap();
    assert_eq!(eval_str("(recv! reply)", &env), Ok(Value::number(42.0)));
}

#[test]
fn tasks_print_through_root_printer() {
    let printer = buffer_handler();
    let env = new_core_environment_with_printer(printer.clone());
    eval_str("(def done (chan))", &env).unwrap();
    eval_str("(go (fn [] (do (println \"from task\") (send! done :ok))))", &env).unwrap();
    assert_eq!(eval_str("(recv! done)", &env), Ok(Value::atom("ok")));
    assert_eq!(printer.output(), "from task\n");
}

#[test]
fn failing_task_does_not_affect_caller() {
    let env = new_core_environment();
    assert!(eval_str("(go (fn [] (undefined-symbol)))", &env).unwrap().is_nil());
    assert!(eval_str("(go 1)", &env).unwrap().is_error());
}
