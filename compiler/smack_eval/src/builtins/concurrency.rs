//! Tasks and rendezvous channels.
//!
//! `go` runs a function on a new OS thread with the caller's environment.
//! The thread is detached: nothing joins it, and its result is dropped.

use std::thread;

use smack_ir::errors::type_error;
use smack_ir::{ChannelValue, Environment, EvalResult, Value};

use crate::evaluator::apply;

pub(super) fn chan(_args: &[Value], _env: &Environment) -> EvalResult {
    Ok(Value::Channel(ChannelValue::new()))
}

/// `(go f args...)`: apply `f` to `args` on a new task. Returns nil at once.
pub(super) fn go(args: &[Value], env: &Environment) -> EvalResult {
    let Some((func, rest)) = args.split_first() else {
        return Ok(Value::nil());
    };
    let func = func.as_function()?.clone();
    let rest = rest.to_vec();
    let env = env.clone();

    tracing::debug!(?func, argc = rest.len(), "spawning task");
    thread::Builder::new()
        .name("smack-task".to_string())
        .spawn(move || {
            if let Err(err) = apply(&func, rest, &env) {
                tracing::warn!(%err, "task failed");
            }
        })
        .map_err(|err| type_error(format!("cannot spawn task: {err}")))?;
    Ok(Value::nil())
}

/// `(send! ch v)`: block until a receiver takes `v`, then return it.
pub(super) fn send(args: &[Value], _env: &Environment) -> EvalResult {
    let [chan, value] = super::exact("send!", args)?;
    let chan = chan.as_channel()?;
    chan.send(value.clone())
        .map_err(|_| type_error("send on a closed channel"))?;
    tracing::debug!(%value, "sent");
    Ok(value.clone())
}

/// `(recv! ch)`: block until a sender offers a value.
pub(super) fn recv(args: &[Value], _env: &Environment) -> EvalResult {
    let [chan] = super::exact("recv!", args)?;
    let value = chan
        .as_channel()?
        .recv()
        .ok_or_else(|| type_error("receive on a closed channel"))?;
    tracing::debug!(%value, "received");
    Ok(value)
}
