//! Rendezvous channels.
//!
//! A channel has no buffer: `send` blocks until a receiver takes the value
//! and `recv` blocks until a sender offers one. Both endpoints live in the
//! same handle, so a channel can never become disconnected while a task
//! still holds it.

use crossbeam::channel::{self, Receiver, Sender};
use std::fmt;
use std::sync::Arc;

use super::Value;

struct Endpoints {
    tx: Sender<Value>,
    rx: Receiver<Value>,
}

#[derive(Clone)]
pub struct ChannelValue(Arc<Endpoints>);

impl ChannelValue {
    pub fn new() -> Self {
        let (tx, rx) = channel::bounded(0);
        ChannelValue(Arc::new(Endpoints { tx, rx }))
    }

    /// Block until a receiver takes `value`.
    ///
    /// Returns the value back if the channel is disconnected, which cannot
    /// happen while `self` is alive.
    pub fn send(&self, value: Value) -> Result<(), Value> {
        self.0.tx.send(value).map_err(|err| err.into_inner())
    }

    /// Block until a sender offers a value.
    pub fn recv(&self) -> Option<Value> {
        self.0.rx.recv().ok()
    }

    pub fn ptr_eq(&self, other: &ChannelValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ChannelValue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel({:p})", Arc::as_ptr(&self.0))
    }
}
