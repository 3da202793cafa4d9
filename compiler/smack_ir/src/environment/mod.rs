//! Lexical environments.
//!
//! An [`Environment`] is a handle to one frame of bindings plus a link to
//! its parent. Frames are created for each `let` block and each user
//! function call; closures keep their defining frame alive by holding a
//! handle to it. Frames only point at their parents, never at children, so
//! the chain is a tree.
//!
//! A closure stored in the frame it captured (a recursive top-level `def`,
//! or a `fn` bound by `let`) forms a reference cycle and lives until the
//! process exits.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::{Symbol, Value};

struct Frame {
    bindings: RwLock<FxHashMap<Arc<str>, Value>>,
    parent: Option<Environment>,
    /// Set on the root frame only.
    printer: Option<SharedPrintHandler>,
}

#[derive(Clone)]
pub struct Environment(Arc<Frame>);

impl Environment {
    /// A root frame printing to stdout.
    pub fn new() -> Self {
        Self::with_printer(stdout_handler())
    }

    /// A root frame sending `println` output to `printer`.
    pub fn with_printer(printer: SharedPrintHandler) -> Self {
        Environment(Arc::new(Frame {
            bindings: RwLock::new(FxHashMap::default()),
            parent: None,
            printer: Some(printer),
        }))
    }

    /// An empty frame under `parent`.
    pub fn with_parent(parent: &Environment) -> Self {
        Environment(Arc::new(Frame {
            bindings: RwLock::new(FxHashMap::default()),
            parent: Some(parent.clone()),
            printer: None,
        }))
    }

    /// A frame under `parent` binding `names` to `values` pairwise.
    ///
    /// Surplus names or values are ignored; callers that care about arity
    /// check it before building the frame.
    pub fn with_bindings(parent: &Environment, names: &[Symbol], values: Vec<Value>) -> Self {
        let bindings = names
            .iter()
            .zip(values)
            .map(|(name, value)| (Arc::from(name.name()), value))
            .collect();
        Environment(Arc::new(Frame {
            bindings: RwLock::new(bindings),
            parent: Some(parent.clone()),
            printer: None,
        }))
    }

    /// Bind `name` in this frame, shadowing any outer binding.
    pub fn set(&self, name: &str, value: Value) {
        self.0.bindings.write().insert(Arc::from(name), value);
    }

    /// Resolve `name`, walking outward through parents.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.0.bindings.read().get(name) {
                return Some(value.clone());
            }
            frame = frame.0.parent.as_ref()?;
        }
    }

    /// The outermost frame of the chain.
    pub fn root(&self) -> Environment {
        let mut frame = self;
        while let Some(parent) = &frame.0.parent {
            frame = parent;
        }
        frame.clone()
    }

    /// Where `println` writes, shared by the whole chain.
    pub fn printer(&self) -> SharedPrintHandler {
        let root = self.root();
        match &root.0.printer {
            Some(printer) => Arc::clone(printer),
            // Only root frames are built without a parent, and they always get a printer
            None => stdout_handler(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.bindings.read().len())
            .field("root", &self.0.parent.is_none())
            .finish()
    }
}
