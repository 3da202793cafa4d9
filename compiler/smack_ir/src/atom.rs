//! Interned keyword atoms.
//!
//! Every `:name` token in source becomes an [`Atom`]. Atoms with the same
//! name share one allocation, so comparison is usually a pointer check and
//! map keys built from atoms never duplicate their text.
//!
//! The table is process-wide and append-only. Spawned tasks may intern
//! concurrently, so it is guarded by a `RwLock`: lookups of existing atoms
//! take the read lock, and only the first occurrence of a name takes the
//! write lock.

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::{Arc, LazyLock};

static ATOM_TABLE: LazyLock<RwLock<FxHashSet<Arc<str>>>> =
    LazyLock::new(|| RwLock::new(FxHashSet::default()));

/// A keyword atom such as `:name`. Stores the name without the colon.
#[derive(Clone)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Return the canonical atom for `name`, creating it on first use.
    pub fn intern(name: &str) -> Self {
        // Fast path: already interned
        if let Some(existing) = ATOM_TABLE.read().get(name) {
            return Atom(Arc::clone(existing));
        }

        let mut table = ATOM_TABLE.write();
        // Another task may have won the race between the two locks
        if let Some(existing) = table.get(name) {
            return Atom(Arc::clone(existing));
        }
        let name: Arc<str> = Arc::from(name);
        table.insert(Arc::clone(&name));
        Atom(name)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether both atoms point at the same interned allocation.
    pub fn ptr_eq(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Atom {}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}
