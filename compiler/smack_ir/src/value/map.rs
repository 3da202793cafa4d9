//! Maps and map literals.
//!
//! A `{...}` literal is read as a flat sequence of key and value forms. The
//! first time the evaluator reaches that node it realizes it: keys are
//! coerced to names, values are evaluated, and the node itself switches to
//! holding the entries. Every clone of the node shares the switch, so a
//! second evaluation sees the realized entries and derives nothing again.
//!
//! Realized maps are the one mutable aggregate; `mset!` writes through the
//! shared handle. Each read or write holds the lock for a single access
//! only. Interleavings of several operations from different tasks are
//! unspecified.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use super::Value;

/// Realized entries, keyed by canonical name.
pub type MapEntries = FxHashMap<String, Value>;

enum MapState {
    /// Unevaluated `k1 v1 k2 v2 ...` forms from the reader.
    Literal(Arc<Vec<Value>>),
    Realized(MapEntries),
}

#[derive(Clone)]
pub struct MapValue(Arc<RwLock<MapState>>);

impl MapValue {
    /// Wrap reader output; realization happens on first evaluation.
    pub fn literal(forms: Vec<Value>) -> Self {
        MapValue(Arc::new(RwLock::new(MapState::Literal(Arc::new(forms)))))
    }

    /// A map whose entries are already known.
    pub fn from_entries(entries: MapEntries) -> Self {
        MapValue(Arc::new(RwLock::new(MapState::Realized(entries))))
    }

    pub fn is_realized(&self) -> bool {
        matches!(*self.0.read(), MapState::Realized(_))
    }

    /// The pending literal forms, or `None` once realized.
    ///
    /// Returns a shared handle so the caller can evaluate the forms without
    /// holding the lock.
    pub fn literal_forms(&self) -> Option<Arc<Vec<Value>>> {
        match &*self.0.read() {
            MapState::Literal(forms) => Some(Arc::clone(forms)),
            MapState::Realized(_) => None,
        }
    }

    /// Install realized entries, unless another evaluation got there first.
    ///
    /// Returns `true` if these entries were installed.
    pub fn realize(&self, entries: MapEntries) -> bool {
        let mut state = self.0.write();
        match &*state {
            MapState::Realized(_) => false,
            MapState::Literal(_) => {
                *state = MapState::Realized(entries);
                true
            }
        }
    }

    /// Number of entries (pairs, for an unrealized literal).
    pub fn len(&self) -> usize {
        match &*self.0.read() {
            MapState::Literal(forms) => forms.len() / 2,
            MapState::Realized(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a realized entry. `None` for a missing key or an unrealized
    /// literal.
    pub fn get(&self, key: &str) -> Option<Value> {
        match &*self.0.read() {
            MapState::Realized(entries) => entries.get(key).cloned(),
            MapState::Literal(_) => None,
        }
    }

    /// Insert into a realized map in place. Returns `false` (and stores
    /// nothing) if the map is still an unevaluated literal.
    pub fn insert(&self, key: String, value: Value) -> bool {
        match &mut *self.0.write() {
            MapState::Realized(entries) => {
                entries.insert(key, value);
                true
            }
            MapState::Literal(_) => false,
        }
    }

    /// Copy of the realized entries, taken under a single read lock.
    pub fn snapshot(&self) -> Option<MapEntries> {
        match &*self.0.read() {
            MapState::Realized(entries) => Some(entries.clone()),
            MapState::Literal(_) => None,
        }
    }

    pub fn ptr_eq(&self, other: &MapValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.literal_forms(), self.snapshot()) {
            (Some(forms), _) => f.debug_tuple("MapLiteral").field(&forms).finish(),
            (None, Some(entries)) => f.debug_map().entries(entries.iter()).finish(),
            (None, None) => f.write_str("{}"),
        }
    }
}
