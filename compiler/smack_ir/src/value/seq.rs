//! Shared element storage for lists and vectors.
//!
//! `Seq` wraps `Arc<Vec<Value>>` and derefs to a slice. Its `Drop` tears
//! nested sequences down with a worklist instead of recursing, so freeing a
//! form nested tens of thousands of levels deep uses constant native stack.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::Value;

#[repr(transparent)]
pub struct Seq(Arc<Vec<Value>>);

impl Seq {
    #[inline]
    pub(super) fn new(items: Vec<Value>) -> Self {
        Seq(Arc::new(items))
    }
}

impl Deref for Seq {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl Clone for Seq {
    #[inline]
    fn clone(&self) -> Self {
        Seq(Arc::clone(&self.0))
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Seq {
    fn drop(&mut self) {
        // Shared storage is someone else's to free
        let Some(items) = Arc::get_mut(&mut self.0) else {
            return;
        };
        let mut pending = std::mem::take(items);
        while let Some(value) = pending.pop() {
            if let Value::List(mut inner) | Value::Vector(mut inner) = value {
                if let Some(nested) = Arc::get_mut(&mut inner.0) {
                    pending.append(nested);
                }
                // `inner` is now empty or shared; dropping it does not recurse
            }
        }
    }
}
