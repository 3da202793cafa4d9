//! Stack growth for non-tail recursion.
//!
//! The evaluator runs tail positions in a loop, but some recursion is
//! unavoidable: evaluating call arguments, reading nested brackets,
//! walking quasiquote templates, and printing or comparing nested values.
//! Deeply nested source such as
//! `(+ 1 (+ 1 (+ 1 ...)))` would otherwise overflow the native stack, so
//! every such recursive step goes through [`ensure_sufficient_stack`].
//!
//! Spawned tasks run on their own threads with the default thread stack;
//! growth works the same way there.

/// Grow when less than this much stack is left (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
