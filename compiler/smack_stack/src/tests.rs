use super::*;

/// Mirrors the shape of nested argument evaluation: each level does work
/// after the recursive call returns, so nothing can be turned into a loop.
fn nested_depth(n: u64) -> u64 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { nested_depth(n - 1) + 1 })
}

#[test]
fn shallow_nesting_passes_through() {
    assert_eq!(nested_depth(16), 16);
}

#[test]
fn deep_nesting_grows_the_stack() {
    assert_eq!(nested_depth(200_000), 200_000);
}

#[test]
fn deep_nesting_on_a_spawned_thread() {
    let handle = std::thread::spawn(|| nested_depth(100_000));
    assert_eq!(handle.join().ok(), Some(100_000));
}

#[test]
fn result_values_are_forwarded() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
