//! Printing a read form and reading it again gives back an equal form, for
//! the printable subset: numbers, booleans, atoms, symbols and lists.

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smack_reader::read;

fn reprint(source: &str) -> String {
    match read(source) {
        Ok(form) => form.to_string(),
        Err(err) => panic!("failed to read {source:?}: {err}"),
    }
}

proptest! {
    #[test]
    fn numbers_round_trip(
        n in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let text = n.to_string();
        prop_assert_eq!(reprint(&text), text);
    }
}

#[test]
fn lists_round_trip() {
    for source in ["(1 2 3)", "(a (b c) true false)", "()"] {
        assert_eq!(reprint(source), source);
    }
}

#[test]
fn vectors_print_as_lists() {
    assert_eq!(reprint("[1 [2 3]]"), "(1 (2 3))");
}

#[test]
fn atoms_print_bare() {
    assert_eq!(reprint(":name"), "name");
}

#[test]
fn comments_and_commas_disappear() {
    assert_eq!(reprint("(1, 2, ; trailing\n 3)"), "(1 2 3)");
}
