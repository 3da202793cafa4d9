use super::*;
use pretty_assertions::assert_eq;

fn read_ok(source: &str) -> Value {
    match read(source) {
        Ok(form) => form,
        Err(err) => panic!("failed to read {source:?}: {err}"),
    }
}

mod atoms {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(read_ok("42"), Value::number(42.0));
        assert_eq!(read_ok("-1.5"), Value::number(-1.5));
        assert_eq!(read_ok(".5"), Value::number(0.5));
        assert_eq!(read_ok("1e3"), Value::number(1000.0));
    }

    #[test]
    fn number_like_words_stay_symbols() {
        assert_eq!(read_ok("-"), Value::symbol("-"));
        assert_eq!(read_ok("inf"), Value::symbol("inf"));
        assert_eq!(read_ok("nan"), Value::symbol("nan"));
        assert_eq!(read_ok("1abc"), Value::symbol("1abc"));
    }

    #[test]
    fn literals() {
        assert_eq!(read_ok("true"), Value::boolean(true));
        assert_eq!(read_ok("false"), Value::boolean(false));
        assert!(read_ok("nil").is_nil());
    }

    #[test]
    fn keywords_are_interned_atoms() {
        let (Value::Atom(a), Value::Atom(b)) = (read_ok(":key"), read_ok(":key")) else {
            panic!("expected atoms");
        };
        assert_eq!(a.name(), "key");
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn strings_are_cooked() {
        assert_eq!(read_ok(r#""a\nb""#), Value::string("a\nb"));
        assert_eq!(read_ok(r#""open"#), Value::string("open"));
        assert_eq!(read_ok(r#""ends in \"#), Value::string("ends in \\"));
    }

    #[test]
    fn symbols() {
        assert_eq!(read_ok("mset!"), Value::symbol("mset!"));
    }
}

mod collections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_list() {
        let expected = Value::list(vec![
            Value::symbol("+"),
            Value::number(1.0),
            Value::list(vec![Value::symbol("*"), Value::number(2.0), Value::number(3.0)]),
        ]);
        assert_eq!(read_ok("(+ 1 (* 2 3))"), expected);
    }

    #[test]
    fn vector_is_its_own_tag() {
        assert!(matches!(read_ok("[1 2]"), Value::Vector(items) if items.len() == 2));
        assert!(matches!(read_ok("(1 2)"), Value::List(_)));
    }

    #[test]
    fn map_literal_stays_unrealized() {
        let Value::Map(map) = read_ok("{:a 1 :b (+ 1 1)}") else {
            panic!("expected a map literal");
        };
        assert!(!map.is_realized());
        let forms = map.literal_forms().unwrap_or_default();
        assert_eq!(forms.len(), 4);
        assert_eq!(forms[0], Value::atom("a"));
    }

    #[test]
    fn empty_forms() {
        assert!(read_ok("()").is_nil());
        assert_eq!(read_ok("[]"), Value::vector(Vec::new()));
    }
}

mod reader_macros {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quote_family() {
        assert_eq!(read_ok("'x"), read_ok("(quote x)"));
        assert_eq!(read_ok("`x"), read_ok("(quasiquote x)"));
        assert_eq!(read_ok("~x"), read_ok("(unquote x)"));
        assert_eq!(read_ok("~@x"), read_ok("(splice-unquote x)"));
        assert_eq!(read_ok("@x"), read_ok("(deref x)"));
    }

    #[test]
    fn with_meta_swaps_order() {
        assert_eq!(read_ok("^m x"), read_ok("(with-meta x m)"));
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unclosed_list() {
        assert_eq!(
            read("(1 2"),
            Err(ReadError::UnexpectedEof {
                expected: "`)`".to_string()
            })
        );
    }

    #[test]
    fn unclosed_map() {
        assert!(matches!(read("{:a 1"), Err(ReadError::UnexpectedEof { .. })));
    }

    #[test]
    fn stray_closer() {
        assert_eq!(
            read(" )"),
            Err(ReadError::UnexpectedDelimiter {
                found: ')',
                offset: 1
            })
        );
    }

    #[test]
    fn mismatched_closer() {
        assert!(matches!(
            read("(1 ]"),
            Err(ReadError::UnexpectedDelimiter { found: ']', .. })
        ));
    }

    #[test]
    fn quote_at_end() {
        assert!(matches!(read("'"), Err(ReadError::UnexpectedEof { .. })));
    }

    #[test]
    fn only_comments() {
        assert_eq!(read("; nothing here"), Err(ReadError::Empty));
    }

    #[test]
    fn converts_to_syntax_error() {
        let err = smack_ir::EvalError::from(ReadError::Empty);
        assert!(matches!(err, smack_ir::EvalError::Syntax { .. }));
    }
}

#[test]
fn read_takes_first_form_only() {
    assert_eq!(read_ok("1 2 3"), Value::number(1.0));
}

#[test]
fn read_all_returns_every_form() {
    let forms = read_all("(def x 1) ; comment\n x").unwrap_or_default();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[1], Value::symbol("x"));
    assert_eq!(read_all("   "), Ok(Vec::new()));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 50_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let form = read(&source);
    assert!(form.is_ok());
}
