use shglob::parser::{ParseErrorKind, ParseOptions, Parser};

#[test]
fn failure_sets_the_error_slot_and_clears_output() {
    let mut parser = Parser::new(ParseOptions::default());
    parser.parse("a*").expect("valid pattern");

    let error = parser.parse("[b").expect_err("unterminated");

    assert!(parser.has_error());
    assert_eq!(parser.error(), Some(&error));
    assert_eq!(parser.error_message(), Some(error.to_string()));
    assert!(parser.patterns().is_empty());
    assert!(parser.patterns().arena().is_empty());
}

#[test]
fn success_clears_a_previous_error() {
    let mut parser = Parser::new(ParseOptions::default());
    assert!(parser.parse("\\").is_err());
    assert!(parser.has_error());

    parser.parse("ok").expect("valid pattern");
    assert!(!parser.has_error());
    assert_eq!(parser.error_message(), None);
}

#[test]
fn reset_clears_result_and_error() {
    let mut parser = Parser::new(ParseOptions::default());
    assert!(parser.parse("[]").is_err());

    parser.reset();
    assert!(!parser.has_error());
    assert!(parser.patterns().is_empty());
}

#[test]
fn into_patterns_keeps_the_last_result() {
    let mut parser = Parser::new(ParseOptions::default().with_extglob(true));
    parser.parse("+(x)").expect("valid pattern");

    let patterns = parser.into_patterns();
    assert_eq!(patterns.len(), 1);
    assert_eq!(
        patterns.to_structural(),
        r#"(seq (group + (seq (lit "x"))))"#
    );
}

#[test]
fn error_message_carries_byte_position() {
    let mut parser = Parser::new(ParseOptions::default().with_extglob(true));
    let error = parser.parse("abc\n@(x").expect_err("unterminated group");

    assert!(matches!(
        error.kind,
        ParseErrorKind::UnterminatedGroup { operator: '@', .. }
    ));
    assert_eq!(
        parser.error_message().as_deref(),
        Some("parse error at position 4: unterminated extglob group `@(` starting at byte 4")
    );
    assert_eq!(error.line_in("abc\n@(x"), 2);
}

#[test]
fn independent_parsers_do_not_share_errors() {
    let mut failing = Parser::new(ParseOptions::default());
    let mut passing = Parser::new(ParseOptions::default());

    assert!(failing.parse("[z-a]").is_err());
    passing.parse("[a-z]").expect("valid pattern");

    assert!(failing.has_error());
    assert!(!passing.has_error());
}

#[test]
fn parsers_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                let mut parser = Parser::new(ParseOptions::default().with_extglob(true));
                let input = if index % 2 == 0 { "@(a|b)" } else { "@(a|b" };
                parser.parse(input).map(|list| list.to_structural()).is_ok()
            })
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();
    assert_eq!(results, vec![true, false, true, false]);
}
