use shglob::parser::{ParseErrorKind, ParseOptions, Parser};

fn nested(depth: usize) -> String {
    format!("{}a{}", "@(".repeat(depth), ")".repeat(depth))
}

fn parses(depth: usize, max_nesting: usize) -> bool {
    let options = ParseOptions::default()
        .with_extglob(true)
        .with_max_nesting(max_nesting);
    Parser::new(options).parse(&nested(depth)).is_ok()
}

#[test]
fn depth_equal_to_ceiling_parses() {
    assert!(parses(256, 256));
    assert!(parses(3, 3));
}

#[test]
fn depth_beyond_ceiling_fails_with_nesting_error() {
    let options = ParseOptions::default().with_extglob(true);
    let mut parser = Parser::new(options);
    let error = parser.parse(&nested(257)).expect_err("too deep");

    assert_eq!(error.kind, ParseErrorKind::NestingTooDeep { limit: 256 });
    assert_eq!(error.offset().value(), 512);
    assert!(error.to_string().contains("nesting too deep"));
}

#[test]
fn ceiling_zero_rejects_any_group() {
    assert!(!parses(1, 0));
    assert!(parses(0, 0));
}

#[test]
fn raising_the_ceiling_never_rejects_a_passing_input() {
    for depth in 0..12 {
        for ceiling in 0..12 {
            if parses(depth, ceiling) {
                assert!(parses(depth, ceiling + 1), "depth {depth} ceiling {ceiling}");
            }
            assert_eq!(parses(depth, ceiling), depth <= ceiling);
        }
    }
}

#[test]
fn unclosed_openers_fail_fast() {
    let options = ParseOptions::default().with_extglob(true);
    let error = Parser::new(options)
        .parse(&"+(".repeat(50_000))
        .expect_err("too deep");

    assert_eq!(error.kind, ParseErrorKind::NestingTooDeep { limit: 256 });
}

#[test]
fn large_ceiling_does_not_overflow_the_stack() {
    assert!(parses(5_000, 10_000));
}

#[test]
fn nesting_is_ignored_without_extglob() {
    let mut parser = Parser::new(ParseOptions::default().with_max_nesting(1));
    assert!(parser.parse(&nested(10)).is_ok());
}
