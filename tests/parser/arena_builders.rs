use shglob::lexer::{ByteOffset, ExtGlobKind, Span};
use shglob::parser::{
    ArenaError, AstArena, AstBuilder, AstNodeId, ClassMember, Node, ParseErrorKind, ParseOptions,
    Parser,
};

fn span(start: u32, end: u32) -> Span {
    Span::new(ByteOffset::new(start), ByteOffset::new(end))
}

#[test]
fn arena_allocation_limit_failure_is_deterministic() {
    let mut arena = AstArena::new(2);
    assert!(arena.alloc(Node::AnyChar, span(0, 1)).is_ok());
    assert!(arena.alloc(Node::AnySeq, span(1, 2)).is_ok());

    let error = arena
        .alloc(Node::AnyChar, span(2, 3))
        .expect_err("third allocation must exceed limit");
    assert_eq!(
        error,
        ArenaError::NodeLimitExceeded {
            limit: 2,
            attempted: 3
        }
    );
    assert_eq!(arena.remaining_capacity(), 0);
}

#[test]
fn arena_ids_are_positional_and_spans_are_recorded() {
    let mut arena = AstArena::new(8);
    let first = arena
        .alloc(Node::Literal("a".to_string()), span(0, 1))
        .expect("allocates");
    let second = arena.alloc(Node::AnySeq, span(1, 2)).expect("allocates");

    assert_eq!(first, AstNodeId::new(0));
    assert_eq!(second.index(), 1);
    assert_eq!(arena[second], Node::AnySeq);
    assert_eq!(arena.span(first), Some(span(0, 1)));
    assert_eq!(arena.get(AstNodeId::new(5)), None);
    assert_eq!(arena.iter().count(), 2);
}

#[test]
fn arena_reset_drops_every_node() {
    let mut arena = AstArena::new(4);
    arena.alloc(Node::AnyChar, span(0, 1)).expect("allocates");
    arena.reset();

    assert!(arena.is_empty());
    assert_eq!(arena.allocated_nodes(), 0);
    assert_eq!(arena.remaining_capacity(), arena.max_nodes());
}

#[test]
fn ast_builder_creates_nodes_and_tracks_allocations() {
    let mut arena = AstArena::new(8);
    let mut builder = AstBuilder::new(&mut arena);

    let literal = builder.literal("src/", span(0, 4)).expect("allocates");
    let star = builder.any_seq(span(4, 5)).expect("allocates");
    let class = builder
        .char_class(false, vec![ClassMember::Char('c')], span(5, 8))
        .expect("allocates");
    let alternative = builder.sequence(vec![literal], span(0, 4)).expect("allocates");
    let group = builder
        .ext_group(ExtGlobKind::At, vec![alternative], span(0, 6))
        .expect("allocates");
    let _word = builder
        .sequence(vec![group, star, class], span(0, 8))
        .expect("allocates");

    assert_eq!(builder.allocated_nodes(), 6);
}

#[test]
fn ast_builder_rejects_structurally_invalid_nodes() {
    let mut arena = AstArena::new(8);
    let mut builder = AstBuilder::new(&mut arena);

    let empty_class = builder
        .char_class(true, Vec::new(), span(0, 3))
        .expect_err("class needs a member");
    assert_eq!(empty_class.kind, ParseErrorKind::EmptyBracket);

    let reversed = builder
        .char_class(
            false,
            vec![ClassMember::Range {
                low: 'z',
                high: 'a',
            }],
            span(0, 5),
        )
        .expect_err("range must be ordered");
    assert_eq!(
        reversed.kind,
        ParseErrorKind::ReversedRange {
            low: 'z',
            high: 'a'
        }
    );

    let empty_group = builder
        .ext_group(ExtGlobKind::Negate, Vec::new(), span(0, 3))
        .expect_err("group needs an alternative");
    assert_eq!(
        empty_group.kind,
        ParseErrorKind::EmptyGroup { operator: '!' }
    );
    assert_eq!(builder.allocated_nodes(), 0);
}

#[test]
fn ast_builder_limit_overflow_maps_to_parse_error() {
    let mut arena = AstArena::new(1);
    let mut builder = AstBuilder::new(&mut arena);
    builder.any_char(span(0, 1)).expect("first node allocates");

    let error = builder
        .any_seq(span(1, 2))
        .expect_err("second node exceeds limit");
    assert_eq!(error.kind, ParseErrorKind::NodeLimitExceeded { limit: 1 });
    assert_eq!(error.span, Span::point(ByteOffset::new(2)));
}

#[test]
fn parser_node_limit_rejects_large_patterns() {
    let options = ParseOptions::default().with_max_ast_nodes(10);
    let mut parser = Parser::new(options);

    let error = parser.parse(&"*".repeat(20)).expect_err("too many nodes");
    assert_eq!(error.kind, ParseErrorKind::NodeLimitExceeded { limit: 10 });
    assert_eq!(error.offset().value(), 11);
    assert!(parser.patterns().is_empty());
    assert!(parser.parse("*").is_ok());
}

#[test]
fn node_limit_error_points_past_the_last_scanned_node() {
    let options = ParseOptions::default().with_max_ast_nodes(3);
    let mut parser = Parser::new(options);

    let error = parser.parse("ab?c").expect_err("word sequence does not fit");
    assert_eq!(error.kind, ParseErrorKind::NodeLimitExceeded { limit: 3 });
    assert_eq!(error.offset().value(), 4);
    assert_eq!(
        error.to_string(),
        "parse error at position 4: pattern too large (max 3 AST nodes)"
    );
}

#[test]
fn default_options_accept_long_flat_patterns() {
    let mut parser = Parser::new(ParseOptions::default());

    let wildcards = "?".repeat(200_000);
    let list = parser.parse(&wildcards).expect("long flat pattern parses");
    assert_eq!(list.arena().allocated_nodes(), 200_001);

    let words = "a*\n".repeat(40_000);
    let list = parser.parse(&words).expect("many words parse");
    assert_eq!(list.len(), 40_000);
}

#[test]
fn one_shot_parse_has_no_node_ceiling() {
    let list = shglob::parse(&"x?".repeat(100_000), false).expect("long pattern parses");
    assert_eq!(list.len(), 1);
}
