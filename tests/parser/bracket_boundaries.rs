use shglob::parser::{ClassMember, NamedClass, Node, ParseErrorKind, parse};

fn class_of(input: &str) -> (bool, Vec<ClassMember>) {
    let list = parse(input, false).expect("valid bracket");
    let Node::Sequence(children) = &list[list.words()[0]] else {
        panic!("word is a sequence");
    };
    match &list[children[0]] {
        Node::CharClass(class) => (class.negated, class.members.clone()),
        other => panic!("expected class, found {other:?}"),
    }
}

fn error_kind(input: &str) -> ParseErrorKind {
    parse(input, false).expect_err("invalid bracket").kind
}

#[test]
fn leading_close_bracket_is_a_member() {
    assert_eq!(class_of("[]]"), (false, vec![ClassMember::Char(']')]));
    assert_eq!(
        class_of("[]a]"),
        (false, vec![ClassMember::Char(']'), ClassMember::Char('a')])
    );
    assert_eq!(class_of("[!]]"), (true, vec![ClassMember::Char(']')]));
    assert_eq!(class_of("[^]]"), (true, vec![ClassMember::Char(']')]));
}

#[test]
fn empty_brackets_are_rejected() {
    for input in ["[]", "[!]", "[^]"] {
        assert_eq!(error_kind(input), ParseErrorKind::EmptyBracket, "{input}");
    }
}

#[test]
fn unterminated_brackets_report_their_start() {
    let error = parse("ab[cd", false).expect_err("unterminated");

    assert_eq!(
        error.kind,
        ParseErrorKind::UnterminatedBracket {
            start: shglob::lexer::ByteOffset::new(2)
        }
    );
    assert_eq!(error.offset().value(), 2);
}

#[test]
fn newline_ends_an_open_bracket() {
    assert!(matches!(
        error_kind("[ab\ncd]"),
        ParseErrorKind::UnterminatedBracket { .. }
    ));
    assert!(matches!(
        error_kind("[]\n]"),
        ParseErrorKind::EmptyBracket
    ));
}

#[test]
fn dash_placement_decides_range_or_member() {
    assert_eq!(
        class_of("[a-z]").1,
        vec![ClassMember::Range {
            low: 'a',
            high: 'z'
        }]
    );
    assert_eq!(
        class_of("[a-]").1,
        vec![ClassMember::Char('a'), ClassMember::Char('-')]
    );
    assert_eq!(
        class_of("[-a]").1,
        vec![ClassMember::Char('-'), ClassMember::Char('a')]
    );
    assert_eq!(class_of("[a-a]").1, vec![ClassMember::Range { low: 'a', high: 'a' }]);
}

#[test]
fn reversed_ranges_are_rejected() {
    assert_eq!(
        error_kind("[9-0]"),
        ParseErrorKind::ReversedRange {
            low: '9',
            high: '0'
        }
    );
}

#[test]
fn escaped_members_are_plain_characters() {
    assert_eq!(class_of("[\\]]").1, vec![ClassMember::Char(']')]);
    assert_eq!(class_of("[\\!a]"), (false, vec![ClassMember::Char('!'), ClassMember::Char('a')]));
    assert_eq!(
        class_of("[a\\-z]").1,
        vec![
            ClassMember::Char('a'),
            ClassMember::Char('-'),
            ClassMember::Char('z')
        ]
    );
}

#[test]
fn named_classes_are_recognized() {
    assert_eq!(
        class_of("[[:alpha:][:digit:]_]").1,
        vec![
            ClassMember::Named(NamedClass::Alpha),
            ClassMember::Named(NamedClass::Digit),
            ClassMember::Char('_')
        ]
    );
    for name in [
        "alnum", "alpha", "blank", "cntrl", "digit", "graph", "lower", "print", "punct", "space",
        "upper", "xdigit", "word",
    ] {
        let class = NamedClass::from_name(name).expect("known class");
        assert_eq!(class.name(), name);
        assert_eq!(
            class_of(&format!("[[:{name}:]]")).1,
            vec![ClassMember::Named(class)]
        );
    }
}

#[test]
fn unknown_named_class_is_rejected() {
    assert_eq!(
        error_kind("[[:vowel:]]"),
        ParseErrorKind::UnknownCharacterClass {
            name: "vowel".to_string()
        }
    );
}

#[test]
fn incomplete_named_class_is_ordinary_members() {
    assert_eq!(
        class_of("[[:a]").1,
        vec![
            ClassMember::Char('['),
            ClassMember::Char(':'),
            ClassMember::Char('a')
        ]
    );
    assert_eq!(
        class_of("[[a]").1,
        vec![ClassMember::Char('['), ClassMember::Char('a')]
    );
}

#[test]
fn glob_and_group_characters_are_members() {
    assert_eq!(
        class_of("[*?(|)]").1,
        vec![
            ClassMember::Char('*'),
            ClassMember::Char('?'),
            ClassMember::Char('('),
            ClassMember::Char('|'),
            ClassMember::Char(')')
        ]
    );
}
