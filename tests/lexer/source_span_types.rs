use shglob::lexer::{ByteOffset, Span};

#[test]
fn span_normalizes_reversed_offsets() {
    let span = Span::new(ByteOffset::new(7), ByteOffset::new(3));

    assert_eq!(span.start, ByteOffset::new(3));
    assert_eq!(span.end, ByteOffset::new(7));
    assert_eq!(span.len(), 4);
}

#[test]
fn point_span_is_empty() {
    let span = Span::point(ByteOffset::new(5));

    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn merge_covers_both_spans() {
    let left = Span::new(ByteOffset::new(2), ByteOffset::new(4));
    let right = Span::new(ByteOffset::new(6), ByteOffset::new(9));

    assert_eq!(
        left.merge(right),
        Span::new(ByteOffset::new(2), ByteOffset::new(9))
    );
    assert_eq!(left.merge(right), right.merge(left));
}

#[test]
fn from_usize_saturates() {
    assert_eq!(ByteOffset::from_usize(12).value(), 12);
    assert_eq!(ByteOffset::from_usize(usize::MAX).value(), u32::MAX);
}

#[test]
fn byte_offset_displays_as_number() {
    assert_eq!(ByteOffset::new(42).to_string(), "42");
}
