use super::*;
use pretty_assertions::assert_eq;

fn pos(line: u32, column: u32) -> Position {
    Position { line, column }
}

#[test]
fn offsets_map_to_lines_and_columns() {
    let text = "line1\nline2\nline3";
    let index = LineIndex::build(text);
    assert_eq!(index.position_at(text, 0), pos(1, 1));
    assert_eq!(index.position_at(text, 4), pos(1, 5));
    assert_eq!(index.position_at(text, 6), pos(2, 1));
    assert_eq!(index.position_at(text, 12), pos(3, 1));
    assert_eq!(index.position_at(text, 16), pos(3, 5));
}

#[test]
fn newline_belongs_to_its_line() {
    let text = "ab\ncd";
    let index = LineIndex::build(text);
    assert_eq!(index.position_at(text, 2), pos(1, 3));
    assert_eq!(index.position_at(text, 3), pos(2, 1));
}

#[test]
fn offset_past_end_clamps() {
    let text = "abc";
    let index = LineIndex::build(text);
    assert_eq!(index.position_at(text, 99), pos(1, 4));
}

#[test]
fn empty_text_has_one_line() {
    let text = "";
    let index = LineIndex::build(text);
    assert_eq!(index.line_at(0), 1);
    assert_eq!(index.position_at(text, 0), pos(1, 1));
}

#[test]
fn columns_count_characters_not_bytes() {
    // "héllo": 'é' is two bytes; the column after it is still 3.
    let text = "h\u{e9}llo";
    let index = LineIndex::build(text);
    assert_eq!(index.position_at(text, 3), pos(1, 3));
}

#[test]
fn span_positions_cover_both_ends() {
    let text = "<a>\n</a>";
    let index = LineIndex::build(text);
    let (start, end) = index.span_positions(text, Span::new(4, 8));
    assert_eq!(start, pos(2, 1));
    assert_eq!(end, pos(2, 5));
}

#[test]
fn trailing_newline_opens_a_final_line() {
    let text = "a\n";
    let index = LineIndex::build(text);
    assert_eq!(index.line_at(2), 2);
    assert_eq!(index.position_at(text, 2), pos(2, 1));
}
