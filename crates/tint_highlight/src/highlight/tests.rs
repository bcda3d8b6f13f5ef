use super::*;
use pretty_assertions::assert_eq;

fn config(colors: &[&str], ignored: &[&str]) -> TintConfig {
    TintConfig {
        colors: colors.iter().map(ToString::to_string).collect(),
        ignored_tags: ignored.iter().map(ToString::to_string).collect(),
    }
}

fn pos(line: u32, column: u32) -> Position {
    Position { line, column }
}

#[test]
fn layers_follow_palette_order() {
    let cfg = config(&["#ff0000", "#00ff00"], &[]);
    let hl = highlight("<a><b></b></a>", &cfg).expect("valid config");
    assert_eq!(hl.layers.len(), 2);
    assert_eq!(hl.layers[0].color.to_string(), "#ff0000");
    assert_eq!(hl.layers[1].color.to_string(), "#00ff00");
    // Depth 1 -> layer 0, depth 2 -> layer 1; three sub-ranges per tag.
    assert_eq!(hl.layers[0].ranges.len(), 6);
    assert_eq!(hl.layers[1].ranges.len(), 6);
}

#[test]
fn positions_are_one_based_per_line() {
    let cfg = config(&["#ff0000"], &[]);
    let hl = highlight("<a>\n  </a>", &cfg).expect("valid config");
    let ranges = &hl.layers[0].ranges;
    // "<" on line 1 col 1, "</" on line 2 col 3.
    assert_eq!((ranges[0].start, ranges[0].end), (pos(1, 1), pos(1, 2)));
    assert_eq!((ranges[3].start, ranges[3].end), (pos(2, 3), pos(2, 5)));
}

#[test]
fn ignored_tags_drop_out_of_the_layers() {
    let cfg = config(&["#ff0000"], &["div"]);
    let hl = highlight("<div><p></p></div>", &cfg).expect("valid config");
    assert_eq!(hl.total_ranges(), 6); // only <p> and </p>
}

#[test]
fn empty_palette_yields_no_layers() {
    let cfg = config(&[], &[]);
    let hl = highlight("<a></a>", &cfg).expect("valid config");
    assert_eq!(hl.layers.len(), 0);
    assert_eq!(hl.total_ranges(), 0);
}

#[test]
fn invalid_color_surfaces_as_config_error() {
    let cfg = config(&["#nothex"], &[]);
    assert!(highlight("<a>", &cfg).is_err());
}

#[test]
fn sorted_ranges_are_in_document_order() {
    let cfg = config(&["#ff0000", "#00ff00", "#0000ff"], &[]);
    let hl = highlight("<a><b><c></c></b></a>", &cfg).expect("valid config");
    let all = hl.sorted_ranges();
    assert_eq!(all.len(), 18);
    for pair in all.windows(2) {
        assert!(pair[0].1.span.start <= pair[1].1.span.start);
    }
}
