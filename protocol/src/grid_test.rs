use super::*;

// =============================================================
// Coord
// =============================================================

#[test]
fn coord_displays_as_comma_pair() {
    assert_eq!(Coord::new(2, 3).to_string(), "2,3");
    assert_eq!(Coord::new(-8, 0).to_string(), "-8,0");
}

#[test]
fn coord_parses_negative_and_padded_components() {
    assert_eq!("-3,7".parse::<Coord>().expect("coord"), Coord::new(-3, 7));
    assert_eq!(" 4 , -1 ".parse::<Coord>().expect("coord"), Coord::new(4, -1));
}

#[test]
fn coord_rejects_malformed_keys() {
    for raw in ["", "1", "1;2", "a,b", "1,2,3", "1.5,2"] {
        let err = raw.parse::<Coord>().expect_err("should reject");
        assert!(matches!(err, ProtocolError::InvalidCoord(ref s) if s == raw));
    }
}

#[test]
fn coord_offset_moves_by_delta() {
    assert_eq!(Coord::new(1, 1).offset(-1, 2), Coord::new(0, 3));
    assert_eq!(Coord::new(1, 1).checked_offset(-1, 2), Some(Coord::new(0, 3)));
}

#[test]
fn offsets_at_the_edge_of_the_range() {
    let edge = Coord::new(i32::MAX, i32::MIN);
    assert_eq!(edge.offset(1, -1), edge);
    assert_eq!(edge.offset(-1, 1), Coord::new(i32::MAX - 1, i32::MIN + 1));
    assert_eq!(edge.checked_offset(1, 0), None);
    assert_eq!(edge.checked_offset(0, -1), None);
    assert_eq!(edge.checked_offset(-1, 0), Some(Coord::new(i32::MAX - 1, i32::MIN)));
}

#[test]
fn coord_is_a_json_map_key() {
    let mut grid = Grid::new();
    grid.insert(Coord::new(0, 0), Cell::Letter('A'));
    grid.insert(Coord::new(-1, 2), Cell::Modifier(Modifier::TripleWord));
    let json = serde_json::to_value(&grid).expect("serialize");
    assert_eq!(json, serde_json::json!({"0,0": "A", "-1,2": "TW"}));

    let back: Grid = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, grid);
}

// =============================================================
// Modifier
// =============================================================

#[test]
fn modifier_tags_match_wire_strings() {
    assert_eq!(Modifier::DoubleWord.as_str(), "DW");
    assert_eq!(Modifier::DoubleLetter.as_str(), "DL");
    assert_eq!(Modifier::TripleWord.as_str(), "TW");
    assert_eq!(Modifier::TripleLetter.as_str(), "TL");
}

#[test]
fn modifier_rejects_unknown_tag() {
    assert!("QW".parse::<Modifier>().is_err());
}

// =============================================================
// Cell
// =============================================================

#[test]
fn cell_parses_each_shape() {
    assert_eq!("".parse::<Cell>().expect("cell"), Cell::Empty);
    assert_eq!("Q".parse::<Cell>().expect("cell"), Cell::Letter('Q'));
    assert_eq!("_".parse::<Cell>().expect("cell"), Cell::Letter(BLANK));
    assert_eq!("DL".parse::<Cell>().expect("cell"), Cell::Modifier(Modifier::DoubleLetter));
}

#[test]
fn cell_rejects_multi_letter_values() {
    let err = "QU".parse::<Cell>().expect_err("should reject");
    assert!(matches!(err, ProtocolError::InvalidCell(ref s) if s == "QU"));
}

#[test]
fn cell_accessors_are_exclusive() {
    let letter = Cell::Letter('A');
    assert_eq!(letter.letter(), Some('A'));
    assert_eq!(letter.modifier(), None);
    assert!(letter.is_letter());

    let modifier = Cell::Modifier(Modifier::DoubleWord);
    assert_eq!(modifier.letter(), None);
    assert_eq!(modifier.modifier(), Some(Modifier::DoubleWord));
    assert!(!modifier.is_letter());
    assert!(!modifier.is_empty());

    assert!(Cell::default().is_empty());
}

#[test]
fn cell_display_matches_wire_form() {
    assert_eq!(Cell::Empty.to_string(), "");
    assert_eq!(Cell::Letter('Z').to_string(), "Z");
    assert_eq!(Cell::Modifier(Modifier::TripleLetter).to_string(), "TL");
}
