use torchmaze::maze::{MapError, TileKind, TileMap};

const SQUARE_MAP: &str = "2\n2\n0 1\n2 0\n";

#[test]
fn parses_declared_dimensions() {
    let map = TileMap::parse(SQUARE_MAP).expect("valid map");
    assert_eq!(map.width(), 2);
    assert_eq!(map.height(), 2);
    for column in 0..map.width() {
        for row in 0..map.height() {
            // Every cell is addressable.
            let _ = map.get(column, row);
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    let first = TileMap::parse(SQUARE_MAP).expect("valid map");
    let second = TileMap::parse(SQUARE_MAP).expect("valid map");
    assert_eq!(first, second);
}

#[test]
fn parses_non_square_maps() {
    // 3 columns (width), 2 rows (height).
    let map = TileMap::parse("3\n2\n0 1 2\n0 1 0\n").expect("valid map");
    assert_eq!(map.width(), 3);
    assert_eq!(map.height(), 2);
    assert_eq!(map.get(0, 0), 0);
    assert_eq!(map.get(1, 0), 1);
    assert_eq!(map.get(2, 0), 2);
    assert_eq!(map.get(2, 1), 0);
}

#[test]
fn tile_code_mapping_is_stable() {
    assert_eq!(TileKind::classify(0), Some(TileKind::Wall));
    assert_eq!(TileKind::classify(1), Some(TileKind::EmptySpace));
    assert_eq!(TileKind::classify(2), Some(TileKind::PlayerStart));
    // Unknown codes are no placement action, not an error.
    assert_eq!(TileKind::classify(3), None);
    assert_eq!(TileKind::classify(-1), None);
}

#[test]
fn rejects_short_rows_naming_the_line() {
    let err = TileMap::parse("3\n2\n0 1 2\n0 1\n").unwrap_err();
    match err {
        MapError::BadRowLength {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 4);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected BadRowLength, got {other:?}"),
    }
}

#[test]
fn rejects_junk_tokens_naming_the_line() {
    let err = TileMap::parse("2\n2\n0 1\nx 0\n").unwrap_err();
    match err {
        MapError::BadTileCode { line, token } => {
            assert_eq!(line, 4);
            assert_eq!(token, "x");
        }
        other => panic!("expected BadTileCode, got {other:?}"),
    }
}

#[test]
fn rejects_missing_rows() {
    let err = TileMap::parse("2\n3\n0 1\n1 0\n").unwrap_err();
    match err {
        MapError::MissingRows { expected, found } => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected MissingRows, got {other:?}"),
    }
}

#[test]
fn rejects_bad_dimensions() {
    assert!(matches!(
        TileMap::parse("0\n2\n"),
        Err(MapError::BadDimension { line: 1, .. })
    ));
    assert!(matches!(
        TileMap::parse("2\nnope\n0 0\n0 0\n"),
        Err(MapError::BadDimension { line: 2, .. })
    ));
    assert!(matches!(
        TileMap::parse(""),
        Err(MapError::BadDimension { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TileMap::load("does/not/exist.txt").unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}
