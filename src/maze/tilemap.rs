//! Map file parsing and tile classification.
//!
//! # Map file format
//!
//! Plain text, newline delimited:
//!
//! ```text
//! 4            <- width: cells along the X axis (columns)
//! 3            <- height: cells along the Z axis (rows)
//! 0 0 0 0      <- one line per row, `width` codes per line
//! 0 2 1 0
//! 0 0 0 0
//! ```
//!
//! Tile codes are stable: `0` is a wall, `1` is walkable empty space, `2` is
//! the player start (also walkable). Unrecognized codes parse fine and
//! simply place nothing.
//!
//! The parser is strict where the format promises something: both dimensions
//! must be positive, every row must hold exactly `width` integer codes and
//! there must be `height` rows. Violations are reported as [`MapError`]
//! values naming the offending 1-based line; deciding whether that is fatal
//! is left to the caller.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read map file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected a positive integer dimension, got {token:?}")]
    BadDimension { line: usize, token: String },
    #[error("line {line}: expected {expected} tile codes, found {found}")]
    BadRowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {token:?} is not an integer tile code")]
    BadTileCode { line: usize, token: String },
    #[error("expected {expected} map rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("the map has no player start tile")]
    MissingPlayerStart,
    #[error("extra player start tile at column {column}, row {row}; a map carries exactly one")]
    ExtraPlayerStart { column: usize, row: usize },
}

/// Semantic meaning of a tile code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    EmptySpace,
    PlayerStart,
}

impl TileKind {
    /// Classify a raw tile code. Unknown codes yield `None`: the cell takes
    /// no placement action, which is not an error.
    pub fn classify(code: i32) -> Option<TileKind> {
        match code {
            0 => Some(TileKind::Wall),
            1 => Some(TileKind::EmptySpace),
            2 => Some(TileKind::PlayerStart),
            _ => None,
        }
    }
}

/// The parsed tile grid: `width` columns (X axis) by `height` rows (Z axis),
/// stored contiguously in row-major order. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<i32>,
}

impl TileMap {
    /// Read and parse a map file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse map text. Parsing is pure: the same text always yields the
    /// same grid.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines().enumerate();

        let width = Self::parse_dimension(lines.next())?;
        let height = Self::parse_dimension(lines.next())?;

        let mut tiles = Vec::with_capacity(width * height);
        let mut rows = 0;
        for (index, line) in lines.take(height) {
            let mut codes = 0;
            for token in line.split_whitespace() {
                let code = token.parse::<i32>().map_err(|_| MapError::BadTileCode {
                    line: index + 1,
                    token: token.to_string(),
                })?;
                tiles.push(code);
                codes += 1;
            }
            if codes != width {
                return Err(MapError::BadRowLength {
                    line: index + 1,
                    expected: width,
                    found: codes,
                });
            }
            rows += 1;
        }
        if rows != height {
            return Err(MapError::MissingRows {
                expected: height,
                found: rows,
            });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    fn parse_dimension(line: Option<(usize, &str)>) -> Result<usize, MapError> {
        let (index, token) = match line {
            Some((index, line)) => (index, line.trim()),
            None => (0, ""),
        };
        match token.parse::<usize>() {
            Ok(dimension) if dimension > 0 => Ok(dimension),
            _ => Err(MapError::BadDimension {
                line: index + 1,
                token: token.to_string(),
            }),
        }
    }

    /// Cells along the X axis.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells along the Z axis.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw code at `(column, row)`. Panics on out-of-range indices; the
    /// grid dimensions are public, callers iterate within them.
    pub fn get(&self, column: usize, row: usize) -> i32 {
        assert!(
            column < self.width && row < self.height,
            "tile ({}, {}) outside {}x{} map",
            column,
            row,
            self.width,
            self.height
        );
        self.tiles[row * self.width + column]
    }

    /// The classified kind at `(column, row)`, if the code is recognized.
    pub fn kind(&self, column: usize, row: usize) -> Option<TileKind> {
        TileKind::classify(self.get(column, row))
    }
}
