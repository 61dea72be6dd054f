//! Instance placement: expanding the tile grid into world-space offsets.

use cgmath::{Point3, Vector3};

use crate::maze::tilemap::{MapError, TileKind, TileMap};

/// World units per map cell.
pub const TILE_SPAN: f32 = 2.0;
/// Floor plates sit below the eye line.
pub const FLOOR_Y: f32 = -2.0;
/// Ceiling plates sit above it.
pub const CEILING_Y: f32 = 1.0;
/// The player's eye height.
pub const EYE_Y: f32 = 0.0;

/// Per-category instance offsets derived from one scan over the grid, plus
/// the player spawn point.
///
/// Offsets appear in grid-scan order (all rows of column 0, then column 1,
/// and so on). Cell `(column, row)` maps to world `(column * TILE_SPAN, y,
/// row * TILE_SPAN)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeLayout {
    pub walls: Vec<Vector3<f32>>,
    pub floors: Vec<Vector3<f32>>,
    pub ceilings: Vec<Vector3<f32>>,
    pub spawn: Point3<f32>,
}

impl MazeLayout {
    /// Walk the grid once and collect the offsets of every placed instance.
    ///
    /// Every cell contributes to exactly one of {wall} or {floor + ceiling};
    /// unrecognized codes contribute nothing. The map must contain exactly
    /// one player start tile, which becomes the spawn point (and a regular
    /// floor/ceiling cell besides).
    pub fn from_map(map: &TileMap) -> Result<Self, MapError> {
        let mut walls = Vec::new();
        let mut floors = Vec::new();
        let mut ceilings = Vec::new();
        let mut spawn = None;

        for column in 0..map.width() {
            for row in 0..map.height() {
                let x = column as f32 * TILE_SPAN;
                let z = row as f32 * TILE_SPAN;
                match map.kind(column, row) {
                    Some(TileKind::Wall) => {
                        walls.push(Vector3::new(x, 0.0, z));
                    }
                    Some(TileKind::PlayerStart) => {
                        if spawn.is_some() {
                            return Err(MapError::ExtraPlayerStart { column, row });
                        }
                        spawn = Some(Point3::new(x, EYE_Y, z));

                        floors.push(Vector3::new(x, FLOOR_Y, z));
                        ceilings.push(Vector3::new(x, CEILING_Y, z));
                    }
                    Some(TileKind::EmptySpace) => {
                        floors.push(Vector3::new(x, FLOOR_Y, z));
                        ceilings.push(Vector3::new(x, CEILING_Y, z));
                    }
                    None => (),
                }
            }
        }

        let spawn = spawn.ok_or(MapError::MissingPlayerStart)?;

        Ok(Self {
            walls,
            floors,
            ceilings,
            spawn,
        })
    }
}
