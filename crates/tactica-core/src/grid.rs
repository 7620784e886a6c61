//! The [`Grid`] type: a fixed-size rectangular tile map.
//!
//! A grid is built in two phases: [`Grid::new`] records the dimensions and
//! [`Grid::set_tiles`] loads the terrain. Until tiles are loaded no cell is
//! readable, so every cell reports as unwalkable.

use crate::error::{GridError, Result};
use crate::geom::{GridPosition, Range, WorldPosition, positions_equal};
use crate::tile::TileRef;

/// Pixel size of a tile when none is given.
pub const DEFAULT_TILE_SIZE: u32 = 48;

/// Orthogonal neighbor offsets in evaluation order: up, down, left, right.
const DIRS: [GridPosition; 4] = [
    GridPosition::new(0, -1),
    GridPosition::new(0, 1),
    GridPosition::new(-1, 0),
    GridPosition::new(1, 0),
];

/// Spatial index and terrain query surface over a rectangular tile map.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Range,
    tile_size: u32,
    // Row-major, empty until `set_tiles`.
    tiles: Vec<TileRef>,
}

impl Grid {
    /// Create an empty grid. Negative dimensions are clamped to zero and a
    /// zero tile size is treated as one pixel.
    pub fn new(width: i32, height: i32, tile_size: u32) -> Self {
        Self {
            bounds: Range::new(0, 0, width.max(0), height.max(0)),
            tile_size: tile_size.max(1),
            tiles: Vec::new(),
        }
    }

    /// Create an empty grid with [`DEFAULT_TILE_SIZE`].
    pub fn with_default_tile_size(width: i32, height: i32) -> Self {
        Self::new(width, height, DEFAULT_TILE_SIZE)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether tile data has been loaded.
    #[inline]
    pub fn is_populated(&self) -> bool {
        !self.tiles.is_empty() || self.bounds.is_empty()
    }

    /// Replace the tile storage with `rows`, indexed `[y][x]`.
    ///
    /// The matrix must have exactly `height` rows of exactly `width` tiles.
    /// On a mismatch nothing is changed and the error names the offending
    /// dimension.
    pub fn set_tiles(&mut self, rows: Vec<Vec<TileRef>>) -> Result<()> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        if rows.len() != height {
            return Err(GridError::RowCount {
                expected: height,
                actual: rows.len(),
            });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::ColumnCount {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        self.tiles = rows.into_iter().flatten().collect();
        log::debug!("grid {}x{} populated", width, height);
        Ok(())
    }

    /// The tile at `pos`, or `None` when `pos` is out of bounds or the grid
    /// has not been populated.
    #[inline]
    pub fn tile(&self, pos: GridPosition) -> Option<&TileRef> {
        self.bounds.index(pos).and_then(|i| self.tiles.get(i))
    }

    /// Bounds check only.
    #[inline]
    pub fn is_valid_position(&self, pos: GridPosition) -> bool {
        self.bounds.contains(pos)
    }

    /// In bounds and not an obstacle. Movement cost plays no part.
    #[inline]
    pub fn is_walkable(&self, pos: GridPosition) -> bool {
        self.tile(pos).is_some_and(|t| t.is_walkable())
    }

    /// Pixel-space center of the tile at `pos`.
    pub fn grid_to_world(&self, pos: GridPosition) -> WorldPosition {
        let ts = self.tile_size as f32;
        WorldPosition::new(pos.x as f32 * ts + ts / 2.0, pos.y as f32 * ts + ts / 2.0)
    }

    /// Tile containing the pixel `(x, y)`. The result is not clamped to the
    /// grid; validate it with [`is_valid_position`](Grid::is_valid_position).
    pub fn world_to_grid(&self, x: f32, y: f32) -> GridPosition {
        let ts = self.tile_size as f32;
        GridPosition::new((x / ts).floor() as i32, (y / ts).floor() as i32)
    }

    /// Manhattan distance, saturating at `i32::MAX` for far-apart
    /// positions.
    #[inline]
    pub fn distance(&self, a: GridPosition, b: GridPosition) -> i32 {
        a.manhattan(b)
    }

    /// Append the in-bounds orthogonal neighbors of `pos` to `buf`, in the
    /// order up, down, left, right.
    pub fn adjacent_into(&self, pos: GridPosition, buf: &mut Vec<GridPosition>) {
        for d in DIRS {
            // Neighbors past the i32 range cannot be in bounds.
            if let Some(n) = pos.checked_shift(d.x, d.y) {
                if self.is_valid_position(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// The in-bounds orthogonal neighbors of `pos` (up, down, left, right).
    pub fn adjacent_positions(&self, pos: GridPosition) -> Vec<GridPosition> {
        let mut buf = Vec::with_capacity(4);
        self.adjacent_into(pos, &mut buf);
        buf
    }

    /// Every in-bounds position within Manhattan distance `range` of
    /// `center`, in row-major order. Terrain is ignored.
    pub fn positions_in_range(&self, center: GridPosition, range: i32) -> Vec<GridPosition> {
        self.bounds
            .iter()
            .filter(|&p| self.distance(center, p) <= range)
            .collect()
    }

    #[inline]
    pub fn positions_equal(a: GridPosition, b: GridPosition) -> bool {
        positions_equal(a, b)
    }
}
