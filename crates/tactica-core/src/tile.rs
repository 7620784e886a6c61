//! Terrain descriptors and the immutable tile catalog.
//!
//! A [`Tile`] is template data shared by every cell that uses it; the grid
//! stores [`TileRef`] handles rather than per-cell copies.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{GridError, Result};

/// Shared handle to a catalog tile.
pub type TileRef = Rc<Tile>;

/// Terrain class of a tile.
///
/// Only [`TileKind::Obstacle`] affects walkability. `Custom` lets game code
/// introduce its own classes without touching this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TileKind {
    Ground,
    Obstacle,
    Water,
    Forest,
    Mountain,
    Custom(u16),
}

impl TileKind {
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, TileKind::Obstacle)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Ground => f.write_str("ground"),
            TileKind::Obstacle => f.write_str("obstacle"),
            TileKind::Water => f.write_str("water"),
            TileKind::Forest => f.write_str("forest"),
            TileKind::Mountain => f.write_str("mountain"),
            TileKind::Custom(n) => write!(f, "custom({n})"),
        }
    }
}

/// Terrain at one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub id: u16,
    pub kind: TileKind,
    /// Cost a unit pays to enter this tile. [`Tile::IMPASSABLE`] marks
    /// terrain that can never be entered.
    pub movement_cost: f64,
    /// Opaque asset reference for the renderer.
    pub sprite: String,
}

impl Tile {
    /// The "infinite" movement cost sentinel.
    pub const IMPASSABLE: f64 = f64::INFINITY;

    pub fn new(id: u16, kind: TileKind, movement_cost: f64, sprite: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            movement_cost,
            sprite: sprite.into(),
        }
    }

    /// An obstacle tile with impassable cost.
    pub fn obstacle(id: u16, sprite: impl Into<String>) -> Self {
        Self::new(id, TileKind::Obstacle, Self::IMPASSABLE, sprite)
    }

    /// Walkability depends on the kind only, never on the cost.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        !self.kind.is_obstacle()
    }

    #[inline]
    pub fn is_impassable_cost(&self) -> bool {
        self.movement_cost == Self::IMPASSABLE
    }
}

// ---------------------------------------------------------------------------
// TileCatalog
// ---------------------------------------------------------------------------

/// Immutable id → tile lookup table, built once at startup.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: BTreeMap<u16, TileRef>,
    default_id: u16,
}

impl TileCatalog {
    /// Build a catalog. `default_id` names the tile used for missing or
    /// unknown ids when expanding tile-id matrices.
    pub fn new(tiles: impl IntoIterator<Item = Tile>, default_id: u16) -> Result<Self> {
        let mut map = BTreeMap::new();
        for tile in tiles {
            let id = tile.id;
            if map.insert(id, Rc::new(tile)).is_some() {
                return Err(GridError::DuplicateTileId(id));
            }
        }
        if !map.contains_key(&default_id) {
            return Err(GridError::UnknownDefaultTile(default_id));
        }
        Ok(Self {
            tiles: map,
            default_id,
        })
    }

    /// Look up a tile by id.
    pub fn get(&self, id: u16) -> Option<TileRef> {
        self.tiles.get(&id).cloned()
    }

    /// The fallback tile.
    pub fn default_tile(&self) -> TileRef {
        // Presence is checked in `new`.
        Rc::clone(&self.tiles[&self.default_id])
    }

    pub fn default_id(&self) -> u16 {
        self.default_id
    }

    /// Tiles in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &TileRef> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Expand a row-major tile-id matrix into `height` rows of `width`
    /// tiles.
    ///
    /// Cells the matrix does not cover become the default tile, and so do
    /// ids the catalog does not know (logged at `warn`). The result always
    /// has the requested shape.
    pub fn tile_rows(&self, width: usize, height: usize, ids: &[Vec<u16>]) -> Vec<Vec<TileRef>> {
        let default = self.default_tile();
        let mut rows = Vec::with_capacity(height);
        for y in 0..height {
            let mut row = Vec::with_capacity(width);
            for x in 0..width {
                let tile = match ids.get(y).and_then(|r| r.get(x)) {
                    Some(&id) => self.get(id).unwrap_or_else(|| {
                        log::warn!("unknown tile id {id} at ({x}, {y}), using default");
                        Rc::clone(&default)
                    }),
                    None => Rc::clone(&default),
                };
                row.push(tile);
            }
            rows.push(row);
        }
        rows
    }
}
