//! **tactica-core**: tile-grid primitives for the tactica games.
//!
//! This crate provides the spatial layer shared by every other tactica
//! crate: grid positions, terrain tiles and their catalog, and the
//! [`Grid`] that answers bounds, walkability, adjacency, distance and
//! coordinate-conversion queries.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::GridError;
pub use geom::{GridPosition, Range, RangeIter, WorldPosition, positions_equal};
pub use grid::{DEFAULT_TILE_SIZE, Grid};
pub use tile::{Tile, TileCatalog, TileKind, TileRef};
