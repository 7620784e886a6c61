//! Game-side layer over the tactica grid and pathfinding crates.
//!
//! - [`model`]: characters, clues, triggers and map definitions, all
//!   loadable from JSON
//! - [`loader`]: map and tile catalog loading
//! - [`content`]: the built-in catalog, maps and cast
//! - [`state`]: [`GameState`], the character registry plus the active map
//!   and the movement queries that run against it

pub mod content;
pub mod error;
pub mod loader;
pub mod model;
pub mod state;

pub use error::{GameError, Result};
pub use loader::{load_catalog_json, load_map_file, load_map_json};
pub use model::{
    Character, CharacterClass, CharacterStats, Clue, ClueLocation, ClueType, Direction, GameMap,
    Trigger, TriggerType, UnitPlacement,
};
pub use state::GameState;
