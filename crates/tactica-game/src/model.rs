//! Plain data shared by the game systems: characters, clues and map
//! definitions.
//!
//! Field names serialize in camelCase so map files written for the web
//! client load unchanged.

use serde::{Deserialize, Serialize};
use tactica_core::{Grid, GridPosition, TileCatalog};

use crate::error::{GameError, Result};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Facing and single-step movement direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The position one step from `pos`, or `None` past the `i32` range.
    pub const fn step(self, pos: GridPosition) -> Option<GridPosition> {
        let (dx, dy) = self.delta();
        pos.checked_shift(dx, dy)
    }

    /// Direction of the step `from → to`, if the two are orthogonally
    /// adjacent.
    pub fn between(from: GridPosition, to: GridPosition) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.step(from) == Some(to))
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Detective,
    Journalist,
    Scientist,
    Officer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub speed: u32,
    /// Movement budget per turn, in cost units.
    pub movement: u32,
}

/// A player character or NPC.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub stats: CharacterStats,
    pub position: GridPosition,
    #[serde(default)]
    pub direction: Direction,
    pub sprite: String,
    #[serde(default)]
    pub is_player: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue_id: Option<String>,
    /// Ids of clues this character knows about.
    #[serde(default)]
    pub clues: Vec<String>,
}

impl Character {
    /// A copy of this template standing at `position`.
    pub fn at(&self, position: GridPosition, direction: Direction) -> Self {
        Self {
            position,
            direction,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Clues
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueType {
    Physical,
    Testimony,
    Document,
    Photograph,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ClueType,
    #[serde(default)]
    pub related_characters: Vec<String>,
    #[serde(default)]
    pub related_clues: Vec<String>,
}

/// A clue hidden somewhere on a map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueLocation {
    pub clue_id: String,
    pub position: GridPosition,
    #[serde(default)]
    pub revealed: bool,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Where a character stands when a map starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPlacement {
    pub character_id: String,
    pub position: GridPosition,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    OnEnter,
    OnInteract,
    OnClueFound,
    OnDialogueComplete,
}

/// A map event bound to a cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TriggerType,
    pub position: GridPosition,
    /// Action identifier, e.g. `startDialogue` or `examineObject`.
    pub action: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// A map definition: dimensions, a row-major tile-id matrix and what sits
/// on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Tile ids indexed `[y][x]`, resolved through a [`TileCatalog`].
    pub tiles: Vec<Vec<u16>>,
    #[serde(default)]
    pub characters: Vec<UnitPlacement>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub clues: Vec<ClueLocation>,
}

/// Largest number of cells a map may declare.
pub const MAX_MAP_CELLS: u64 = 1 << 20;

impl GameMap {
    /// Resolve the tile matrix through `catalog` and build a populated
    /// grid.
    ///
    /// Fails with [`GameError::MapDimensions`] when the declared size does
    /// not fit a grid or exceeds [`MAX_MAP_CELLS`].
    pub fn build_grid(&self, catalog: &TileCatalog, tile_size: u32) -> Result<Grid> {
        let too_large = u64::from(self.width) * u64::from(self.height) > MAX_MAP_CELLS;
        let (Ok(width), Ok(height), false) = (
            i32::try_from(self.width),
            i32::try_from(self.height),
            too_large,
        ) else {
            return Err(GameError::MapDimensions {
                id: self.id.clone(),
                width: self.width,
                height: self.height,
            });
        };
        let (w, h) = (self.width as usize, self.height as usize);
        let mut grid = Grid::new(width, height, tile_size);
        grid.set_tiles(catalog.tile_rows(w, h, &self.tiles))?;
        log::info!("map '{}' built: {}x{}", self.id, w, h);
        Ok(grid)
    }

    /// Triggers bound to `pos`.
    pub fn triggers_at(&self, pos: GridPosition) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter().filter(move |t| t.position == pos)
    }

    /// The unrevealed clue hidden at `pos`, if any.
    pub fn hidden_clue_at(&self, pos: GridPosition) -> Option<&ClueLocation> {
        self.clues.iter().find(|c| c.position == pos && !c.revealed)
    }
}
