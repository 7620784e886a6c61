//! The authoritative world state.
//!
//! [`GameState`] is an ordinary value: build one per session and pass it
//! (or a reference to it) to whatever system needs it.

use std::collections::{BTreeMap, BTreeSet};

use tactica_core::{Grid, GridPosition, TileCatalog};
use tactica_paths::{find_path, reachable_positions};

use crate::error::Result;
use crate::model::{Character, Clue, Direction, GameMap};

/// Characters, the active map and clue progress.
#[derive(Debug, Default)]
pub struct GameState {
    characters: BTreeMap<String, Character>,
    player_id: Option<String>,
    current: Option<ActiveMap>,
    clues: BTreeMap<String, Clue>,
    collected: BTreeSet<String>,
}

#[derive(Debug)]
struct ActiveMap {
    map: GameMap,
    grid: Grid,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and return to a freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Add or replace a character, keyed by its id.
    pub fn add_character(&mut self, character: Character) {
        self.characters.insert(character.id.clone(), character);
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// All characters in id order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    /// Non-player characters in id order.
    pub fn npcs(&self) -> impl Iterator<Item = &Character> {
        self.characters.values().filter(|c| !c.is_player)
    }

    /// Remove a character. Removing the player clears the player selection.
    pub fn remove_character(&mut self, id: &str) -> Option<Character> {
        if self.player_id.as_deref() == Some(id) {
            self.player_id = None;
        }
        self.characters.remove(id)
    }

    /// Select the player character. Unknown ids are ignored; returns
    /// whether the selection changed.
    pub fn set_player(&mut self, id: &str) -> bool {
        if !self.characters.contains_key(id) {
            log::warn!("set_player: no character '{id}'");
            return false;
        }
        self.player_id = Some(id.to_string());
        true
    }

    pub fn player(&self) -> Option<&Character> {
        self.player_id.as_deref().and_then(|id| self.characters.get(id))
    }

    /// Teleport a character. Returns `false` if it does not exist.
    pub fn update_character_position(&mut self, id: &str, pos: GridPosition) -> bool {
        match self.characters.get_mut(id) {
            Some(c) => {
                c.position = pos;
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Map
    // -----------------------------------------------------------------------

    /// Build the grid for `map` and make it the active map, replacing any
    /// previous one. Registered characters listed in the map's placements
    /// are moved to their starting cells.
    pub fn load_map(&mut self, map: GameMap, catalog: &TileCatalog, tile_size: u32) -> Result<()> {
        let grid = map.build_grid(catalog, tile_size)?;
        for p in &map.characters {
            match self.characters.get_mut(&p.character_id) {
                Some(c) => {
                    c.position = p.position;
                    c.direction = p.direction;
                }
                None => log::warn!(
                    "map '{}' places unknown character '{}'",
                    map.id,
                    p.character_id
                ),
            }
        }
        log::info!("active map is now '{}'", map.id);
        self.current = Some(ActiveMap { map, grid });
        Ok(())
    }

    pub fn current_map(&self) -> Option<&GameMap> {
        self.current.as_ref().map(|a| &a.map)
    }

    /// Grid of the active map.
    pub fn grid(&self) -> Option<&Grid> {
        self.current.as_ref().map(|a| &a.grid)
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Cells the character can reach this turn with its movement stat.
    /// Empty when the character or the map is missing.
    pub fn movement_range(&self, id: &str) -> Vec<GridPosition> {
        match (self.characters.get(id), self.grid()) {
            (Some(c), Some(grid)) => {
                reachable_positions(grid, c.position, c.stats.movement as f64)
            }
            _ => Vec::new(),
        }
    }

    /// Cheapest path to `goal` within the character's movement budget.
    /// Empty means the move is not allowed this turn.
    pub fn plan_move(&self, id: &str, goal: GridPosition) -> Vec<GridPosition> {
        match (self.characters.get(id), self.grid()) {
            (Some(c), Some(grid)) => {
                find_path(grid, c.position, goal, Some(c.stats.movement as f64))
            }
            _ => Vec::new(),
        }
    }

    /// Move a character along its planned path to `goal`. The character
    /// ends up facing along the last step. Returns `false`, leaving the
    /// state untouched, when the move is not allowed.
    pub fn move_character(&mut self, id: &str, goal: GridPosition) -> bool {
        let path = self.plan_move(id, goal);
        let Some(c) = self.characters.get_mut(id) else {
            return false;
        };
        if path.is_empty() {
            log::debug!("{id} cannot reach {goal} this turn");
            return false;
        }
        if let [.., from, to] = path[..] {
            if let Some(d) = Direction::between(from, to) {
                c.direction = d;
            }
        }
        c.position = goal;
        true
    }

    /// Take one step. A blocked step still turns the character to face
    /// `direction`. Returns whether the character moved.
    pub fn step_character(&mut self, id: &str, direction: Direction) -> bool {
        let Some(grid) = self.current.as_ref().map(|a| &a.grid) else {
            return false;
        };
        let Some(c) = self.characters.get_mut(id) else {
            return false;
        };
        c.direction = direction;
        let Some(next) = direction.step(c.position).filter(|&n| grid.is_walkable(n)) else {
            return false;
        };
        c.position = next;
        true
    }

    // -----------------------------------------------------------------------
    // Clues
    // -----------------------------------------------------------------------

    pub fn add_clue(&mut self, clue: Clue) {
        self.clues.insert(clue.id.clone(), clue);
    }

    pub fn clue(&self, id: &str) -> Option<&Clue> {
        self.clues.get(id)
    }

    /// Mark a known clue as collected. Returns `true` only the first time.
    pub fn collect_clue(&mut self, id: &str) -> bool {
        if !self.clues.contains_key(id) {
            return false;
        }
        let fresh = self.collected.insert(id.to_string());
        if fresh {
            log::info!("clue collected: {id}");
            if let Some(active) = self.current.as_mut() {
                for loc in active.map.clues.iter_mut().filter(|l| l.clue_id == id) {
                    loc.revealed = true;
                }
            }
        }
        fresh
    }

    pub fn has_clue(&self, id: &str) -> bool {
        self.collected.contains(id)
    }

    /// Collected clues in id order.
    pub fn collected_clues(&self) -> impl Iterator<Item = &Clue> {
        self.collected.iter().filter_map(|id| self.clues.get(id))
    }
}
