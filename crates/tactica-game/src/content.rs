//! Built-in content: the standard tile catalog, sample maps, characters
//! and clues.

use serde_json::json;
use tactica_core::{GridPosition, Tile, TileCatalog, TileKind};

use crate::error::{GameError, Result};
use crate::model::{
    Character, CharacterClass, CharacterStats, Clue, ClueLocation, ClueType, Direction, GameMap,
    Trigger, TriggerType, UnitPlacement,
};

// Tile ids of the standard catalog.
pub const GRASS: u16 = 0;
pub const DIRT: u16 = 1;
pub const STONE: u16 = 2;
pub const WATER: u16 = 3;
pub const FOREST: u16 = 4;
pub const MOUNTAIN: u16 = 5;
pub const WALL: u16 = 6;

/// The standard terrain set. Unknown ids fall back to grass.
pub fn standard_catalog() -> Result<TileCatalog> {
    let tiles = [
        Tile::new(GRASS, TileKind::Ground, 1.0, "tiles/grass.png"),
        Tile::new(DIRT, TileKind::Ground, 1.0, "tiles/dirt.png"),
        Tile::new(STONE, TileKind::Ground, 1.0, "tiles/stone.png"),
        Tile::new(WATER, TileKind::Water, 2.0, "tiles/water.png"),
        Tile::new(FOREST, TileKind::Forest, 2.0, "tiles/forest.png"),
        Tile::new(MOUNTAIN, TileKind::Mountain, 3.0, "tiles/mountain.png"),
        Tile::obstacle(WALL, "tiles/wall.png"),
    ];
    Ok(TileCatalog::new(tiles, GRASS)?)
}

fn placement(id: &str, x: i32, y: i32, direction: Direction) -> UnitPlacement {
    UnitPlacement {
        character_id: id.to_string(),
        position: GridPosition::new(x, y),
        direction,
    }
}

fn hidden_clue(id: &str, x: i32, y: i32) -> ClueLocation {
    ClueLocation {
        clue_id: id.to_string(),
        position: GridPosition::new(x, y),
        revealed: false,
    }
}

fn trigger(id: &str, kind: TriggerType, x: i32, y: i32, action: &str, data: serde_json::Value) -> Trigger {
    Trigger {
        id: id.to_string(),
        kind,
        position: GridPosition::new(x, y),
        action: action.to_string(),
        data: data.as_object().cloned().unwrap_or_default(),
    }
}

/// Warehouse crime scene: walled room, crate stacks, a gap in the south
/// wall.
pub fn crime_scene() -> GameMap {
    const W: u16 = WALL;
    const C: u16 = FOREST;
    const F: u16 = GRASS;
    GameMap {
        id: "crime_scene".into(),
        name: "Crime Scene - Warehouse".into(),
        width: 12,
        height: 10,
        tiles: vec![
            vec![W, W, W, W, W, W, W, W, W, W, W, W],
            vec![W, F, F, F, F, F, F, F, F, F, F, W],
            vec![W, F, F, F, C, C, F, F, F, F, F, W],
            vec![W, F, F, F, C, C, F, F, F, F, F, W],
            vec![W, F, F, F, F, F, F, F, C, F, F, W],
            vec![W, F, F, F, F, F, F, F, C, F, F, W],
            vec![W, F, F, F, F, F, F, F, F, F, F, W],
            vec![W, F, C, F, F, F, F, F, F, F, F, W],
            vec![W, F, F, F, F, F, F, F, F, F, F, W],
            vec![W, W, W, W, W, F, F, W, W, W, W, W],
        ],
        characters: vec![
            placement("detective", 2, 8, Direction::Up),
            placement("officer", 9, 2, Direction::Down),
        ],
        triggers: vec![trigger(
            "examine_crates",
            TriggerType::OnInteract,
            4,
            2,
            "examineObject",
            json!({ "clueId": "clue_shipping_label" }),
        )],
        clues: vec![
            hidden_clue("clue_footprints", 3, 5),
            hidden_clue("clue_broken_glass", 8, 4),
        ],
    }
}

/// The detective's office: an open 15x12 floor.
pub fn detective_office() -> GameMap {
    GameMap {
        id: "detective_office".into(),
        name: "Detective Office".into(),
        width: 15,
        height: 12,
        tiles: vec![vec![GRASS; 15]; 12],
        characters: vec![
            placement("detective", 7, 10, Direction::Up),
            placement("journalist", 3, 3, Direction::Down),
        ],
        triggers: vec![
            trigger(
                "examine_desk",
                TriggerType::OnInteract,
                7,
                4,
                "examineObject",
                json!({ "description": "Your cluttered desk with case files." }),
            ),
            trigger(
                "talk_to_journalist",
                TriggerType::OnInteract,
                3,
                3,
                "startDialogue",
                json!({ "dialogueId": "journalist_intro" }),
            ),
        ],
        clues: Vec::new(),
    }
}

/// Ids of the built-in maps.
pub const MAP_IDS: [&str; 2] = ["crime_scene", "detective_office"];

/// Look up a built-in map.
pub fn map_by_id(id: &str) -> Result<GameMap> {
    match id {
        "crime_scene" => Ok(crime_scene()),
        "detective_office" => Ok(detective_office()),
        other => Err(GameError::UnknownMap(other.to_string())),
    }
}

fn character(
    id: &str,
    name: &str,
    class: CharacterClass,
    speed: u32,
    movement: u32,
    is_player: bool,
    clues: &[&str],
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        class,
        stats: CharacterStats { speed, movement },
        position: GridPosition::ZERO,
        direction: Direction::Down,
        sprite: format!("characters/{id}"),
        is_player,
        dialogue_id: (!is_player).then(|| format!("{id}_intro")),
        clues: clues.iter().map(|c| c.to_string()).collect(),
    }
}

/// Character templates, player first.
pub fn characters() -> Vec<Character> {
    vec![
        character("detective", "Detective Morgan", CharacterClass::Detective, 12, 5, true, &[]),
        character("journalist", "Sarah Chen", CharacterClass::Journalist, 10, 4, false, &["clue_newspaper"]),
        character("scientist", "Dr. Harris", CharacterClass::Scientist, 8, 4, false, &["clue_lab_report"]),
        character("officer", "Officer Blake", CharacterClass::Officer, 11, 5, false, &["clue_police_report"]),
    ]
}

fn clue(id: &str, name: &str, kind: ClueType, description: &str, chars: &[&str], related: &[&str]) -> Clue {
    Clue {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        related_characters: chars.iter().map(|s| s.to_string()).collect(),
        related_clues: related.iter().map(|s| s.to_string()).collect(),
    }
}

/// Every clue of the sample case.
pub fn clues() -> Vec<Clue> {
    use ClueType::*;
    vec![
        clue(
            "clue_footprints",
            "Muddy Footprints",
            Physical,
            "Fresh muddy footprints leading toward the back of the warehouse. Size 11 boot print.",
            &[],
            &["clue_shipping_label"],
        ),
        clue(
            "clue_broken_glass",
            "Broken Glass",
            Physical,
            "Shattered glass near the window. Some pieces have traces of blood.",
            &[],
            &["clue_footprints"],
        ),
        clue(
            "clue_shipping_label",
            "Shipping Label",
            Document,
            "A torn shipping label from 'Maritime Imports Ltd.' dated three days ago.",
            &["journalist"],
            &[],
        ),
        clue(
            "clue_newspaper",
            "Newspaper Article",
            Document,
            "Article about recent smuggling operations in the harbor district.",
            &["journalist"],
            &["clue_shipping_label"],
        ),
        clue(
            "clue_lab_report",
            "Laboratory Report",
            Document,
            "Chemical analysis report showing traces of an unusual compound.",
            &["scientist"],
            &["clue_broken_glass"],
        ),
        clue(
            "clue_police_report",
            "Police Report",
            Document,
            "Initial incident report filed by Officer Blake.",
            &["officer"],
            &[],
        ),
        clue(
            "clue_witness_testimony",
            "Witness Testimony",
            Testimony,
            "Statement from a nearby resident who heard suspicious noises around midnight.",
            &[],
            &["clue_footprints"],
        ),
    ]
}
