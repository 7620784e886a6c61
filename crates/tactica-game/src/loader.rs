//! JSON loaders for map definitions and tile catalogs.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tactica_core::{Tile, TileCatalog, TileKind};

use crate::error::{GameError, Result};
use crate::model::GameMap;

/// Catalog entry as written in JSON. A missing `movementCost` means the
/// tile can never be entered (JSON has no infinity).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TileDef {
    id: u16,
    #[serde(rename = "type")]
    kind: TileKind,
    #[serde(default)]
    movement_cost: Option<f64>,
    #[serde(default)]
    sprite: String,
}

impl From<TileDef> for Tile {
    fn from(d: TileDef) -> Self {
        Tile::new(
            d.id,
            d.kind,
            d.movement_cost.unwrap_or(Tile::IMPASSABLE),
            d.sprite,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDef {
    default_id: u16,
    tiles: Vec<TileDef>,
}

/// Parse a map definition.
pub fn load_map_json(json: &str) -> Result<GameMap> {
    let map: GameMap = serde_json::from_str(json)?;
    log::debug!("parsed map '{}' ({}x{})", map.id, map.width, map.height);
    Ok(map)
}

/// Read and parse a map definition file.
pub fn load_map_file(path: impl AsRef<Path>) -> Result<GameMap> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_map_json(&content)
}

/// Parse a tile catalog: `{ "defaultId": 0, "tiles": [ ... ] }`.
pub fn load_catalog_json(json: &str) -> Result<TileCatalog> {
    let def: CatalogDef = serde_json::from_str(json)?;
    let catalog = TileCatalog::new(def.tiles.into_iter().map(Tile::from), def.default_id)?;
    log::debug!("parsed tile catalog with {} tiles", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactica_core::GridError;

    #[test]
    fn catalog_missing_cost_is_impassable() {
        let c = load_catalog_json(
            r#"{
                "defaultId": 0,
                "tiles": [
                    { "id": 0, "type": "ground", "movementCost": 1, "sprite": "tiles/grass.png" },
                    { "id": 6, "type": "obstacle", "sprite": "tiles/wall.png" },
                    { "id": 9, "type": { "custom": 2 }, "movementCost": 4 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(c.len(), 3);
        assert!(c.get(6).unwrap().is_impassable_cost());
        assert_eq!(c.get(9).unwrap().kind, TileKind::Custom(2));
        assert_eq!(c.get(9).unwrap().movement_cost, 4.0);
    }

    #[test]
    fn catalog_errors_propagate() {
        let err = load_catalog_json(r#"{ "defaultId": 3, "tiles": [] }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::Grid(GridError::UnknownDefaultTile(3))
        ));
        assert!(matches!(
            load_catalog_json("{").unwrap_err(),
            GameError::Json(_)
        ));
    }

    #[test]
    fn map_with_defaults() {
        let map = load_map_json(
            r#"{ "id": "tiny", "name": "Tiny", "width": 2, "height": 1, "tiles": [[0, 6]] }"#,
        )
        .unwrap();
        assert_eq!(map.tiles, vec![vec![0, 6]]);
        assert!(map.characters.is_empty());
        assert!(map.triggers.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_map_file("/definitely/not/here.json").unwrap_err();
        match err {
            GameError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
