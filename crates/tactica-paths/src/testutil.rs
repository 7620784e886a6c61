//! Map builders shared by the unit tests.

use std::rc::Rc;

use tactica_core::{Grid, GridPosition, Tile, TileKind};

pub(crate) fn p(x: i32, y: i32) -> GridPosition {
    GridPosition::new(x, y)
}

/// Build a populated grid from rows of ASCII cells:
/// `.` ground (1), `~` water (2), `f` forest (2), `^` mountain (3),
/// `#` wall, and a digit `n` for walkable terrain costing `n`.
pub(crate) fn grid_from_ascii(rows: &[&str]) -> Grid {
    let ground = Rc::new(Tile::new(0, TileKind::Ground, 1.0, "ground"));
    let water = Rc::new(Tile::new(3, TileKind::Water, 2.0, "water"));
    let forest = Rc::new(Tile::new(4, TileKind::Forest, 2.0, "forest"));
    let mountain = Rc::new(Tile::new(5, TileKind::Mountain, 3.0, "mountain"));
    let wall = Rc::new(Tile::obstacle(6, "wall"));

    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let tiles = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| match ch {
                    '.' => Rc::clone(&ground),
                    '~' => Rc::clone(&water),
                    'f' => Rc::clone(&forest),
                    '^' => Rc::clone(&mountain),
                    '#' => Rc::clone(&wall),
                    d if d.is_ascii_digit() => {
                        let n = d.to_digit(10).unwrap_or(1);
                        Rc::new(Tile::new(100 + n as u16, TileKind::Custom(n as u16), n as f64, "custom"))
                    }
                    other => panic!("unknown map cell {other:?}"),
                })
                .collect()
        })
        .collect();
    let mut grid = Grid::new(width as i32, height as i32, 48);
    grid.set_tiles(tiles).expect("test map rows must be equal length");
    grid
}
