//! `pathviz`: draw a map with a planned path and a movement range.
//!
//! ```text
//! pathviz --map crime_scene --from 2,8 --to 10,1 --movement 5
//! pathviz --file my_map.json --to 3,4 -v
//! ```
//!
//! Legend: `@` start, `X` goal, `*` path, `+` reachable this turn. Terrain
//! is drawn as `.` ground, `~` water, `f` forest, `^` mountain, `#` wall.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use tactica_core::{Grid, GridPosition, TileKind};
use tactica_game::{GameMap, content, load_map_file};
use tactica_paths::{find_path, path_cost, reachable_positions};

#[derive(Parser)]
#[command(name = "pathviz")]
#[command(about = "Render a tactica map with a path and a movement range")]
#[command(version)]
struct Cli {
    /// Built-in map id
    #[arg(short, long, default_value = "crime_scene")]
    map: String,

    /// Load the map from a JSON file instead of the built-in set
    #[arg(short, long, conflicts_with = "map")]
    file: Option<PathBuf>,

    /// Start cell as `x,y` (defaults to the first unit placement)
    #[arg(long, value_parser = parse_position)]
    from: Option<GridPosition>,

    /// Goal cell as `x,y`
    #[arg(long, value_parser = parse_position)]
    to: Option<GridPosition>,

    /// Movement budget for the path and the reachable overlay
    #[arg(long)]
    movement: Option<f64>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_position(s: &str) -> Result<GridPosition, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(GridPosition::new(x, y))
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn terrain_glyph(grid: &Grid, pos: GridPosition) -> char {
    match grid.tile(pos).map(|t| t.kind) {
        Some(TileKind::Ground) => '.',
        Some(TileKind::Water) => '~',
        Some(TileKind::Forest) => 'f',
        Some(TileKind::Mountain) => '^',
        Some(TileKind::Obstacle) => '#',
        Some(TileKind::Custom(_)) => '?',
        None => ' ',
    }
}

fn render(
    grid: &Grid,
    start: GridPosition,
    goal: Option<GridPosition>,
    path: &[GridPosition],
    reach: &HashSet<GridPosition>,
) -> String {
    let on_path: HashSet<GridPosition> = path.iter().copied().collect();
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = GridPosition::new(x, y);
            let c = if pos == start {
                '@'
            } else if Some(pos) == goal {
                'X'
            } else if on_path.contains(&pos) {
                '*'
            } else if reach.contains(&pos) {
                '+'
            } else {
                terrain_glyph(grid, pos)
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let map: GameMap = match &cli.file {
        Some(path) => load_map_file(path)?,
        None => content::map_by_id(&cli.map)?,
    };
    let grid = map.build_grid(&content::standard_catalog()?, tactica_core::DEFAULT_TILE_SIZE)?;
    info!("{}: {}x{}", map.name, grid.width(), grid.height());

    let start = cli
        .from
        .or_else(|| map.characters.first().map(|p| p.position))
        .unwrap_or(GridPosition::ZERO);

    let path = match cli.to {
        Some(goal) => {
            let path = find_path(&grid, start, goal, cli.movement);
            if path.is_empty() {
                warn!("no path from {start} to {goal}");
            }
            path
        }
        None => Vec::new(),
    };
    let reach: HashSet<GridPosition> = cli
        .movement
        .map(|budget| reachable_positions(&grid, start, budget).into_iter().collect())
        .unwrap_or_default();

    print!("{}", render(&grid, start, cli.to, &path, &reach));
    if !path.is_empty() {
        println!(
            "path: {} steps, cost {}",
            path.len() - 1,
            path_cost(&grid, &path)
        );
    }
    if cli.movement.is_some() {
        println!("reachable: {} cells", reach.len());
    }
    Ok(())
}
