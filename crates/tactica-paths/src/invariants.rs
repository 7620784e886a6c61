//! Randomized checks that tie the three searches together on many small
//! maps. Seeds are fixed so failures reproduce.

use rand::{Rng, RngExt, SeedableRng};
use tactica_core::{Grid, GridPosition};

use crate::testutil::grid_from_ascii;
use crate::{PathNode, dijkstra_map, find_path, manhattan, path_cost, reachable_positions};

const CELLS: [char; 5] = ['.', '.', '~', 'f', '^'];

fn random_map(rng: &mut impl Rng, walls: bool) -> Grid {
    let w = rng.random_range(1..=8);
    let h = rng.random_range(1..=8);
    let rows: Vec<String> = (0..h)
        .map(|_| {
            (0..w)
                .map(|_| {
                    if !walls {
                        '.'
                    } else if rng.random_range(0..10) < 2 {
                        '#'
                    } else {
                        CELLS[rng.random_range(0..CELLS.len())]
                    }
                })
                .collect()
        })
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    grid_from_ascii(&refs)
}

fn random_pos(rng: &mut impl Rng, g: &Grid) -> GridPosition {
    GridPosition::new(
        rng.random_range(0..g.width()),
        rng.random_range(0..g.height()),
    )
}

fn cost_at(map: &[PathNode], pos: GridPosition) -> Option<f64> {
    map.iter().find(|n| n.pos == pos).map(|n| n.cost)
}

#[test]
fn open_maps_give_manhattan_paths() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let g = random_map(&mut rng, false);
        let a = random_pos(&mut rng, &g);
        let b = random_pos(&mut rng, &g);
        let path = find_path(&g, a, b, None);
        assert_eq!(path.len() as i32, manhattan(a, b) + 1);
        assert_eq!(path.first(), Some(&a));
        assert_eq!(path.last(), Some(&b));
    }
}

#[test]
fn astar_matches_dijkstra_and_respects_budgets() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    for _ in 0..300 {
        let g = random_map(&mut rng, true);
        let a = random_pos(&mut rng, &g);
        let b = random_pos(&mut rng, &g);
        let path = find_path(&g, a, b, None);

        if !g.is_walkable(b) {
            assert!(path.is_empty());
            continue;
        }

        let exact = dijkstra_map(&g, &[a], f64::INFINITY);
        match cost_at(&exact, b) {
            None => assert!(path.is_empty(), "{a} -> {b} found {path:?}"),
            Some(opt) => {
                assert_eq!(path.first(), Some(&a));
                assert_eq!(path.last(), Some(&b));
                for w in path.windows(2) {
                    assert_eq!(manhattan(w[0], w[1]), 1);
                    assert!(g.is_walkable(w[1]));
                }
                assert_eq!(path_cost(&g, &path), opt);

                if opt >= 1.0 {
                    assert!(find_path(&g, a, b, Some(opt - 1.0)).is_empty());
                }
                let budgeted = find_path(&g, a, b, Some(opt));
                assert_eq!(path_cost(&g, &budgeted), opt);
            }
        }
    }
}

#[test]
fn reachable_set_stays_within_budget() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    for _ in 0..300 {
        let g = random_map(&mut rng, true);
        let start = random_pos(&mut rng, &g);
        let budget = rng.random_range(0..8) as f64;

        let reach = reachable_positions(&g, start, budget);
        assert_eq!(reach.first(), Some(&start));

        let mut dedup = reach.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), reach.len());

        let exact = dijkstra_map(&g, &[start], budget);
        for &pos in &reach {
            let cost = cost_at(&exact, pos);
            assert!(cost.is_some_and(|c| c <= budget), "{pos} from {start}");
        }
    }
}
