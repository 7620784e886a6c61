use std::collections::{HashSet, VecDeque};

use tactica_core::GridPosition;

use crate::traits::WeightedPather;

/// Positions a unit at `start` can reach spending at most `max_movement`.
///
/// This is a first-in first-out flood fill: a position is settled the first
/// time it is dequeued, at whatever cost it was queued with, and is never
/// revisited. When terrain costs vary that first cost is not always the
/// cheapest, so cells behind an expensively-settled cell can be missed.
/// Use [`dijkstra_map`](crate::dijkstra_map) for exact costs.
///
/// The result is in settle order and always starts with `start`.
pub fn reachable_positions<P: WeightedPather>(
    pather: &P,
    start: GridPosition,
    max_movement: f64,
) -> Vec<GridPosition> {
    let mut reachable = Vec::new();
    let mut visited: HashSet<GridPosition> = HashSet::new();
    let mut queue: VecDeque<(GridPosition, f64)> = VecDeque::new();
    queue.push_back((start, 0.0));

    let mut nbuf = Vec::with_capacity(4);

    while let Some((pos, cost)) = queue.pop_front() {
        if !visited.insert(pos) {
            continue;
        }
        reachable.push(pos);

        nbuf.clear();
        pather.neighbors(pos, &mut nbuf);

        for &np in nbuf.iter() {
            if !pather.is_walkable(np) {
                continue;
            }
            let next = cost + pather.cost(np);
            if next <= max_movement && !visited.contains(&np) {
                queue.push_back((np, next));
            }
        }
    }

    log::debug!(
        "reachable_positions from {start} within {max_movement}: {} cells",
        reachable.len()
    );
    reachable
}
