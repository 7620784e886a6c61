use tactica_core::GridPosition;

use crate::node::SearchNode;
use crate::traits::AstarPather;

/// Compute the cheapest path from `start` to `goal` using A*.
///
/// Returns the full path, both endpoints included, or an empty vector if
/// there is no path. The search gives up early, without expanding
/// anything, when either endpoint lies outside the pather's bounds or the
/// goal is not walkable.
///
/// With `max_movement` set, any step whose accumulated cost would exceed
/// the budget is discarded, so the result is the cheapest path costing at
/// most `max_movement`.
///
/// Ties between frontier nodes of equal `f` are broken by frontier order:
/// the frontier is re-sorted stably by `f` before every expansion and its
/// front is taken. An improved node keeps its frontier slot; new nodes are
/// appended.
pub fn find_path<P: AstarPather>(
    pather: &P,
    start: GridPosition,
    goal: GridPosition,
    max_movement: Option<f64>,
) -> Vec<GridPosition> {
    let bounds = pather.bounds();
    let (Some(start_idx), Some(_)) = (bounds.index(start), bounds.index(goal)) else {
        log::trace!("find_path {start} -> {goal}: endpoint out of bounds");
        return Vec::new();
    };
    if !pather.is_walkable(goal) {
        log::trace!("find_path {start} -> {goal}: goal not walkable");
        return Vec::new();
    }

    let len = bounds.len();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    // Per-cell arena index of the node currently on the frontier.
    let mut open_slot: Vec<Option<usize>> = vec![None; len];
    let mut closed = vec![false; len];

    let h = pather.estimate(start, goal);
    nodes.push(SearchNode {
        pos: start,
        g: 0.0,
        f: h,
        parent: None,
    });
    open.push(0);
    open_slot[start_idx] = Some(0);

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while !open.is_empty() {
        // `sort_by` is stable, which the tie-break relies on.
        open.sort_by(|&a, &b| nodes[a].f.total_cmp(&nodes[b].f));
        let ci = open.remove(0);
        let current_pos = nodes[ci].pos;
        let current_g = nodes[ci].g;

        if current_pos == goal {
            let path = reconstruct(&nodes, ci);
            log::debug!(
                "find_path {start} -> {goal}: {} cells, cost {current_g}, {expanded} expanded",
                path.len()
            );
            return path;
        }

        let Some(cidx) = bounds.index(current_pos) else {
            continue;
        };
        open_slot[cidx] = None;
        closed[cidx] = true;
        expanded += 1;

        nbuf.clear();
        pather.neighbors(current_pos, &mut nbuf);

        for &np in nbuf.iter() {
            if !pather.is_walkable(np) {
                continue;
            }
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if closed[ni] {
                continue;
            }

            let g = current_g + pather.cost(np);
            if max_movement.is_some_and(|max| g > max) {
                continue;
            }
            let f = g + pather.estimate(np, goal);

            match open_slot[ni] {
                Some(existing) if nodes[existing].g <= g => {}
                Some(existing) => {
                    let n = &mut nodes[existing];
                    n.g = g;
                    n.f = f;
                    n.parent = Some(ci);
                }
                None => {
                    nodes.push(SearchNode {
                        pos: np,
                        g,
                        f,
                        parent: Some(ci),
                    });
                    let id = nodes.len() - 1;
                    open.push(id);
                    open_slot[ni] = Some(id);
                }
            }
        }
    }

    log::debug!("find_path {start} -> {goal}: no path, {expanded} expanded");
    Vec::new()
}

fn reconstruct(nodes: &[SearchNode], goal: usize) -> Vec<GridPosition> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        path.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use crate::path_cost;
    use crate::testutil::{grid_from_ascii, p};

    #[test]
    fn open_grid_path_length_and_endpoints() {
        let g = grid_from_ascii(&[".....", ".....", ".....", ".....", "....."]);
        let path = find_path(&g, p(0, 0), p(4, 4), None);
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[8], p(4, 4));
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn tie_break_prefers_earlier_frontier_entries() {
        let g = grid_from_ascii(&["...", "...", "..."]);
        assert_eq!(
            find_path(&g, p(0, 0), p(2, 2), None),
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
    }

    #[test]
    fn routes_around_center_obstacle() {
        let g = grid_from_ascii(&["...", ".#.", "..."]);
        let path = find_path(&g, p(0, 0), p(2, 2), None);
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
        assert!(!path.contains(&p(1, 1)));
    }

    #[test]
    fn wall_in_corridor_blocks() {
        let g = grid_from_ascii(&[".#."]);
        assert!(find_path(&g, p(0, 0), p(2, 0), None).is_empty());
    }

    #[test]
    fn obstacle_goal_is_unreachable() {
        let g = grid_from_ascii(&["..#", "..."]);
        assert!(find_path(&g, p(0, 0), p(2, 0), None).is_empty());
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let g = grid_from_ascii(&["...", "..."]);
        assert!(find_path(&g, p(-1, 0), p(2, 1), None).is_empty());
        assert!(find_path(&g, p(0, 0), p(3, 1), None).is_empty());
        assert!(find_path(&g, p(i32::MAX, 0), p(0, 0), None).is_empty());
        assert!(find_path(&g, p(0, 0), p(i32::MIN, i32::MIN), Some(3.0)).is_empty());
    }

    #[test]
    fn start_equals_goal() {
        let g = grid_from_ascii(&["...", "..."]);
        assert_eq!(find_path(&g, p(1, 1), p(1, 1), None), vec![p(1, 1)]);
        assert_eq!(find_path(&g, p(1, 1), p(1, 1), Some(0.0)), vec![p(1, 1)]);
    }

    #[test]
    fn start_on_obstacle_can_still_leave() {
        let g = grid_from_ascii(&["#.."]);
        assert_eq!(
            find_path(&g, p(0, 0), p(2, 0), None),
            vec![p(0, 0), p(1, 0), p(2, 0)]
        );
    }

    #[test]
    fn prefers_cheaper_detour_over_expensive_terrain() {
        // '5' is walkable terrain costing 5 to enter.
        let g = grid_from_ascii(&["...", ".5.", "..."]);
        let path = find_path(&g, p(0, 1), p(2, 1), None);
        assert!(!path.contains(&p(1, 1)));
        assert_eq!(path.len(), 5);
        assert_eq!(path_cost(&g, &path), 4.0);
    }

    #[test]
    fn crosses_water_when_it_is_the_only_route() {
        // Water costs 2; walls leave no way around it.
        let g = grid_from_ascii(&["#.#", ".~.", "#.#"]);
        let path = find_path(&g, p(0, 1), p(2, 1), None);
        assert_eq!(path, vec![p(0, 1), p(1, 1), p(2, 1)]);
        assert_eq!(path_cost(&g, &path), 3.0);
    }

    #[test]
    fn budget_prunes_exactly_at_cost() {
        // Cost of the only path: 1 + 2 + 1 = 4.
        let g = grid_from_ascii(&["..~."]);
        assert!(find_path(&g, p(0, 0), p(3, 0), Some(3.0)).is_empty());
        let path = find_path(&g, p(0, 0), p(3, 0), Some(4.0));
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn budget_below_every_route_returns_empty() {
        // Over the mountain (1 + 3 + 1) or around it (5 steps): both cost 5.
        let g = grid_from_ascii(&["..^.", "....", "...."]);
        assert!(find_path(&g, p(0, 0), p(3, 0), Some(4.0)).is_empty());
        let path = find_path(&g, p(0, 0), p(3, 0), Some(5.0));
        assert_eq!(path_cost(&g, &path), 5.0);
    }

    #[test]
    fn unpopulated_grid_has_no_paths() {
        let g = tactica_core::Grid::new(3, 3, 48);
        assert!(find_path(&g, p(0, 0), p(2, 2), None).is_empty());
    }
}
