use std::collections::BinaryHeap;

use tactica_core::GridPosition;

use crate::node::{NodeRef, PathNode};
use crate::traits::WeightedPather;

/// Compute a multi-source Dijkstra cost map.
///
/// Every in-bounds source starts at cost 0. Expansion stops when the
/// cumulative cost exceeds `max_cost`. Returns every settled cell with its
/// exact minimum cost, in settle (non-decreasing cost) order.
pub fn dijkstra_map<P: WeightedPather>(
    pather: &P,
    sources: &[GridPosition],
    max_cost: f64,
) -> Vec<PathNode> {
    let bounds = pather.bounds();
    let len = bounds.len();
    let mut best = vec![f64::INFINITY; len];
    let mut settled = vec![false; len];
    let mut results = Vec::new();

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq = 0u64;

    // Seed sources.
    for &src in sources {
        if let Some(si) = bounds.index(src) {
            if best[si] == 0.0 {
                continue;
            }
            best[si] = 0.0;
            open.push(NodeRef {
                idx: si,
                cost: 0.0,
                seq,
            });
            seq += 1;
        }
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if settled[ci] || current.cost > best[ci] {
            continue;
        }
        settled[ci] = true;

        let cp = bounds.position(ci);
        results.push(PathNode {
            pos: cp,
            cost: current.cost,
        });

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if !pather.is_walkable(np) {
                continue;
            }
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if settled[ni] {
                continue;
            }
            let tentative = current.cost + pather.cost(np);
            if tentative > max_cost || tentative >= best[ni] {
                continue;
            }
            best[ni] = tentative;
            open.push(NodeRef {
                idx: ni,
                cost: tentative,
                seq,
            });
            seq += 1;
        }
    }

    log::debug!(
        "dijkstra_map from {} sources within {max_cost}: {} cells",
        sources.len(),
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{grid_from_ascii, p};

    fn cost_at(map: &[PathNode], pos: GridPosition) -> Option<f64> {
        map.iter().find(|n| n.pos == pos).map(|n| n.cost)
    }

    #[test]
    fn exact_costs_with_terrain() {
        let g = grid_from_ascii(&[".~^", "..."]);
        let map = dijkstra_map(&g, &[p(0, 0)], 10.0);
        assert_eq!(map.len(), 6);
        assert_eq!(map[0], PathNode { pos: p(0, 0), cost: 0.0 });
        assert_eq!(cost_at(&map, p(1, 0)), Some(2.0));
        assert_eq!(cost_at(&map, p(2, 1)), Some(3.0));
        assert_eq!(cost_at(&map, p(2, 0)), Some(5.0));
        assert!(map.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn budget_and_walls() {
        let g = grid_from_ascii(&[".#..", "...."]);
        let map = dijkstra_map(&g, &[p(0, 0)], 3.0);
        assert_eq!(cost_at(&map, p(1, 0)), None);
        assert_eq!(cost_at(&map, p(2, 1)), Some(3.0));
        assert_eq!(cost_at(&map, p(2, 0)), None);
    }

    #[test]
    fn multiple_sources() {
        let g = grid_from_ascii(&["....."]);
        let map = dijkstra_map(&g, &[p(0, 0), p(4, 0), p(0, 0), p(9, 9)], 10.0);
        assert_eq!(map.len(), 5);
        assert_eq!(cost_at(&map, p(2, 0)), Some(2.0));
        assert_eq!(cost_at(&map, p(3, 0)), Some(1.0));
    }

    #[test]
    fn no_sources_in_bounds() {
        let g = grid_from_ascii(&["..", ".."]);
        assert!(dijkstra_map(&g, &[p(5, 5)], 10.0).is_empty());
    }
}
