use std::cmp::Ordering;

use tactica_core::GridPosition;

/// A position with an associated cost, returned from [`dijkstra_map`](crate::dijkstra_map).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: GridPosition,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

/// One visited or frontier cell. Lives in a per-call arena; `parent` is
/// an index into that arena.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: GridPosition,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: Option<usize>,
}

// ---------------------------------------------------------------------------
// Heap entry for Dijkstra
// ---------------------------------------------------------------------------

/// Reference into a cost map, ordered by cost then insertion sequence for
/// use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first, and
        // the earliest pushed among equals.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_cheapest_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, cost: 3.0, seq: 0 });
        heap.push(NodeRef { idx: 1, cost: 1.0, seq: 1 });
        heap.push(NodeRef { idx: 2, cost: 1.0, seq: 2 });
        heap.push(NodeRef { idx: 3, cost: 2.5, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
