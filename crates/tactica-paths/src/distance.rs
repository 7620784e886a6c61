use tactica_core::GridPosition;

/// Manhattan (L1) distance between two positions.
///
/// Exact on an open 4-connected grid with unit costs, and a lower bound
/// whenever every entry cost is at least 1. Saturates at `i32::MAX`.
#[inline]
pub fn manhattan(a: GridPosition, b: GridPosition) -> i32 {
    a.manhattan(b)
}
