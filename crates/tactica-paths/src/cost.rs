use tactica_core::GridPosition;

use crate::traits::WeightedPather;

/// Total cost of walking `path`: the entry cost of every cell after the
/// first. Empty and single-cell paths cost nothing.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[GridPosition]) -> f64 {
    path.iter().skip(1).map(|&p| pather.cost(p)).sum()
}
