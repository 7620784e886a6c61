use tactica_core::{Grid, GridPosition, Range};

/// Minimal pathfinding interface: bounds, walkability and neighbor
/// enumeration.
pub trait Pather {
    /// Rectangle the search is confined to.
    fn bounds(&self) -> Range;

    /// Whether a unit may stand on `p`.
    fn is_walkable(&self, p: GridPosition) -> bool;

    /// Append candidate neighbors of `p` into `buf`, in a fixed order.
    /// Walkability is checked by the search, not here. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: GridPosition, buf: &mut Vec<GridPosition>);
}

/// Pather with per-cell entry costs.
pub trait WeightedPather: Pather {
    /// Cost of entering `to`. Must be ≥ 1 for A* to stay optimal.
    fn cost(&self, to: GridPosition) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: GridPosition, to: GridPosition) -> f64;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_walkable(&self, p: GridPosition) -> bool {
        Grid::is_walkable(self, p)
    }

    #[inline]
    fn neighbors(&self, p: GridPosition, buf: &mut Vec<GridPosition>) {
        self.adjacent_into(p, buf);
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, to: GridPosition) -> f64 {
        self.tile(to).map_or(1.0, |t| t.movement_cost)
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: GridPosition, to: GridPosition) -> f64 {
        self.distance(from, to) as f64
    }
}
