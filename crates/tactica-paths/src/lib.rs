//! Pathfinding over tactica tile grids.
//!
//! This crate provides the search algorithms used for movement validation
//! and tactical range queries on a 4-connected grid with per-tile entry
//! costs:
//!
//! - **A\*** cheapest path with an optional movement budget ([`find_path`])
//! - **Reachable set** first-in first-out flood fill within a budget
//!   ([`reachable_positions`])
//! - **Dijkstra** exact multi-source cost maps ([`dijkstra_map`])
//!
//! Every call is self-contained: scratch state is allocated per call and
//! dropped on return, and the pather is only read.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration, walkability |
//! | [`WeightedPather`] : [`Pather`] | reachable set, Dijkstra, [`path_cost`] |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`tactica_core::Grid`] implements all three.

mod astar;
mod cost;
mod dijkstra;
mod distance;
mod node;
mod reachable;
mod traits;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod testutil;

pub use astar::find_path;
pub use cost::path_cost;
pub use dijkstra::dijkstra_map;
pub use distance::manhattan;
pub use node::PathNode;
pub use reachable::reachable_positions;
pub use traits::{AstarPather, Pather, WeightedPather};
