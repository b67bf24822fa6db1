//! Weighted A* and the strategies derived from it.
//!
//! Dijkstra and greedy best-first are A* with the heuristic weight set to zero
//! and to a dominating constant respectively, so all three share one search
//! loop.
use core::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::heuristic::{Heuristic, step_cost};
use super::{Path, PathError, PathFinder, backtrace, validate_endpoints};
use crate::grid::{Adjacency, Position, WalkGrid};

/// Heuristic weight that makes the estimate dominate the travelled cost.
pub const BEST_FIRST_WEIGHT: f64 = 1_000_000.0;

/// Open-list entry. Ordered so the `BinaryHeap` pops the lowest `f` first,
/// breaking ties by insertion order.
#[derive(Clone, Copy, Debug)]
struct OpenNode {
    node: usize,
    f: f64,
    seq: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A* over a [`WalkGrid`] with a weighted heuristic.
#[derive(Clone, Debug)]
pub struct AStarFinder {
    name: &'static str,
    adjacency: Adjacency,
    heuristic: Heuristic,
    weight: f64,
}

impl AStarFinder {
    pub fn new(name: &'static str, adjacency: Adjacency, weight: f64) -> Self {
        Self {
            name,
            adjacency,
            heuristic: Heuristic::for_adjacency(adjacency),
            weight,
        }
    }

    /// Plain A*: optimal with the admissible heuristic for `adjacency`.
    pub fn astar(adjacency: Adjacency) -> Self {
        Self::new("astar", adjacency, 1.0)
    }

    /// Uniform-cost search.
    pub fn dijkstra(adjacency: Adjacency) -> Self {
        Self::new("dijkstra", adjacency, 0.0)
    }

    /// Greedy best-first search. Fast, not optimal.
    pub fn best_first(adjacency: Adjacency) -> Self {
        Self::new("best-first", adjacency, BEST_FIRST_WEIGHT)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn estimate(&self, from: Position, to: Position) -> f64 {
        if self.weight == 0.0 {
            0.0
        } else {
            self.weight * self.heuristic.estimate(from, to)
        }
    }
}

impl PathFinder for AStarFinder {
    fn find_path(&self, grid: WalkGrid, start: Position, end: Position) -> Result<Path, PathError> {
        validate_endpoints(&grid, start, end)?;

        let (Some(start_node), Some(end_node)) = (grid.node(start), grid.node(end)) else {
            return Ok(Path::new());
        };

        let mut g = vec![f64::INFINITY; grid.len()];
        let mut parents: Vec<Option<usize>> = vec![None; grid.len()];
        let mut closed = vec![false; grid.len()];
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;

        g[start_node] = 0.0;
        open.push(OpenNode {
            node: start_node,
            f: self.estimate(start, end),
            seq,
        });

        let mut expanded = 0usize;
        while let Some(OpenNode { node, .. }) = open.pop() {
            if closed[node] {
                continue;
            }
            if node == end_node {
                trace!(finder = self.name, expanded, cost = g[node], "goal reached");
                return Ok(backtrace(&grid, &parents, end_node));
            }
            closed[node] = true;
            expanded += 1;

            let Some(position) = grid.position(node) else {
                continue;
            };
            for next in grid.neighbors(position, self.adjacency) {
                let Some(next_node) = grid.node(next) else {
                    continue;
                };
                if closed[next_node] {
                    continue;
                }

                let tentative = g[node] + step_cost(position, next);
                if tentative < g[next_node] {
                    g[next_node] = tentative;
                    parents[next_node] = Some(node);
                    seq += 1;
                    open.push(OpenNode {
                        node: next_node,
                        f: tentative + self.estimate(next, end),
                        seq,
                    });
                }
            }
        }

        trace!(finder = self.name, expanded, "open list exhausted");
        Ok(Path::new())
    }

    fn name(&self) -> &str {
        self.name
    }

    fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}
