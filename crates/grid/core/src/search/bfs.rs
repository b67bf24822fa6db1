//! Unweighted breadth-first search.
use std::collections::VecDeque;

use tracing::trace;

use super::{Path, PathError, PathFinder, backtrace, validate_endpoints};
use crate::grid::{Adjacency, Position, WalkGrid};

/// Finds the path with the fewest steps, ignoring step cost.
#[derive(Clone, Copy, Debug)]
pub struct BreadthFirstFinder {
    adjacency: Adjacency,
}

impl BreadthFirstFinder {
    pub fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }
}

impl PathFinder for BreadthFirstFinder {
    fn find_path(
        &self,
        grid: WalkGrid,
        start: Position,
        end: Position,
    ) -> Result<Path, PathError> {
        validate_endpoints(&grid, start, end)?;

        let (Some(start_node), Some(end_node)) = (grid.node(start), grid.node(end)) else {
            return Ok(Path::new());
        };

        let mut parents: Vec<Option<usize>> = vec![None; grid.len()];
        // Kept apart from walkability so the corner rule only sees real obstacles.
        let mut visited = vec![false; grid.len()];
        visited[start_node] = true;
        let mut queue = VecDeque::from([start]);

        while let Some(position) = queue.pop_front() {
            let Some(node) = grid.node(position) else {
                continue;
            };
            if node == end_node {
                trace!(visited = visited.iter().filter(|v| **v).count(), "goal reached");
                return Ok(backtrace(&grid, &parents, end_node));
            }

            for next in grid.neighbors(position, self.adjacency) {
                let Some(next_node) = grid.node(next) else {
                    continue;
                };
                if !visited[next_node] {
                    visited[next_node] = true;
                    parents[next_node] = Some(node);
                    queue.push_back(next);
                }
            }
        }

        trace!(start_node, "queue exhausted");
        Ok(Path::new())
    }

    fn name(&self) -> &str {
        "breadth-first"
    }

    fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleMatrix;
    use crate::search::AStarFinder;

    #[test]
    fn fewest_steps_around_obstacle() {
        // . . .
        // # # .
        // . . .
        let matrix = ObstacleMatrix::new(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        let path = BreadthFirstFinder::new(Adjacency::Orthogonal)
            .find_path(matrix.walk_grid(), Position::new(0, 0), Position::new(0, 2))
            .unwrap();

        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(0, 2)));
        for step in path.windows(2) {
            assert!(Adjacency::Orthogonal.are_adjacent(step[0], step[1]));
        }
    }

    #[test]
    fn diagonal_shortcut_when_allowed() {
        let matrix = ObstacleMatrix::new(&[[0u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        let path = BreadthFirstFinder::new(Adjacency::Octile)
            .find_path(matrix.walk_grid(), Position::new(0, 0), Position::new(0, 2))
            .unwrap();

        // (0,0) -> (1,0) -> (2,1) -> (1,2) -> (0,2)
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn open_field_diagonal_takes_chebyshev_steps() {
        let matrix = ObstacleMatrix::new(&[[0u8; 5]; 5]).unwrap();
        let finder = BreadthFirstFinder::new(Adjacency::Octile);

        let path = finder
            .find_path(matrix.walk_grid(), Position::ORIGIN, Position::new(4, 4))
            .unwrap();
        assert_eq!(path, (0..5).map(|i| Position::new(i, i)).collect::<Vec<_>>());

        for x in 0..5 {
            for y in 0..5 {
                let end = Position::new(x, y);
                let path = finder
                    .find_path(matrix.walk_grid(), Position::ORIGIN, end)
                    .unwrap();
                let steps = Position::ORIGIN.chebyshev_distance(end) as usize;
                assert_eq!(path.len(), steps + 1);
            }
        }
    }

    #[test]
    fn never_more_steps_than_weighted_searches() {
        let matrix = ObstacleMatrix::default();
        let bfs = BreadthFirstFinder::new(Adjacency::Octile);
        let dijkstra = AStarFinder::dijkstra(Adjacency::Octile);
        let astar = AStarFinder::astar(Adjacency::Octile);
        let walkable: Vec<Position> = (0..8)
            .flat_map(|x| (0..8).map(move |y| Position::new(x, y)))
            .filter(|p| matrix.is_walkable(*p))
            .collect();

        for &start in &walkable {
            for &end in &walkable {
                let steps = bfs.find_path(matrix.walk_grid(), start, end).unwrap();
                let weighted = dijkstra.find_path(matrix.walk_grid(), start, end).unwrap();
                let guided = astar.find_path(matrix.walk_grid(), start, end).unwrap();

                assert_eq!(steps.is_empty(), weighted.is_empty());
                assert!(steps.len() <= weighted.len(), "{start} -> {end}");
                assert!(steps.len() <= guided.len(), "{start} -> {end}");
                for step in steps.windows(2) {
                    assert!(Adjacency::Octile.are_adjacent(step[0], step[1]));
                }
            }
        }
    }

    #[test]
    fn start_equals_end() {
        let matrix = ObstacleMatrix::default();
        let here = Position::new(4, 4);
        let path = BreadthFirstFinder::new(Adjacency::Octile)
            .find_path(matrix.walk_grid(), here, here)
            .unwrap();
        assert_eq!(path, vec![here]);
    }
}
