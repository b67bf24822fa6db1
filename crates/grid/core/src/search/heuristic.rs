use crate::grid::{Adjacency, Position};

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = core::f64::consts::SQRT_2;

/// Distance estimates used to guide informed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of axis deltas; admissible for 4-connected grids.
    Manhattan,
    /// Straight moves plus √2-weighted diagonal moves; admissible for
    /// 8-connected grids.
    Octile,
}

impl Heuristic {
    /// Tightest admissible heuristic for `adjacency`.
    pub const fn for_adjacency(adjacency: Adjacency) -> Self {
        match adjacency {
            Adjacency::Orthogonal => Self::Manhattan,
            Adjacency::Octile => Self::Octile,
        }
    }

    pub fn estimate(self, from: Position, to: Position) -> f64 {
        let dx = f64::from(from.x.abs_diff(to.x));
        let dy = f64::from(from.y.abs_diff(to.y));
        match self {
            Self::Manhattan => dx + dy,
            Self::Octile => {
                let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
                min * DIAGONAL_COST + (max - min)
            }
        }
    }
}

/// Cost of stepping between two adjacent cells.
pub fn step_cost(from: Position, to: Position) -> f64 {
    if from.x != to.x && from.y != to.y {
        DIAGONAL_COST
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_and_octile_estimates() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 1);

        assert_eq!(Heuristic::Manhattan.estimate(a, b), 4.0);
        let octile = Heuristic::Octile.estimate(a, b);
        assert!((octile - (DIAGONAL_COST + 2.0)).abs() < 1e-9);
        assert_eq!(Heuristic::Octile.estimate(b, b), 0.0);
    }

    #[test]
    fn step_cost_distinguishes_diagonals() {
        assert_eq!(step_cost(Position::new(1, 1), Position::new(1, 2)), 1.0);
        assert_eq!(
            step_cost(Position::new(1, 1), Position::new(2, 2)),
            DIAGONAL_COST
        );
    }
}
