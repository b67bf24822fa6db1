//! Entry point that turns a matrix and two endpoints into a path.
use std::sync::Arc;

use tracing::{debug, error};

use super::cache::FinderCache;
use super::registry::FinderRegistry;
use super::{FinderOptions, Path, PathFinder, validate_path};
use crate::error::Result;
use crate::grid::{ObstacleMatrix, Position};

/// Registry plus finder cache.
///
/// Every call builds a fresh [`crate::WalkGrid`] from the matrix, so searches
/// never observe state left behind by earlier ones.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    registry: Arc<FinderRegistry>,
    cache: Arc<FinderCache>,
}

impl Pathfinder {
    pub fn new(registry: FinderRegistry, cache: Arc<FinderCache>) -> Self {
        Self {
            registry: Arc::new(registry),
            cache,
        }
    }

    /// Built-in strategies backed by the process-wide cache.
    pub fn builtin() -> Self {
        Self::new(FinderRegistry::builtin(), FinderCache::global())
    }

    /// Custom strategies with a private cache, so their instances never mix
    /// with built-in ones registered under the same name.
    pub fn with_registry(registry: FinderRegistry) -> Self {
        Self::new(registry, Arc::new(FinderCache::new()))
    }

    pub fn registry(&self) -> &FinderRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &FinderCache {
        &self.cache
    }

    /// Cached finder for `options`.
    pub fn finder(&self, options: &FinderOptions) -> Result<Arc<dyn PathFinder>> {
        Ok(self.cache.get_or_create(&self.registry, options)?)
    }

    /// Computes a path from `start` to `end`, both inclusive.
    ///
    /// An unreachable `end` yields an empty path. Blocked or out-of-bounds
    /// endpoints are reported as errors and logged, as is a returned path that
    /// crosses a blocked cell or skips between non-adjacent cells.
    pub fn find_path(
        &self,
        matrix: &ObstacleMatrix,
        start: Position,
        end: Position,
        options: &FinderOptions,
    ) -> Result<Path> {
        let finder = self.finder(options)?;
        let grid = matrix.walk_grid();
        let result = finder.find_path(grid.clone(), start, end).and_then(|path| {
            validate_path(&grid, finder.as_ref(), &path, start, end)?;
            Ok(path)
        });
        match result {
            Ok(path) => {
                debug!(
                    finder = finder.name(),
                    %start,
                    %end,
                    steps = path.len(),
                    "path computed"
                );
                Ok(path)
            }
            Err(err) => {
                error!(finder = finder.name(), %start, %end, error = %err, "search failed");
                Err(err.into())
            }
        }
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::grid::{Adjacency, WalkGrid};
    use crate::search::{Endpoint, PathError};

    #[test]
    fn finds_inclusive_path_on_default_matrix() {
        let pathfinder = Pathfinder::builtin();
        let matrix = ObstacleMatrix::default();
        let start = Position::new(1, 1);
        let end = Position::new(6, 6);

        let path = pathfinder
            .find_path(&matrix, start, end, &FinderOptions::new("astar", true))
            .unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
    }

    #[test]
    fn blocked_corner_is_rejected() {
        let pathfinder = Pathfinder::builtin();
        let matrix = ObstacleMatrix::default();
        let err = pathfinder
            .find_path(
                &matrix,
                Position::new(0, 0),
                Position::new(6, 6),
                &FinderOptions::new("astar", true),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Path(PathError::InvalidEndpoint { .. })
        ));
    }

    #[derive(Debug)]
    struct Fixed(Path);

    impl PathFinder for Fixed {
        fn find_path(
            &self,
            _: WalkGrid,
            _: Position,
            _: Position,
        ) -> std::result::Result<Path, PathError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn adjacency(&self) -> Adjacency {
            Adjacency::Octile
        }
    }

    fn fixed(path: Path) -> Pathfinder {
        let mut registry = FinderRegistry::empty();
        registry.register("fixed", move |_: &FinderOptions| {
            Arc::new(Fixed(path.clone())) as Arc<dyn PathFinder>
        });
        Pathfinder::with_registry(registry)
    }

    fn run(pathfinder: &Pathfinder, start: Position, end: Position) -> Result<Path> {
        pathfinder.find_path(
            &ObstacleMatrix::default(),
            start,
            end,
            &FinderOptions::new("fixed", true),
        )
    }

    #[test]
    fn custom_finder_paths_are_checked() {
        let (start, end) = (Position::new(1, 1), Position::new(3, 3));
        let good = vec![start, Position::new(2, 2), end];
        assert_eq!(run(&fixed(good.clone()), start, end).unwrap(), good);
        assert!(run(&fixed(Path::new()), start, end).unwrap().is_empty());

        // (1,0) is blocked on the default matrix.
        let blocked = vec![Position::new(1, 1), Position::new(1, 0), Position::new(2, 1)];
        assert!(matches!(
            run(&fixed(blocked), Position::new(1, 1), Position::new(2, 1)),
            Err(CoreError::Path(PathError::BlockedStep { position, .. }))
                if position == Position::new(1, 0)
        ));

        let jump = vec![start, end];
        assert!(matches!(
            run(&fixed(jump), start, end),
            Err(CoreError::Path(PathError::DisjointStep { .. }))
        ));

        let short = vec![start, Position::new(2, 2)];
        assert!(matches!(
            run(&fixed(short), start, end),
            Err(CoreError::Path(PathError::MisplacedEndpoint {
                endpoint: Endpoint::End,
                ..
            }))
        ));
    }

    #[test]
    fn unknown_algorithm_surfaces_config_error() {
        let pathfinder = Pathfinder::with_registry(FinderRegistry::empty());
        let err = pathfinder
            .find_path(
                &ObstacleMatrix::default(),
                Position::new(1, 1),
                Position::new(6, 6),
                &FinderOptions::new("astar", true),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
