//! Name → factory registry for search strategies.
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::astar::AStarFinder;
use super::bfs::BreadthFirstFinder;
use super::{FinderOptions, PathFinder};
use crate::config::ConfigError;

/// Built-in search strategies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    #[default]
    #[strum(serialize = "astar")]
    AStar,
    Dijkstra,
    BestFirst,
    BreadthFirst,
}

impl Algorithm {
    /// Builds a finder for this strategy.
    pub fn construct(self, options: &FinderOptions) -> Arc<dyn PathFinder> {
        let adjacency = options.adjacency();
        match self {
            Self::AStar => Arc::new(AStarFinder::astar(adjacency)),
            Self::Dijkstra => Arc::new(AStarFinder::dijkstra(adjacency)),
            Self::BestFirst => Arc::new(AStarFinder::best_first(adjacency)),
            Self::BreadthFirst => Arc::new(BreadthFirstFinder::new(adjacency)),
        }
    }
}

/// Constructs a finder for the given options.
pub type FinderFactory = Arc<dyn Fn(&FinderOptions) -> Arc<dyn PathFinder> + Send + Sync>;

/// Registry mapping algorithm names to finder factories.
///
/// Names are matched exactly and kept in registration order, which is the
/// order toolbars list them in. Registering an existing name replaces its
/// factory.
#[derive(Clone)]
pub struct FinderRegistry {
    factories: Vec<(String, FinderFactory)>,
}

impl FinderRegistry {
    /// Registry without any strategies.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with every [`Algorithm`].
    pub fn builtin() -> Self {
        use strum::IntoEnumIterator;

        let mut registry = Self::empty();
        for algorithm in Algorithm::iter() {
            registry.register(algorithm.as_ref(), move |options: &FinderOptions| {
                algorithm.construct(options)
            });
        }
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&FinderOptions) -> Arc<dyn PathFinder> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: FinderFactory = Arc::new(factory);
        match self.factories.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => {
                debug!(algorithm = %name, "replacing finder factory");
                slot.1 = factory;
            }
            None => self.factories.push((name, factory)),
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factory(name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Fails with [`ConfigError::UnknownAlgorithm`] if `name` is not registered.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(ConfigError::UnknownAlgorithm {
                name: name.to_owned(),
            })
        }
    }

    /// Runs the factory registered for `options.algorithm`.
    pub fn construct(&self, options: &FinderOptions) -> Result<Arc<dyn PathFinder>, ConfigError> {
        let factory = self
            .factory(&options.algorithm)
            .ok_or_else(|| ConfigError::UnknownAlgorithm {
                name: options.algorithm.clone(),
            })?;
        Ok(factory(options))
    }

    fn factory(&self, name: &str) -> Option<&FinderFactory> {
        self.factories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, factory)| factory)
    }
}

impl Default for FinderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for FinderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
