//! Single-writer composition of matrix, selection, and pathfinder.
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::grid::{ObstacleMatrix, Position, Tile};
use crate::interaction::{InteractionEvent, Phase, SelectionReducer, SelectionState, Transition};
use crate::projection::{Projection, project};
use crate::search::{Path, Pathfinder};

/// One visualizer session.
///
/// The matrix is fixed for the session's lifetime. Every accepted event
/// recomputes the projection; a transition is committed only if that
/// recompute succeeds, so a failed dispatch leaves the session unchanged.
#[derive(Clone, Debug)]
pub struct Session {
    matrix: ObstacleMatrix,
    selection: SelectionState,
    pathfinder: Pathfinder,
    projection: Projection,
}

impl Session {
    /// Session over the built-in strategies.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_pathfinder(config, Pathfinder::builtin())
    }

    /// Validates `config` against `pathfinder`'s registry and computes the
    /// initial projection.
    pub fn with_pathfinder(config: SessionConfig, pathfinder: Pathfinder) -> Result<Self> {
        pathfinder.registry().validate(&config.algorithm)?;

        let selection = SelectionState::from_config(&config);
        let projection = project(&config.matrix, &selection, &pathfinder)?;
        info!(
            size = config.size(),
            blocked = config.matrix.blocked_count(),
            algorithm = %config.algorithm,
            allow_diagonal = config.allow_diagonal,
            "session started"
        );

        Ok(Self {
            matrix: config.matrix,
            selection,
            pathfinder,
            projection,
        })
    }

    /// Applies `event` and recomputes the projection.
    ///
    /// Unknown algorithm names are rejected before touching the selection.
    /// Pointer events are resolved against this session's own tiles; a tile
    /// whose walkability disagrees with the matrix is ignored.
    pub fn dispatch(&mut self, event: InteractionEvent) -> Result<Transition> {
        if let InteractionEvent::AlgorithmChanged(name) = &event {
            if let Err(err) = self.pathfinder.registry().validate(name) {
                warn!(algorithm = %name, "rejected unknown algorithm");
                return Err(err.into());
            }
        }

        if let Some(tile) = event.tile() {
            let known = self.projection.tile_at(tile.position());
            if known.is_none_or(|known| known.is_walkable() != tile.is_walkable()) {
                warn!(position = %tile.position(), "ignoring tile from another grid");
                return Ok(Transition::Ignored);
            }
        }

        let mut selection = self.selection.clone();
        let transition = SelectionReducer::new(&mut selection).apply(event);
        if transition.is_ignored() {
            return Ok(transition);
        }

        let projection = project(&self.matrix, &selection, &self.pathfinder)?;
        debug!(
            %transition,
            path_len = projection.path().len(),
            "projection recomputed"
        );
        self.selection = selection;
        self.projection = projection;
        Ok(transition)
    }

    pub fn tiles(&self) -> &[Tile] {
        self.projection.tiles()
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn path(&self) -> &[Position] {
        self.projection.path()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn matrix(&self) -> &ObstacleMatrix {
        &self.matrix
    }

    pub fn algorithm(&self) -> &str {
        self.selection.algorithm()
    }

    pub fn allow_diagonal(&self) -> bool {
        self.selection.allow_diagonal()
    }

    pub fn path_set(&self) -> bool {
        self.selection.path_set()
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Registered algorithm names, in toolbar order.
    pub fn algorithms(&self) -> Vec<&str> {
        self.pathfinder.registry().names().collect()
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.projection.tile_at(position)
    }

    /// Copy of the tile at `position`, for building pointer events.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.tile_at(position).copied()
    }

    /// Recomputes the current path without touching the projection.
    pub fn compute_path(&self) -> Result<Path> {
        match self.selection.endpoints() {
            Some((start, end)) => self.pathfinder.find_path(
                &self.matrix,
                start,
                end,
                &self.selection.finder_options(),
            ),
            None => Ok(Path::new()),
        }
    }
}
