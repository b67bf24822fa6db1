use crate::config::SessionConfig;
use crate::grid::Position;
use crate::search::FinderOptions;

/// Coarse selection phase, derived from [`SelectionState`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// No start selected.
    #[default]
    Idle,
    /// Start selected; hovering previews the end.
    AwaitingEnd,
    /// Path committed; hovering no longer moves the end.
    PathCommitted,
}

/// Start/end selection plus search settings for one session.
///
/// Mutated only through [`super::SelectionReducer`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    pub(super) start: Option<Position>,
    pub(super) end: Option<Position>,
    pub(super) path_set: bool,
    pub(super) algorithm: String,
    pub(super) allow_diagonal: bool,
    pub(super) edit_mode: bool,
}

impl SelectionState {
    pub fn new(algorithm: impl Into<String>, allow_diagonal: bool, edit_mode: bool) -> Self {
        Self {
            start: None,
            end: None,
            path_set: false,
            algorithm: algorithm.into(),
            allow_diagonal,
            edit_mode,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.algorithm.clone(),
            config.allow_diagonal,
            config.edit_mode,
        )
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    /// Both endpoints, when a search can run.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        self.start.zip(self.end)
    }

    pub fn path_set(&self) -> bool {
        self.path_set
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn phase(&self) -> Phase {
        if self.path_set {
            Phase::PathCommitted
        } else if self.start.is_some() {
            Phase::AwaitingEnd
        } else {
            Phase::Idle
        }
    }

    /// Options selecting the finder for the current settings.
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions::new(self.algorithm.clone(), self.allow_diagonal)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
