use tracing::{debug, trace};

use super::{InteractionEvent, SelectionState};
use crate::grid::Tile;

/// Outcome of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Transition {
    /// First start selected.
    Started,
    /// Committed path discarded and a new start selected.
    Restarted,
    /// Path locked in.
    Committed,
    /// Hovered tile became the end.
    EndPreviewed,
    AlgorithmChanged,
    DiagonalToggled,
    /// Event had no effect.
    Ignored,
}

impl Transition {
    /// True if the event left the selection untouched.
    pub fn is_ignored(self) -> bool {
        self == Self::Ignored
    }
}

/// Wraps mutable access to [`SelectionState`] with the interaction rules.
pub struct SelectionReducer<'a> {
    state: &'a mut SelectionState,
}

impl<'a> SelectionReducer<'a> {
    pub fn new(state: &'a mut SelectionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SelectionState {
        self.state
    }

    pub fn apply(&mut self, event: InteractionEvent) -> Transition {
        let kind = event.as_ref().to_owned();
        let transition = match event {
            InteractionEvent::TileClicked(tile) => self.click(&tile),
            InteractionEvent::MouseEnteredTile(tile) => self.hover(&tile),
            InteractionEvent::AlgorithmChanged(name) => self.set_algorithm(name),
            InteractionEvent::AllowDiagonalToggled => self.toggle_diagonal(),
        };

        if transition.is_ignored() {
            trace!(event = %kind, "event ignored");
        } else {
            debug!(
                event = %kind,
                %transition,
                phase = %self.state.phase(),
                "selection updated"
            );
        }
        transition
    }

    /// Click rules, first match wins:
    /// 1. committed path + walkable tile: restart from the tile
    /// 2. start selected + walkable tile: commit
    /// 3. walkable tile: select start
    /// 4. otherwise nothing changes
    pub fn click(&mut self, tile: &Tile) -> Transition {
        if !tile.is_walkable() {
            return Transition::Ignored;
        }

        if self.state.path_set {
            self.state.start = Some(tile.position());
            self.state.end = None;
            self.state.path_set = false;
            Transition::Restarted
        } else if self.state.start.is_some() {
            self.state.path_set = true;
            Transition::Committed
        } else {
            self.state.start = Some(tile.position());
            Transition::Started
        }
    }

    /// Moves the end onto `tile` while a start is selected and nothing is
    /// committed. The start tile itself never becomes the end.
    pub fn hover(&mut self, tile: &Tile) -> Transition {
        let Some(start) = self.state.start else {
            return Transition::Ignored;
        };
        if self.state.edit_mode
            || self.state.path_set
            || !tile.is_walkable()
            || tile.position() == start
        {
            return Transition::Ignored;
        }

        self.state.end = Some(tile.position());
        Transition::EndPreviewed
    }

    /// Selection is left untouched; the name is validated by the caller.
    pub fn set_algorithm(&mut self, name: String) -> Transition {
        self.state.algorithm = name;
        Transition::AlgorithmChanged
    }

    pub fn toggle_diagonal(&mut self) -> Transition {
        self.state.allow_diagonal = !self.state.allow_diagonal;
        Transition::DiagonalToggled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{ObstacleMatrix, Position, build_tiles, tile_index};
    use crate::interaction::Phase;

    fn tile(x: i32, y: i32) -> Tile {
        let matrix = ObstacleMatrix::default();
        let tiles = build_tiles(&matrix);
        tiles[tile_index(Position::new(x, y), matrix.size()).unwrap()]
    }

    fn state() -> SelectionState {
        SelectionState::new("astar", true, false)
    }

    #[test]
    fn click_hover_click_commits() {
        let mut state = state();
        let mut reducer = SelectionReducer::new(&mut state);

        assert_eq!(reducer.click(&tile(1, 1)), Transition::Started);
        assert_eq!(reducer.hover(&tile(6, 6)), Transition::EndPreviewed);
        assert_eq!(reducer.click(&tile(6, 6)), Transition::Committed);

        assert_eq!(state.start(), Some(Position::new(1, 1)));
        assert_eq!(state.end(), Some(Position::new(6, 6)));
        assert_eq!(state.phase(), Phase::PathCommitted);
    }

    #[test]
    fn click_after_commit_restarts() {
        let mut state = state();
        let mut reducer = SelectionReducer::new(&mut state);
        reducer.click(&tile(1, 1));
        reducer.hover(&tile(6, 6));
        reducer.click(&tile(6, 6));

        assert_eq!(reducer.click(&tile(3, 3)), Transition::Restarted);
        assert_eq!(state.start(), Some(Position::new(3, 3)));
        assert_eq!(state.end(), None);
        assert!(!state.path_set());
        assert_eq!(state.phase(), Phase::AwaitingEnd);
    }

    #[test]
    fn commit_does_not_require_end() {
        let mut state = state();
        let mut reducer = SelectionReducer::new(&mut state);
        reducer.click(&tile(1, 1));

        assert_eq!(reducer.click(&tile(4, 4)), Transition::Committed);
        assert!(state.path_set());
        assert_eq!(state.end(), None);
    }

    #[test]
    fn blocked_tiles_are_ignored() {
        let mut state = state();
        let before = state.clone();
        let mut reducer = SelectionReducer::new(&mut state);

        assert_eq!(reducer.click(&tile(0, 0)), Transition::Ignored);
        assert_eq!(state, before);

        let mut reducer = SelectionReducer::new(&mut state);
        reducer.click(&tile(1, 1));
        assert_eq!(reducer.hover(&tile(7, 7)), Transition::Ignored);
        assert_eq!(reducer.click(&tile(7, 7)), Transition::Ignored);
        assert_eq!(state.end(), None);
        assert!(!state.path_set());
    }

    #[test]
    fn hover_guards() {
        let mut state = state();
        let mut reducer = SelectionReducer::new(&mut state);

        // no start yet
        assert_eq!(reducer.hover(&tile(2, 2)), Transition::Ignored);

        reducer.click(&tile(1, 1));
        assert_eq!(reducer.hover(&tile(1, 1)), Transition::Ignored);
        assert_eq!(reducer.hover(&tile(2, 2)), Transition::EndPreviewed);

        reducer.click(&tile(2, 2));
        assert_eq!(reducer.hover(&tile(3, 3)), Transition::Ignored);
        assert_eq!(state.end(), Some(Position::new(2, 2)));
    }

    #[test]
    fn edit_mode_suppresses_hover() {
        let mut state = SelectionState::new("astar", true, true);
        let mut reducer = SelectionReducer::new(&mut state);
        reducer.click(&tile(1, 1));

        assert_eq!(reducer.hover(&tile(2, 2)), Transition::Ignored);
        assert_eq!(state.end(), None);
    }

    #[test]
    fn settings_leave_selection_alone() {
        let mut state = state();
        let mut reducer = SelectionReducer::new(&mut state);
        reducer.click(&tile(1, 1));
        reducer.hover(&tile(2, 2));

        assert_eq!(
            reducer.apply(InteractionEvent::AlgorithmChanged("dijkstra".into())),
            Transition::AlgorithmChanged
        );
        assert_eq!(
            reducer.apply(InteractionEvent::AllowDiagonalToggled),
            Transition::DiagonalToggled
        );

        assert_eq!(state.algorithm(), "dijkstra");
        assert!(!state.allow_diagonal());
        assert_eq!(state.start(), Some(Position::new(1, 1)));
        assert_eq!(state.end(), Some(Position::new(2, 2)));
    }
}
