use crate::grid::Tile;

/// User interactions consumed by the selection state machine.
///
/// Tile-carrying events hold a tile taken from the current projection; its
/// walkability is therefore authoritative.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum InteractionEvent {
    TileClicked(Tile),
    MouseEnteredTile(Tile),
    AlgorithmChanged(String),
    AllowDiagonalToggled,
}

impl InteractionEvent {
    /// Tile carried by pointer events.
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            Self::TileClicked(tile) | Self::MouseEnteredTile(tile) => Some(tile),
            Self::AlgorithmChanged(_) | Self::AllowDiagonalToggled => None,
        }
    }
}
