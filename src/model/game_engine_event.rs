use super::{GameError, GridPosition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineEvent<S> {
    /// Sent after every handled command, whether or not the board changed.
    BoardUpdated(S),
    MoveRejected(GameError),
    HintSuggested(Option<GridPosition>),
}
