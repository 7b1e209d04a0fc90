use crate::model::{GameError, GameSnapshot, GridPosition};

/// Contract between a game core and whatever hosts it (an event loop, a
/// channel subscription, or a plain test calling it directly).
pub trait GridGame {
    type Snapshot: GameSnapshot;

    /// Handles one click on `position`.
    ///
    /// Out-of-range positions fail with [`GameError::InvalidCoordinate`].
    /// On a finished game any in-range click restarts it instead of moving.
    fn apply_move(&mut self, position: GridPosition) -> Result<Self::Snapshot, GameError>;

    fn snapshot(&self) -> Self::Snapshot;

    fn reset(&mut self);

    /// A move worth making next, for games that can suggest one.
    fn hint(&self) -> Option<GridPosition> {
        None
    }
}
