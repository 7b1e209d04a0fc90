use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The caller asked for a cell outside the board. The input layer is
    /// expected to filter these, so seeing one points at an integration bug.
    #[error("Invalid coordinate ({row}, {col}) on a {rows}x{cols} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid preset: {0}")]
    InvalidPreset(String),
}
