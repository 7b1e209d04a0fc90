use super::GridPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineCommand {
    CellClicked(GridPosition),
    Restart,
    InitDisplay,
    ShowHint,
}
