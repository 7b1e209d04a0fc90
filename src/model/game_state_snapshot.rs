use super::{
    LightsOutBoard, LightsOutStatus, Player, TicTacToeBoard, TicTacToeStatus,
};

/// What a renderer needs from any game's snapshot besides the board itself.
pub trait GameSnapshot: Clone + std::fmt::Debug + 'static {
    /// The status-bar line for this state.
    fn status_message(&self) -> String;
    fn is_terminal(&self) -> bool;
    /// Accepted moves since the last reset.
    fn moves(&self) -> u32;
}

/// Read-only copy of a lights-out game. Fields can be read anywhere but only
/// built inside the model, so a renderer can never write back into a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[readonly::make]
pub struct LightsOutSnapshot {
    pub board: LightsOutBoard,
    pub status: LightsOutStatus,
    pub moves: u32,
    pub preset: &'static str,
}

impl LightsOutSnapshot {
    pub(crate) fn new(
        board: LightsOutBoard,
        status: LightsOutStatus,
        moves: u32,
        preset: &'static str,
    ) -> Self {
        Self {
            board,
            status,
            moves,
            preset,
        }
    }
}

impl GameSnapshot for LightsOutSnapshot {
    fn status_message(&self) -> String {
        match self.status {
            LightsOutStatus::Playing => "Keep playing! :)".to_string(),
            LightsOutStatus::Won => "You've won! Click to play again :)".to_string(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn moves(&self) -> u32 {
        self.moves
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[readonly::make]
pub struct TicTacToeSnapshot {
    pub board: TicTacToeBoard,
    pub status: TicTacToeStatus,
    pub current_player: Player,
    pub moves: u32,
}

impl TicTacToeSnapshot {
    pub(crate) fn new(
        board: TicTacToeBoard,
        status: TicTacToeStatus,
        current_player: Player,
        moves: u32,
    ) -> Self {
        Self {
            board,
            status,
            current_player,
            moves,
        }
    }
}

impl GameSnapshot for TicTacToeSnapshot {
    fn status_message(&self) -> String {
        match self.status {
            TicTacToeStatus::Playing => format!("{}'s Turn", self.current_player),
            TicTacToeStatus::Draw => "It's a Draw! Click to play again.".to_string(),
            TicTacToeStatus::CrossWon => "'X' Won! Click to play again.".to_string(),
            TicTacToeStatus::NoughtWon => "'O' Won! Click to play again.".to_string(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn moves(&self) -> u32 {
        self.moves
    }
}
