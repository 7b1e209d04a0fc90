use super::{Board, CellValue};
use serde::{Deserialize, Serialize};

pub const TIC_TAC_TOE_SIZE: usize = 3;

pub type TicTacToeBoard = Board<Mark, TIC_TAC_TOE_SIZE, TIC_TAC_TOE_SIZE>;

/// Contents of a tic-tac-toe cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Cross,
    Nought,
}

impl CellValue for Mark {
    fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Cross),
            'O' | 'o' => Some(Mark::Nought),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::Cross => Mark::Cross,
            Player::Nought => Mark::Nought,
        }
    }

    pub fn symbol(self) -> char {
        self.mark().to_char()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
