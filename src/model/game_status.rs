use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightsOutStatus {
    Playing,
    Won,
}

impl LightsOutStatus {
    pub fn is_terminal(self) -> bool {
        self != LightsOutStatus::Playing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicTacToeStatus {
    Playing,
    Draw,
    CrossWon,
    NoughtWon,
}

impl TicTacToeStatus {
    pub fn is_terminal(self) -> bool {
        self != TicTacToeStatus::Playing
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Cross => TicTacToeStatus::CrossWon,
            Player::Nought => TicTacToeStatus::NoughtWon,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            TicTacToeStatus::CrossWon => Some(Player::Cross),
            TicTacToeStatus::NoughtWon => Some(Player::Nought),
            TicTacToeStatus::Playing | TicTacToeStatus::Draw => None,
        }
    }
}
