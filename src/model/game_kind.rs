use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{LIGHTS_OUT_COLS, LIGHTS_OUT_ROWS, TIC_TAC_TOE_SIZE};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GameKind {
    #[default]
    LightsOut,
    TicTacToe,
}

impl GameKind {
    pub fn all() -> Vec<GameKind> {
        vec![GameKind::LightsOut, GameKind::TicTacToe]
    }

    pub fn index(&self) -> usize {
        match self {
            GameKind::LightsOut => 0,
            GameKind::TicTacToe => 1,
        }
    }

    pub fn from_index(index: usize) -> GameKind {
        match index {
            1 => GameKind::TicTacToe,
            _ => GameKind::LightsOut,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::LightsOut => "Lights Out",
            GameKind::TicTacToe => "Tic Tac Toe",
        }
    }

    pub fn n_rows(&self) -> usize {
        match self {
            GameKind::LightsOut => LIGHTS_OUT_ROWS,
            GameKind::TicTacToe => TIC_TAC_TOE_SIZE,
        }
    }

    pub fn n_cols(&self) -> usize {
        match self {
            GameKind::LightsOut => LIGHTS_OUT_COLS,
            GameKind::TicTacToe => TIC_TAC_TOE_SIZE,
        }
    }

    /// Edge length of one cell on screen, in pixels.
    pub fn cell_size(&self) -> i32 {
        match self {
            GameKind::LightsOut => 60,
            GameKind::TicTacToe => 100,
        }
    }

    pub fn canvas_width(&self) -> i32 {
        self.cell_size() * self.n_cols() as i32
    }

    pub fn canvas_height(&self) -> i32 {
        self.cell_size() * self.n_rows() as i32
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "lights-out" | "lightsout" => Ok(GameKind::LightsOut),
            "tic-tac-toe" | "tictactoe" => Ok(GameKind::TicTacToe),
            other => Err(format!("unknown game: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for kind in GameKind::all() {
            assert_eq!(GameKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("lights-out".parse::<GameKind>(), Ok(GameKind::LightsOut));
        assert_eq!("Tic Tac Toe".parse::<GameKind>(), Ok(GameKind::TicTacToe));
        assert_eq!("TIC_TAC_TOE".parse::<GameKind>(), Ok(GameKind::TicTacToe));
        assert!("chess".parse::<GameKind>().is_err());
    }

    #[test]
    fn test_canvas_dimensions() {
        assert_eq!(GameKind::LightsOut.canvas_width(), 300);
        assert_eq!(GameKind::LightsOut.canvas_height(), 300);
        assert_eq!(GameKind::TicTacToe.canvas_width(), 300);
        assert_eq!(GameKind::TicTacToe.cell_size(), 100);
    }
}
