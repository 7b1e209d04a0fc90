use log::{debug, info, trace};

use super::GridGame;
use crate::model::{
    Board, GameError, GridPosition, Mark, Player, TicTacToeBoard, TicTacToeSnapshot,
    TicTacToeStatus,
};

/// True if `mark` fills a whole line through `position`: its row, its column,
/// and whichever diagonals pass through it. Only lines through the last move
/// can have been completed by it, so nothing else is checked.
pub fn completes_line<const N: usize>(
    board: &Board<Mark, N, N>,
    mark: Mark,
    position: GridPosition,
) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let filled = |cells: &[GridPosition; N]| cells.iter().all(|p| board.get(*p) == Some(mark));

    filled(&std::array::from_fn(|col| GridPosition::new(position.row, col)))
        || filled(&std::array::from_fn(|row| GridPosition::new(row, position.col)))
        || (position.row == position.col
            && filled(&std::array::from_fn(|i| GridPosition::new(i, i))))
        || (position.row + position.col + 1 == N
            && filled(&std::array::from_fn(|i| GridPosition::new(i, N - 1 - i))))
}

/// Noughts and crosses on a 3x3 board. Cross always opens.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: TicTacToeBoard,
    status: TicTacToeStatus,
    current_player: Player,
    moves: u32,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGame {
    pub fn new() -> Self {
        let mut game = Self {
            board: TicTacToeBoard::filled(Mark::Empty),
            status: TicTacToeStatus::Playing,
            current_player: Player::Cross,
            moves: 0,
        };
        game.reset();
        game
    }

    pub fn status(&self) -> TicTacToeStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    fn evaluate(&self, player: Player, position: GridPosition) -> TicTacToeStatus {
        if completes_line(&self.board, player.mark(), position) {
            TicTacToeStatus::won_by(player)
        } else if !self.board.any(Mark::Empty) {
            TicTacToeStatus::Draw
        } else {
            TicTacToeStatus::Playing
        }
    }
}

impl GridGame for TicTacToeGame {
    type Snapshot = TicTacToeSnapshot;

    fn apply_move(&mut self, position: GridPosition) -> Result<TicTacToeSnapshot, GameError> {
        let position = self.board.check(position)?;

        if self.status.is_terminal() {
            debug!(target: "tic_tac_toe", "Click at {} on a finished board; restarting", position);
            self.reset();
            return Ok(self.snapshot());
        }

        if self.board.get(position) != Some(Mark::Empty) {
            trace!(target: "tic_tac_toe", "Ignoring click on occupied cell {}", position);
            return Ok(self.snapshot());
        }

        let player = self.current_player;
        self.board.set(position, player.mark())?;
        self.moves += 1;
        self.status = self.evaluate(player, position);
        trace!(target: "tic_tac_toe", "{} played {}: {:?}", player, position, self.board);

        if self.status.is_terminal() {
            info!(target: "tic_tac_toe", "Game over after {} moves: {:?}", self.moves, self.status);
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.snapshot())
    }

    fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot::new(self.board, self.status, self.current_player, self.moves)
    }

    fn reset(&mut self) {
        self.board = TicTacToeBoard::filled(Mark::Empty);
        self.status = TicTacToeStatus::Playing;
        self.current_player = Player::Cross;
        self.moves = 0;
        debug!(target: "tic_tac_toe", "New game");
    }
}
