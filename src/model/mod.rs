mod board;
mod game_engine_command;
mod game_engine_event;
mod game_error;
mod game_kind;
pub mod game_state_snapshot;
mod game_status;
mod grid_position;
mod light_state;
mod mark;

pub use board::{Board, CellValue};
pub use game_engine_command::GameEngineCommand;
pub use game_engine_event::GameEngineEvent;
pub use game_error::GameError;
pub use game_kind::GameKind;
pub use game_state_snapshot::{GameSnapshot, LightsOutSnapshot, TicTacToeSnapshot};
pub use game_status::{LightsOutStatus, TicTacToeStatus};
pub use grid_position::GridPosition;
pub use light_state::{LightState, LightsOutBoard, LIGHTS_OUT_COLS, LIGHTS_OUT_ROWS};
pub use mark::{Mark, Player, TicTacToeBoard, TIC_TAC_TOE_SIZE};
