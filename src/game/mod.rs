pub mod game_engine;
mod grid_game;
pub mod lights_out;
pub mod preset;
pub mod preset_picker;
pub mod settings;
pub mod solver;
pub mod tic_tac_toe;

pub use game_engine::GameEngine;
pub use grid_game::GridGame;
pub use lights_out::LightsOutGame;
pub use preset::{standard_presets, Preset};
pub use preset_picker::{FixedPresetPicker, PresetPicker, SeededPresetPicker};
pub use settings::Settings;
pub use tic_tac_toe::TicTacToeGame;
