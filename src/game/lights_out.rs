use log::{debug, info, trace};

use super::preset::{standard_presets, Preset};
use super::preset_picker::PresetPicker;
use super::solver::solve;
use super::GridGame;
use crate::model::{
    Board, GameError, GridPosition, LightState, LightsOutBoard, LightsOutSnapshot,
    LightsOutStatus,
};

/// Flips the light at `position` and its up/down/left/right neighbours that
/// lie on the board; there is no wraparound at the edges.
pub fn press<const ROWS: usize, const COLS: usize>(
    board: &mut Board<LightState, ROWS, COLS>,
    position: GridPosition,
) -> Result<(), GameError> {
    let position = board.check(position)?;
    board.update(position, LightState::toggled);
    for neighbor in position.orthogonal_neighbors() {
        board.update(neighbor, LightState::toggled);
    }
    Ok(())
}

/// The 5x5 toggle puzzle: every move flips a plus-shaped group of lights,
/// and the game is won once every light is off.
pub struct LightsOutGame {
    board: LightsOutBoard,
    status: LightsOutStatus,
    moves: u32,
    presets: Vec<Preset>,
    preset_index: usize,
    picker: Box<dyn PresetPicker>,
}

impl std::fmt::Debug for LightsOutGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightsOutGame")
            .field("preset", &self.preset_name())
            .field("status", &self.status)
            .field("moves", &self.moves)
            .field("board", &self.board)
            .finish()
    }
}

impl LightsOutGame {
    /// A game over the standard preset catalogue.
    pub fn new(picker: impl PresetPicker + 'static) -> Self {
        Self::build(standard_presets(), Box::new(picker))
    }

    /// A game over a caller-supplied catalogue. Every preset must have at
    /// least one light on.
    pub fn with_presets(
        presets: Vec<Preset>,
        picker: impl PresetPicker + 'static,
    ) -> Result<Self, GameError> {
        if presets.is_empty() {
            return Err(GameError::InvalidPreset("no presets given".to_string()));
        }
        if let Some(solved) = presets.iter().find(|preset| preset.is_solved()) {
            return Err(GameError::InvalidPreset(format!(
                "'{}' has every light off already",
                solved.name
            )));
        }
        Ok(Self::build(presets, Box::new(picker)))
    }

    fn build(presets: Vec<Preset>, picker: Box<dyn PresetPicker>) -> Self {
        let mut game = Self {
            board: LightsOutBoard::filled(LightState::Off),
            status: LightsOutStatus::Playing,
            moves: 0,
            presets,
            preset_index: 0,
            picker,
        };
        game.reset();
        game
    }

    pub fn preset_name(&self) -> &'static str {
        self.presets
            .get(self.preset_index)
            .map(|preset| preset.name)
            .unwrap_or_default()
    }

    pub fn status(&self) -> LightsOutStatus {
        self.status
    }
}

impl GridGame for LightsOutGame {
    type Snapshot = LightsOutSnapshot;

    fn apply_move(&mut self, position: GridPosition) -> Result<LightsOutSnapshot, GameError> {
        let position = self.board.check(position)?;

        if self.status.is_terminal() {
            debug!(target: "lights_out", "Click at {} on a finished board; restarting", position);
            self.reset();
            return Ok(self.snapshot());
        }

        press(&mut self.board, position)?;
        self.moves += 1;
        trace!(target: "lights_out", "Pressed {}: {:?}", position, self.board);

        if self.board.all(LightState::Off) {
            self.status = LightsOutStatus::Won;
            info!(
                target: "lights_out",
                "All lights off after {} moves on '{}'",
                self.moves,
                self.preset_name()
            );
        }

        Ok(self.snapshot())
    }

    fn snapshot(&self) -> LightsOutSnapshot {
        LightsOutSnapshot::new(self.board, self.status, self.moves, self.preset_name())
    }

    fn reset(&mut self) {
        let n_presets = self.presets.len();
        self.preset_index = self.picker.pick(n_presets) % n_presets.max(1);
        if let Some(preset) = self.presets.get(self.preset_index) {
            self.board = preset.board;
        }
        self.status = LightsOutStatus::Playing;
        self.moves = 0;
        debug!(target: "lights_out", "New game from preset '{}'", self.preset_name());
    }

    fn hint(&self) -> Option<GridPosition> {
        if self.status.is_terminal() {
            return None;
        }
        solve(&self.board).and_then(|presses| presses.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use test_context::test_context;

    use super::*;
    use crate::game::preset::{CORNER_STEP, DIAMOND, FULL_TOP_ROW};
    use crate::game::preset_picker::{FixedPresetPicker, SeededPresetPicker};
    use crate::model::GameSnapshot;
    use crate::tests::UsingLogger;

    fn plus_preset() -> Preset {
        Preset::new(
            "Plus",
            LightsOutBoard::parse(
                "\
                .....
                ..#..
                .###.
                ..#..
                .....",
            ),
        )
    }

    fn single_plus_game() -> LightsOutGame {
        LightsOutGame::with_presets(vec![plus_preset()], FixedPresetPicker::new(0)).unwrap()
    }

    #[test]
    fn test_press_interior_flips_five_cells() {
        let mut board = LightsOutBoard::filled(LightState::Off);
        press(&mut board, GridPosition::new(2, 2)).unwrap();
        assert_eq!(board, plus_preset().board);
        assert_eq!(board.count(LightState::On), 5);
    }

    #[test]
    fn test_press_corner_does_not_wrap() {
        let mut board = LightsOutBoard::filled(LightState::Off);
        press(&mut board, GridPosition::new(4, 4)).unwrap();
        let expected = LightsOutBoard::parse(
            "\
            .....
            .....
            .....
            ....#
            ...##",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_press_edge_flips_four_cells() {
        let mut board = LightsOutBoard::filled(LightState::On);
        press(&mut board, GridPosition::new(0, 2)).unwrap();
        assert_eq!(board.count(LightState::Off), 4);
    }

    #[test]
    fn test_reset_uses_injected_picker() {
        let game = LightsOutGame::new(FixedPresetPicker::new(1));
        let snapshot = game.snapshot();
        assert_eq!(snapshot.board, FULL_TOP_ROW.board);
        assert_eq!(snapshot.preset, "Full Top Row");
        assert_eq!(snapshot.status, LightsOutStatus::Playing);
        assert_eq!(snapshot.moves, 0);
    }

    #[test]
    fn test_seeded_games_start_identically() {
        let a = LightsOutGame::new(SeededPresetPicker::new(Some(99)));
        let b = LightsOutGame::new(SeededPresetPicker::new(Some(99)));
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_single_click_on_center_wins(_: &mut UsingLogger) {
        let mut game = single_plus_game();
        let snapshot = game.apply_move(GridPosition::new(2, 2)).unwrap();
        assert_eq!(snapshot.status, LightsOutStatus::Won);
        assert!(snapshot.board.all(LightState::Off));
        assert_eq!(snapshot.moves, 1);
        assert_eq!(
            snapshot.status_message(),
            "You've won! Click to play again :)"
        );
    }

    #[test]
    fn test_move_then_same_move_restores_board() {
        let mut game = LightsOutGame::new(FixedPresetPicker::new(0));
        let before = game.snapshot();
        for position in LightsOutBoard::positions() {
            let once = game.apply_move(position).unwrap();
            assert_ne!(once.board, before.board);
            let twice = game.apply_move(position).unwrap();
            assert_eq!(twice.board, before.board, "press at {} not undone", position);
            assert_eq!(twice.status, LightsOutStatus::Playing);
        }
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let mut game = LightsOutGame::new(FixedPresetPicker::new(0));
        let before = game.snapshot();
        assert_eq!(
            game.apply_move(GridPosition::new(5, 0)).unwrap_err(),
            GameError::InvalidCoordinate {
                row: 5,
                col: 0,
                rows: 5,
                cols: 5
            }
        );
        assert!(game.apply_move(GridPosition::new(0, 17)).is_err());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_click_after_win_restarts() {
        let plus = plus_preset();
        let mut picks = vec![1usize, 0, 0];
        let picker = move |_n: usize| picks.remove(0);
        let mut game = LightsOutGame::with_presets(vec![DIAMOND, plus], picker).unwrap();

        // second preset first, so a single centre press wins
        assert_eq!(game.snapshot().preset, "Plus");
        let won = game.apply_move(GridPosition::new(2, 2)).unwrap();
        assert_eq!(won.status, LightsOutStatus::Won);

        // the coordinate is ignored: the board is reset, not pressed
        let restarted = game.apply_move(GridPosition::new(0, 0)).unwrap();
        assert_eq!(restarted.status, LightsOutStatus::Playing);
        assert_eq!(restarted.board, DIAMOND.board);
        assert_eq!(restarted.moves, 0);
    }

    #[test]
    fn test_out_of_range_click_after_win_does_not_restart() {
        let mut game = single_plus_game();
        game.apply_move(GridPosition::new(2, 2)).unwrap();
        assert!(game.apply_move(GridPosition::new(9, 9)).is_err());
        assert_eq!(game.status(), LightsOutStatus::Won);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut game = LightsOutGame::new(FixedPresetPicker::new(0));
        let snapshot = game.snapshot();
        game.apply_move(GridPosition::new(1, 1)).unwrap();
        assert_eq!(snapshot.board, CORNER_STEP.board);
        assert_ne!(game.snapshot().board, snapshot.board);
    }

    #[test]
    fn test_following_hints_wins() {
        for index in 0..standard_presets().len() {
            let mut game = LightsOutGame::new(FixedPresetPicker::new(index));
            let mut guard = 0;
            while game.status() == LightsOutStatus::Playing {
                let hint = game.hint().expect("standard presets are solvable");
                game.apply_move(hint).unwrap();
                guard += 1;
                assert!(guard <= 25, "hints did not converge for preset {}", index);
            }
            assert!(game.snapshot().board.all(LightState::Off));
            assert_eq!(game.hint(), None);
        }
    }

    #[test]
    fn test_rejects_bad_preset_lists() {
        assert!(matches!(
            LightsOutGame::with_presets(vec![], FixedPresetPicker::new(0)),
            Err(GameError::InvalidPreset(_))
        ));
        let dark = Preset::new("Dark", LightsOutBoard::filled(LightState::Off));
        assert!(matches!(
            LightsOutGame::with_presets(vec![CORNER_STEP, dark], FixedPresetPicker::new(0)),
            Err(GameError::InvalidPreset(_))
        ));
    }
}
