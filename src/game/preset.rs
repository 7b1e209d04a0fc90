use crate::model::{LightState, LightsOutBoard};

const X: LightState = LightState::On;
const O: LightState = LightState::Off;

/// A named starting layout for lights out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub board: LightsOutBoard,
}

impl Preset {
    pub const fn new(name: &'static str, board: LightsOutBoard) -> Self {
        Self { name, board }
    }

    pub fn is_solved(&self) -> bool {
        self.board.all(LightState::Off)
    }
}

pub const CORNER_STEP: Preset = Preset::new(
    "Corner Step",
    LightsOutBoard::from_rows([
        [X, X, X, X, O],
        [O, O, O, O, O],
        [O, O, O, X, O],
        [X, O, O, O, X],
        [O, X, O, X, O],
    ]),
);

// The all-lit top row alone leaves this layout unsolvable on a 5x5 board;
// the lit bottom-right corner brings it back into the solvable space.
pub const FULL_TOP_ROW: Preset = Preset::new(
    "Full Top Row",
    LightsOutBoard::from_rows([
        [X, X, X, X, X],
        [O, O, O, O, O],
        [O, O, O, X, O],
        [X, O, O, O, X],
        [O, X, O, X, X],
    ]),
);

pub const RING: Preset = Preset::new(
    "Ring",
    LightsOutBoard::from_rows([
        [O, O, O, O, O],
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
        [O, O, O, O, O],
    ]),
);

pub const FRAME_CORNERS: Preset = Preset::new(
    "Frame Corners",
    LightsOutBoard::from_rows([
        [X, X, O, X, X],
        [X, O, O, O, X],
        [O, O, O, O, O],
        [X, O, O, O, X],
        [X, X, O, X, X],
    ]),
);

pub const DIAMOND: Preset = Preset::new(
    "Diamond",
    LightsOutBoard::from_rows([
        [O, O, X, O, O],
        [O, X, X, X, O],
        [X, X, X, X, X],
        [O, X, X, X, O],
        [O, O, X, O, O],
    ]),
);

pub fn standard_presets() -> Vec<Preset> {
    vec![CORNER_STEP, FULL_TOP_ROW, RING, FRAME_CORNERS, DIAMOND]
}
