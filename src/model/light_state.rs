use super::{Board, CellValue};

pub const LIGHTS_OUT_ROWS: usize = 5;
pub const LIGHTS_OUT_COLS: usize = 5;

pub type LightsOutBoard = Board<LightState, LIGHTS_OUT_ROWS, LIGHTS_OUT_COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightState {
    On,
    Off,
}

impl LightState {
    pub fn toggled(self) -> Self {
        match self {
            LightState::On => LightState::Off,
            LightState::Off => LightState::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == LightState::On
    }
}

impl CellValue for LightState {
    fn to_char(self) -> char {
        match self {
            LightState::On => '#',
            LightState::Off => '.',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | '1' => Some(LightState::On),
            '.' | '0' => Some(LightState::Off),
            _ => None,
        }
    }
}
