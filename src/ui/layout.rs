use gtk4::cairo;

use crate::model::{GameKind, GridPosition};

// Pen widths
pub const SYMBOL_STROKE_WIDTH: f64 = 8.0;
pub const HINT_STROKE_WIDTH: f64 = 4.0;

// Status bar margins, around the label
pub const STATUS_MARGIN_TOP: i32 = 2;
pub const STATUS_MARGIN_BOTTOM: i32 = 4;
pub const STATUS_MARGIN_SIDE: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn apply(&self, cr: &cairo::Context) {
        cr.set_source_rgb(self.r, self.g, self.b);
    }
}

pub const BACKGROUND: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const GRID_LINE: Rgb = Rgb::new(0.75, 0.75, 0.75);
pub const LIGHT_ON: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const LIGHT_OFF: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const CROSS: Rgb = Rgb::new(1.0, 0.0, 0.0);
pub const NOUGHT: Rgb = Rgb::new(0.0, 0.0, 1.0);
pub const HINT: Rgb = Rgb::new(1.0, 0.78, 0.0);

pub fn grid_width(kind: GameKind) -> f64 {
    match kind {
        GameKind::LightsOut => 4.0,
        GameKind::TicTacToe => 8.0,
    }
}

/// Gap between a cell's edge and the symbol drawn in it.
pub fn cell_padding(kind: GameKind) -> f64 {
    match kind {
        GameKind::LightsOut => 4.0,
        GameKind::TicTacToe => (kind.cell_size() / 6) as f64,
    }
}

/// Square inside a cell that its symbol is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CellBounds {
    pub fn for_cell(kind: GameKind, position: GridPosition) -> Self {
        let cell_size = kind.cell_size() as f64;
        let padding = cell_padding(kind);
        Self {
            x: position.col as f64 * cell_size + padding,
            y: position.row as f64 * cell_size + padding,
            size: cell_size - padding * 2.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.size
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.size
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}
