use gtk4::cairo;

use super::layout::{CellBounds, CROSS, LIGHT_OFF, LIGHT_ON, NOUGHT};
use crate::model::{
    GameKind, GameSnapshot, GridPosition, LightState, LightsOutSnapshot, Mark, TicTacToeSnapshot,
};

/// Draws the contents of a single cell; the canvas owns the background, the
/// grid lines and the pen settings.
pub trait BoardPainter: GameSnapshot {
    const KIND: GameKind;

    fn paint_cell(
        &self,
        cr: &cairo::Context,
        position: GridPosition,
        bounds: &CellBounds,
    ) -> Result<(), cairo::Error>;
}

impl BoardPainter for LightsOutSnapshot {
    const KIND: GameKind = GameKind::LightsOut;

    fn paint_cell(
        &self,
        cr: &cairo::Context,
        position: GridPosition,
        bounds: &CellBounds,
    ) -> Result<(), cairo::Error> {
        match self.board.get(position) {
            Some(LightState::On) => LIGHT_ON.apply(cr),
            Some(LightState::Off) => LIGHT_OFF.apply(cr),
            None => return Ok(()),
        }
        cr.rectangle(bounds.x, bounds.y, bounds.size, bounds.size);
        cr.fill()
    }
}

impl BoardPainter for TicTacToeSnapshot {
    const KIND: GameKind = GameKind::TicTacToe;

    fn paint_cell(
        &self,
        cr: &cairo::Context,
        position: GridPosition,
        bounds: &CellBounds,
    ) -> Result<(), cairo::Error> {
        match self.board.get(position) {
            Some(Mark::Cross) => {
                CROSS.apply(cr);
                cr.move_to(bounds.x, bounds.y);
                cr.line_to(bounds.right(), bounds.bottom());
                cr.move_to(bounds.right(), bounds.y);
                cr.line_to(bounds.x, bounds.bottom());
                cr.stroke()
            }
            Some(Mark::Nought) => {
                NOUGHT.apply(cr);
                let (cx, cy) = bounds.center();
                cr.new_sub_path();
                cr.arc(cx, cy, bounds.size / 2.0, 0.0, std::f64::consts::TAU);
                cr.stroke()
            }
            Some(Mark::Empty) | None => Ok(()),
        }
    }
}
