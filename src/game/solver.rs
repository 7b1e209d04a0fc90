//! Lights-out solver.
//!
//! Pressing a cell flips it and its orthogonal neighbours, presses commute and
//! pressing twice cancels out, so a layout is solved by a set of presses `x`
//! with `A·x = b` over GF(2), where `b` marks the lit cells and column `j` of
//! `A` marks the cells flipped by pressing `j`. Each equation is packed into a
//! `u64` (one bit per cell), so boards are limited to 64 cells.

use log::{trace, warn};

use crate::model::{Board, GridPosition, LightState};

const MAX_CELLS: usize = u64::BITS as usize;

/// Returns a set of presses that switches every light off, in row-major
/// order, or `None` if the layout cannot be cleared.
pub fn solve<const ROWS: usize, const COLS: usize>(
    board: &Board<LightState, ROWS, COLS>,
) -> Option<Vec<GridPosition>> {
    let n_cells = ROWS * COLS;
    if n_cells > MAX_CELLS {
        warn!(target: "solver", "Board of {} cells is too large to solve", n_cells);
        return None;
    }

    let index = |position: GridPosition| position.row * COLS + position.col;

    // One equation per cell: which presses flip it, and whether it is lit.
    let mut equations: Vec<(u64, bool)> = board
        .cells()
        .map(|(position, state)| {
            let mask = std::iter::once(position)
                .chain(position.orthogonal_neighbors())
                .filter(|p| board.contains(*p))
                .fold(0u64, |acc, p| acc | (1 << index(p)));
            (mask, state.is_on())
        })
        .collect();

    let mut pivots = Vec::with_capacity(n_cells);
    for col in 0..n_cells {
        let bit = 1u64 << col;
        let pivot_row = pivots.len();
        let Some(found) = (pivot_row..n_cells).find(|&r| equations[r].0 & bit != 0) else {
            continue;
        };
        equations.swap(pivot_row, found);

        let (pivot_mask, pivot_rhs) = equations[pivot_row];
        for (r, equation) in equations.iter_mut().enumerate() {
            if r != pivot_row && equation.0 & bit != 0 {
                equation.0 ^= pivot_mask;
                equation.1 ^= pivot_rhs;
            }
        }
        pivots.push(col);
    }

    // Rows past the pivots have no unknowns left; a lit one is a contradiction.
    if equations[pivots.len()..].iter().any(|&(_, rhs)| rhs) {
        trace!(target: "solver", "No solution for {:?}", board);
        return None;
    }

    // Free unknowns are left unpressed, so each pivot unknown equals its rhs.
    let mut presses: Vec<GridPosition> = pivots
        .iter()
        .zip(equations.iter())
        .filter(|(_, equation)| equation.1)
        .map(|(&cell, _)| GridPosition::new(cell / COLS, cell % COLS))
        .collect();
    presses.sort();

    trace!(target: "solver", "Solved with {} presses: {:?}", presses.len(), presses);
    Some(presses)
}
