use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct GridPosition {
    pub row: usize, // zero-based, top to bottom
    pub col: usize, // zero-based, left to right
}

impl GridPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a pointer position in canvas pixels to the cell underneath it.
    /// Returns `None` for pointer positions left of or above the canvas; the
    /// result is not bounds-checked against any particular board.
    pub fn from_pixel(x: f64, y: f64, cell_size: i32) -> Option<Self> {
        if x < 0.0 || y < 0.0 || cell_size <= 0 {
            return None;
        }
        let cell_size = cell_size as usize;
        Some(Self {
            row: y as usize / cell_size,
            col: x as usize / cell_size,
        })
    }

    /// Up, right, down, left; positions that would fall above or left of the
    /// origin are skipped here, the rest are left to the board to filter.
    pub fn orthogonal_neighbors(&self) -> impl Iterator<Item = GridPosition> {
        let up = self.row.checked_sub(1).map(|row| GridPosition::new(row, self.col));
        let right = Some(GridPosition::new(self.row, self.col + 1));
        let down = Some(GridPosition::new(self.row + 1, self.col));
        let left = self.col.checked_sub(1).map(|col| GridPosition::new(self.row, col));
        [up, right, down, left].into_iter().flatten()
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::fmt::Debug for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
