use super::{GameError, GridPosition};
use itertools::Itertools;

/// A value that can occupy a board cell. The character form is used for the
/// textual board dump and for boards written out in tests.
pub trait CellValue: Copy + Eq + std::fmt::Debug {
    fn to_char(self) -> char;
    fn from_char(c: char) -> Option<Self>;
}

/// Fixed-size grid; dimensions are part of the type and never change.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<T: CellValue, const ROWS: usize, const COLS: usize> {
    cells: [[T; COLS]; ROWS],
}

impl<T: CellValue, const ROWS: usize, const COLS: usize> std::fmt::Debug
    for Board<T, ROWS, COLS>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            output.push_str(&format!("{}|", row));
            for cell in cells.iter() {
                output.push(cell.to_char());
                output.push('|');
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl<T: CellValue, const ROWS: usize, const COLS: usize> Board<T, ROWS, COLS> {
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; COLS]; ROWS],
        }
    }

    pub const fn from_rows(cells: [[T; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        position.row < ROWS && position.col < COLS
    }

    /// Returns the position back if it addresses a cell on this board.
    pub fn check(&self, position: GridPosition) -> Result<GridPosition, GameError> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(GameError::InvalidCoordinate {
                row: position.row,
                col: position.col,
                rows: ROWS,
                cols: COLS,
            })
        }
    }

    pub fn get(&self, position: GridPosition) -> Option<T> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub fn set(&mut self, position: GridPosition, value: T) -> Result<(), GameError> {
        let position = self.check(position)?;
        self.cells[position.row][position.col] = value;
        Ok(())
    }

    /// Applies `f` to the cell in place; out-of-range positions are ignored.
    pub fn update<F>(&mut self, position: GridPosition, f: F)
    where
        F: FnOnce(T) -> T,
    {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = f(*cell);
        }
    }

    pub fn positions() -> impl Iterator<Item = GridPosition> {
        (0..ROWS)
            .cartesian_product(0..COLS)
            .map(|(row, col)| GridPosition::new(row, col))
    }

    pub fn cells(&self) -> impl Iterator<Item = (GridPosition, T)> + '_ {
        Self::positions().map(move |position| (position, self.cells[position.row][position.col]))
    }

    pub fn row(&self, row: usize) -> Option<&[T; COLS]> {
        self.cells.get(row)
    }

    pub fn all(&self, value: T) -> bool {
        self.cells.iter().flatten().all(|cell| *cell == value)
    }

    pub fn any(&self, value: T) -> bool {
        self.cells.iter().flatten().any(|cell| *cell == value)
    }

    pub fn count(&self, value: T) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell == value).count()
    }

    #[cfg(test)]
    /// Parse a board written one row per line, e.g. "#.#" / "...".
    /// Whitespace and `|` separators are ignored.
    pub fn parse(s: &str) -> Self {
        let rows: Vec<Vec<T>> = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace() && *c != '|')
                    .map(|c| T::from_char(c).unwrap())
                    .collect::<Vec<T>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        assert_eq!(rows.len(), ROWS, "expected {} rows", ROWS);

        let mut cells = [[rows[0][0]; COLS]; ROWS];
        for (row, values) in rows.into_iter().enumerate() {
            assert_eq!(values.len(), COLS, "expected {} cols in row {}", COLS, row);
            for (col, value) in values.into_iter().enumerate() {
                cells[row][col] = value;
            }
        }
        Self { cells }
    }
}
