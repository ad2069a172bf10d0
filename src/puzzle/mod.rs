//! Word-search puzzles: grid generation and selection matching.
//!
//! # Module Structure
//!
//! - `generator`: places words into a square grid and fills the rest
//! - `selection`: turns two endpoint cells into a line of cells and checks
//!   it against the placed words; `WordSearchSession` tracks progress

pub mod generator;
pub mod selection;

pub use generator::PuzzleGenerator;
pub use selection::{derive_line_path, match_selection, WordSearchSession};

use std::fmt;

/// A grid coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The cell `steps` moves away in `direction`, if it exists (non-negative).
    fn offset(&self, direction: Direction, steps: usize) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = isize::try_from(self.row).ok()?.checked_add(dr * steps)?;
        let col = isize::try_from(self.col).ok()?.checked_add(dc * steps)?;
        Some(Cell {
            row: usize::try_from(row).ok()?,
            col: usize::try_from(col).ok()?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight straight-line directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
    ];

    /// Row and column step for one move.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// A filled square matrix of uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Builds a grid from rows of equal length. Returns `None` if the rows do
    /// not form a non-empty square.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut letters = Vec::with_capacity(size * size);
        for row in rows {
            let before = letters.len();
            letters.extend(row.chars());
            if letters.len() - before != size {
                return None;
            }
        }
        (size > 0).then_some(Grid { size, letters })
    }

    pub(crate) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Grid { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        self.contains(cell)
            .then(|| self.letters[cell.row * self.size + cell.col])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Letters along `path`, skipping cells outside the grid.
    pub fn read(&self, path: &[Cell]) -> String {
        path.iter().filter_map(|&cell| self.get(cell)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A word written into the grid, with the cells it occupies in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub cells: Vec<Cell>,
}

impl PlacedWord {
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

/// A generated puzzle: the grid plus every word that made it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub placed: Vec<PlacedWord>,
}

impl Puzzle {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placed.iter().map(|p| p.word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(Cell::new(1, 0)), Some('C'));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.read(&[Cell::new(0, 0), Cell::new(1, 1)]), "AD");
        assert_eq!(grid.to_string(), "A B\nC D\n");

        assert!(Grid::from_rows(&["AB", "C"]).is_none());
        assert!(Grid::from_rows(&["ABC", "DEF"]).is_none());
        assert!(Grid::from_rows(&[]).is_none());
    }

    #[test]
    fn test_cell_offset_stays_non_negative() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(Direction::Up, 1), None);
        assert_eq!(origin.offset(Direction::Left, 1), None);
        assert_eq!(
            origin.offset(Direction::DownRight, 3),
            Some(Cell::new(3, 3))
        );
        assert_eq!(
            Cell::new(4, 2).offset(Direction::UpRight, 2),
            Some(Cell::new(2, 4))
        );
        assert_eq!(origin.offset(Direction::Up, 0), Some(origin));
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        let mut deltas: Vec<_> = Direction::ALL.iter().map(Direction::delta).collect();
        deltas.sort();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
    }
}
