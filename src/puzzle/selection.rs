//! Matching a dragged selection against the placed words.

use super::{Cell, Grid, PlacedWord, Puzzle};
use std::collections::HashSet;
use tracing::{debug, info};

/// Cells on the straight line from `start` to `end`, both included.
///
/// Only horizontal, vertical and 45° diagonal lines are valid; any other pair
/// of endpoints yields an empty path. Selecting a single cell yields just
/// that cell.
///
/// # Examples
///
/// ```
/// use moodgarden::puzzle::{derive_line_path, Cell};
///
/// let path = derive_line_path(Cell::new(2, 2), Cell::new(0, 0));
/// assert_eq!(path, vec![Cell::new(2, 2), Cell::new(1, 1), Cell::new(0, 0)]);
///
/// assert!(derive_line_path(Cell::new(0, 0), Cell::new(1, 2)).is_empty());
/// ```
pub fn derive_line_path(start: Cell, end: Cell) -> Vec<Cell> {
    let row_delta = end.row.abs_diff(start.row);
    let col_delta = end.col.abs_diff(start.col);
    if row_delta != 0 && col_delta != 0 && row_delta != col_delta {
        return Vec::new();
    }

    let steps = row_delta.max(col_delta);
    let step = |from: usize, to: usize, i: usize| {
        if to >= from {
            from + i * usize::from(to != from)
        } else {
            from - i
        }
    };

    (0..=steps)
        .map(|i| Cell {
            row: step(start.row, end.row, i),
            col: step(start.col, end.col, i),
        })
        .collect()
}

/// Returns the placed word spelled by `path`, read in either direction.
///
/// Words in `already_found` are skipped, as are paths that leave the grid.
pub fn match_selection<'a>(
    grid: &Grid,
    path: &[Cell],
    placed: &'a [PlacedWord],
    already_found: &HashSet<String>,
) -> Option<&'a str> {
    if path.is_empty() || path.iter().any(|&cell| !grid.contains(cell)) {
        return None;
    }

    let forward = grid.read(path);
    let reversed: String = forward.chars().rev().collect();

    placed
        .iter()
        .map(|p| p.word.as_str())
        .filter(|word| !already_found.contains(*word))
        .find(|word| *word == forward || *word == reversed)
}

/// Progress through one puzzle.
#[derive(Debug, Clone)]
pub struct WordSearchSession {
    puzzle: Puzzle,
    found: HashSet<String>,
    found_order: Vec<String>,
}

impl WordSearchSession {
    pub fn new(puzzle: Puzzle) -> Self {
        WordSearchSession {
            puzzle,
            found: HashSet::new(),
            found_order: Vec::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Checks the selection from `start` to `end`, recording a newly found word.
    ///
    /// Returns `None` for an invalid line, a miss, or a word already found.
    pub fn select(&mut self, start: Cell, end: Cell) -> Option<String> {
        let path = derive_line_path(start, end);
        let word = match_selection(&self.puzzle.grid, &path, &self.puzzle.placed, &self.found)?
            .to_string();

        self.found.insert(word.clone());
        self.found_order.push(word.clone());
        info!(word = %word, found = self.found.len(), total = self.puzzle.placed.len(), "Word found");
        if self.is_complete() {
            debug!("All words found");
        }
        Some(word)
    }

    /// Words found so far, in the order they were found.
    pub fn found(&self) -> &[String] {
        &self.found_order
    }

    pub fn remaining(&self) -> Vec<&str> {
        self.puzzle
            .words()
            .filter(|word| !self.found.contains(*word))
            .collect()
    }

    /// True once every placed word is found. A puzzle with nothing placed is
    /// never complete.
    pub fn is_complete(&self) -> bool {
        !self.puzzle.placed.is_empty() && self.remaining().is_empty()
    }
}
