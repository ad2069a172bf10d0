//! Best-effort word placement into a square letter grid.

use super::{Cell, Direction, Grid, PlacedWord, Puzzle};
use crate::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_WORDS_TO_PLACE, FILL_ALPHABET, MAX_GRID_SIZE,
    MAX_PLACEMENT_ATTEMPTS,
};
use crate::errors::{AppError, AppResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Settings for building word-search puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    grid_size: usize,
    words_to_place: usize,
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        PuzzleGenerator {
            grid_size: DEFAULT_GRID_SIZE,
            words_to_place: DEFAULT_WORDS_TO_PLACE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl PuzzleGenerator {
    /// Creates a generator for a `grid_size` x `grid_size` grid that tries to
    /// place `words_to_place` words.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Puzzle` if `grid_size` is zero or larger than
    /// [`MAX_GRID_SIZE`].
    pub fn new(grid_size: usize, words_to_place: usize) -> AppResult<Self> {
        if grid_size == 0 {
            return Err(AppError::Puzzle(
                "Grid size must be at least 1".to_string(),
            ));
        }
        if grid_size > MAX_GRID_SIZE {
            return Err(AppError::Puzzle(format!(
                "Grid size must be at most {}, got {}",
                MAX_GRID_SIZE, grid_size
            )));
        }
        Ok(PuzzleGenerator {
            grid_size,
            words_to_place,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Overrides how many random placements are tried per word.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn words_to_place(&self) -> usize {
        self.words_to_place
    }

    /// Builds a puzzle from a pool of candidate words.
    ///
    /// The pool is shuffled and the first `words_to_place` words are tried in
    /// turn. Each gets up to `max_attempts` random direction/anchor pairs; a
    /// placement may cross another word only where the letters agree. Words
    /// that never fit are left out, so `placed` can be shorter than asked
    /// for. Remaining cells are filled with random letters.
    ///
    /// Words are upper-cased before placement. Empty words are ignored, and
    /// a word repeated in the pool is only tried once.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodgarden::puzzle::PuzzleGenerator;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let puzzle = PuzzleGenerator::default().generate(&["calm", "joy"], &mut rng);
    ///
    /// for placed in &puzzle.placed {
    ///     assert_eq!(puzzle.grid.read(&placed.cells), placed.word);
    /// }
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, words: &[&str], rng: &mut R) -> Puzzle {
        let size = self.grid_size;
        let mut cells: Vec<Option<char>> = vec![None; size * size];

        let mut seen = HashSet::new();
        let mut pool: Vec<String> = words
            .iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        pool.shuffle(rng);
        pool.truncate(self.words_to_place);

        let mut placed = Vec::with_capacity(pool.len());
        for word in pool {
            match self.place_word(&word, &mut cells, rng) {
                Some(path) => {
                    debug!(word = %word, start = %path[0], "Placed word");
                    placed.push(PlacedWord { word, cells: path });
                }
                None => warn!(
                    word = %word,
                    attempts = self.max_attempts,
                    "Could not place word; leaving it out"
                ),
            }
        }

        let letters = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
            .collect();

        Puzzle {
            grid: Grid::from_letters(size, letters),
            placed,
        }
    }

    fn place_word<R: Rng + ?Sized>(
        &self,
        word: &str,
        cells: &mut [Option<char>],
        rng: &mut R,
    ) -> Option<Vec<Cell>> {
        let letters: Vec<char> = word.chars().collect();
        let size = self.grid_size;
        if letters.len() > size {
            return None;
        }

        for _ in 0..self.max_attempts {
            let direction = *Direction::ALL.choose(rng)?;
            let anchor = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));

            let Some(end) = anchor.offset(direction, letters.len() - 1) else {
                continue;
            };
            if end.row >= size || end.col >= size {
                continue;
            }

            let path: Vec<Cell> = (0..letters.len())
                .filter_map(|step| anchor.offset(direction, step))
                .collect();

            let fits = path
                .iter()
                .zip(&letters)
                .all(|(cell, &letter)| match cells[cell.row * size + cell.col] {
                    None => true,
                    Some(existing) => existing == letter,
                });
            if !fits {
                continue;
            }

            for (cell, &letter) in path.iter().zip(&letters) {
                cells[cell.row * size + cell.col] = Some(letter);
            }
            return Some(path);
        }

        None
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    FILL_ALPHABET
        .choose(rng)
        .map_or('A', |&byte| char::from(byte))
}
