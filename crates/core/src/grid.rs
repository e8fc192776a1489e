//! Deterministic letter grid generated from a board seed.
//!
//! All randomness comes from a ChaCha8 RNG seeded with the board seed, so the
//! same seed yields the same grid on every platform and every run. Tokens never
//! carry letters; a decoded board regenerates its grid from here.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::{Word, BOARD_SIZE};

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A square grid of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Generate the grid for `seed`, row by row.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cells = [[0u8; BOARD_SIZE]; BOARD_SIZE];

        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = LETTERS[rng.gen_range(0..LETTERS.len())];
            }
        }

        Self { cells }
    }

    /// Letter at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(|&b| b as char)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&b| b as char).collect())
    }

    /// Cells visited by `word`, start cell first.
    ///
    /// Returns `None` if the start cell or any step falls outside the grid.
    pub fn walk(&self, word: &Word) -> Option<Vec<(usize, usize)>> {
        let mut row = word.start_row as usize;
        let mut col = word.start_col as usize;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }

        let mut path = Vec::with_capacity(word.letter_count());
        path.push((row, col));

        for m in &word.moves {
            let (dr, dc) = m.delta();
            row = row.checked_add_signed(dr).filter(|&r| r < BOARD_SIZE)?;
            col = col.checked_add_signed(dc).filter(|&c| c < BOARD_SIZE)?;
            path.push((row, col));
        }

        Some(path)
    }

    /// Letters spelled along `word`'s path.
    pub fn spell(&self, word: &Word) -> Option<String> {
        self.walk(word)?
            .into_iter()
            .map(|(row, col)| self.get(row, col))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, &b) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", b as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_determinism() {
        assert_eq!(Grid::from_seed(12345), Grid::from_seed(12345));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(Grid::from_seed(1), Grid::from_seed(2));
    }

    #[test]
    fn test_all_cells_are_letters() {
        let grid = Grid::from_seed(7);
        for row in grid.rows() {
            assert_eq!(row.len(), BOARD_SIZE);
            assert!(row.chars().all(|c| c.is_ascii_lowercase()));
        }
        assert_eq!(grid.get(BOARD_SIZE, 0), None);
        assert_eq!(grid.get(0, BOARD_SIZE), None);
    }

    #[test]
    fn test_walk_path() {
        let grid = Grid::from_seed(0);
        let word = Word::new(
            0,
            1,
            vec![Move::South, Move::South, Move::East, Move::NorthEast],
        );

        assert_eq!(
            grid.walk(&word).unwrap(),
            vec![(0, 1), (1, 1), (2, 1), (2, 2), (1, 3)]
        );
    }

    #[test]
    fn test_walk_off_grid() {
        let grid = Grid::from_seed(0);
        assert!(grid.walk(&Word::new(0, 0, vec![Move::North])).is_none());
        assert!(grid.walk(&Word::new(4, 4, vec![Move::SouthEast])).is_none());
        assert!(grid.walk(&Word::new(5, 0, Vec::new())).is_none());
    }

    #[test]
    fn test_spell_follows_path() {
        let grid = Grid::from_seed(99);
        let word = Word::new(2, 2, vec![Move::West, Move::West]);
        let expected: String = [(2, 2), (2, 1), (2, 0)]
            .iter()
            .map(|&(r, c)| grid.get(r, c).unwrap())
            .collect();

        assert_eq!(grid.spell(&word).unwrap(), expected);
    }

    #[test]
    fn test_display_rows() {
        let grid = Grid::from_seed(3);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE);
        assert!(lines.iter().all(|l| l.len() == BOARD_SIZE * 2 - 1));
    }
}
