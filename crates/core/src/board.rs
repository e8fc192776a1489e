//! Board state: a seed plus the word paths discovered on its grid.
//!
//! The letters are never stored here. They are a pure function of the seed
//! (see [`crate::grid`]), so a board is fully described by `(seed, words)`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ParseError;
use crate::grid::Grid;

/// Width of the grid in cells (the grid is square).
pub const BOARD_SIZE: usize = 5;

/// Number of bits in a board seed.
pub const SEED_BITS: usize = 63;

/// Largest seed a board may carry.
pub const MAX_SEED: u64 = (1 << SEED_BITS) - 1;

/// One step of a word's path to an adjacent cell.
///
/// The discriminants are the wire ordinals and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Move {
    /// Every move, indexed by ordinal.
    pub const ALL: [Move; 8] = [
        Move::North,
        Move::NorthEast,
        Move::East,
        Move::SouthEast,
        Move::South,
        Move::SouthWest,
        Move::West,
        Move::NorthWest,
    ];

    /// Stable 3-bit ordinal used on the wire.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Move::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Move> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// `(row, col)` offset of this step. Rows grow southwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::North => (-1, 0),
            Move::NorthEast => (-1, 1),
            Move::East => (0, 1),
            Move::SouthEast => (1, 1),
            Move::South => (1, 0),
            Move::SouthWest => (1, -1),
            Move::West => (0, -1),
            Move::NorthWest => (-1, -1),
        }
    }

    /// Compass abbreviation (`N`, `NE`, ...).
    pub fn abbrev(self) -> &'static str {
        match self {
            Move::North => "N",
            Move::NorthEast => "NE",
            Move::East => "E",
            Move::SouthEast => "SE",
            Move::South => "S",
            Move::SouthWest => "SW",
            Move::West => "W",
            Move::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.abbrev().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMove(s.to_string()))
    }
}

/// A discovered word: a start cell and the path of moves from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub start_row: u8,
    pub start_col: u8,
    pub moves: Vec<Move>,
}

impl Word {
    pub fn new(start_row: u8, start_col: u8, moves: Vec<Move>) -> Self {
        Self {
            start_row,
            start_col,
            moves,
        }
    }

    /// Number of letters the path covers, start cell included.
    pub fn letter_count(&self) -> usize {
        self.moves.len() + 1
    }
}

/// Formats as `ROW,COL:MOVE,MOVE,...`, the form [`Word::from_str`] accepts.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}:", self.start_row, self.start_col)?;
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, path) = s
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedWord(s.to_string()))?;
        let (row, col) = start
            .split_once(',')
            .ok_or_else(|| ParseError::MalformedWord(s.to_string()))?;

        let moves = path
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()?;

        Ok(Word::new(parse_coordinate(row)?, parse_coordinate(col)?, moves))
    }
}

fn parse_coordinate(s: &str) -> Result<u8, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(s.to_string()))
}

/// A word-search board.
///
/// The seed is fixed for the board's lifetime; words are appended as they are
/// found. Encoding to a token is done by [`crate::token`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    seed: u64,
    words: Vec<Word>,
}

impl Board {
    /// Create an empty board with a random seed in `0..=MAX_SEED`.
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen_range(0..=MAX_SEED))
    }

    /// Create an empty board for a known seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(seed, Vec::new())
    }

    /// Reassemble a board from its seed and words, as decoded from a token.
    pub fn from_parts(seed: u64, words: Vec<Word>) -> Self {
        Self { seed, words }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Append a found word. No dictionary or path check is made here.
    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Regenerate the letter grid for this board's seed.
    pub fn grid(&self) -> Grid {
        Grid::from_seed(self.seed)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the seed, the grid and each word with the letters it spells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        writeln!(f, "seed: {}", self.seed)?;
        writeln!(f)?;
        write!(f, "{grid}")?;
        if !self.words.is_empty() {
            writeln!(f)?;
        }
        for word in &self.words {
            match grid.spell(word) {
                Some(letters) => writeln!(f, "{word}  {letters}")?,
                None => writeln!(f, "{word}  (off grid)")?,
            }
        }
        Ok(())
    }
}
