//! Sample board generation.
//!
//! `sample` fills a board with random word paths so tokens of realistic size
//! can be produced without playing. Paths behave like real finds: they start
//! on the grid, step only to adjacent on-grid cells and never revisit a cell.
//! Whether they spell a dictionary word is not checked.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordgrid_core::board::BOARD_SIZE;
use wordgrid_core::token::MAX_MOVES;
use wordgrid_core::{Board, Move, Word};

/// Shortest generated path, in moves
const MIN_PATH_MOVES: usize = 2;

/// Longest generated path, in moves
const MAX_PATH_MOVES: usize = 7;

/// Generate a board for `seed` with `word_count` random on-grid paths.
///
/// The same seed and count always produce the same board.
pub fn generate_sample_board(seed: u64, word_count: usize) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::with_seed(seed);

    for _ in 0..word_count {
        board.add_word(generate_path(&mut rng));
    }

    board
}

/// Random self-avoiding walk from a random cell.
///
/// The walk may stop early when it paints itself into a corner.
fn generate_path(rng: &mut ChaCha8Rng) -> Word {
    let target = rng.gen_range(MIN_PATH_MOVES..=MAX_PATH_MOVES.min(MAX_MOVES));
    let mut row = rng.gen_range(0..BOARD_SIZE);
    let mut col = rng.gen_range(0..BOARD_SIZE);
    let start = (row as u8, col as u8);

    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    visited[row][col] = true;
    let mut moves = Vec::with_capacity(target);

    while moves.len() < target {
        let options: Vec<(Move, usize, usize)> = Move::ALL
            .into_iter()
            .filter_map(|m| {
                let (dr, dc) = m.delta();
                let r = row.checked_add_signed(dr).filter(|&r| r < BOARD_SIZE)?;
                let c = col.checked_add_signed(dc).filter(|&c| c < BOARD_SIZE)?;
                (!visited[r][c]).then_some((m, r, c))
            })
            .collect();

        if options.is_empty() {
            break;
        }

        let (m, r, c) = options[rng.gen_range(0..options.len())];
        visited[r][c] = true;
        row = r;
        col = c;
        moves.push(m);
    }

    Word::new(start.0, start.1, moves)
}
