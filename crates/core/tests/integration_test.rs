//! Integration tests for the token codec.
//!
//! These tests exercise the public API end to end: board -> token -> board,
//! with randomized boards from a seeded RNG so failures are reproducible, and
//! with corrupted tokens that must fail cleanly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordgrid_core::{
    board::MAX_SEED,
    token::{self, MAX_MOVES, MAX_PACKED_BYTES, MAX_START, MAX_WORDS},
    Board, Error, Move, Word,
};

fn random_word(rng: &mut ChaCha8Rng) -> Word {
    let move_count = rng.gen_range(0..=MAX_MOVES);
    let moves = (0..move_count)
        .map(|_| Move::ALL[rng.gen_range(0..Move::ALL.len())])
        .collect();
    Word::new(
        rng.gen_range(0..=MAX_START),
        rng.gen_range(0..=MAX_START),
        moves,
    )
}

fn random_board(rng: &mut ChaCha8Rng, max_words: usize) -> Board {
    let word_count = rng.gen_range(0..=max_words);
    let words = (0..word_count).map(|_| random_word(rng)).collect();
    Board::from_parts(rng.gen_range(0..=MAX_SEED), words)
}

/// Randomized boards of every shape survive a round trip.
#[test]
fn test_random_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let board = random_board(&mut rng, 24);
        let token = token::encode(&board).expect("encode failed");
        let decoded = token::decode(&token).expect("decode failed");
        assert_eq!(decoded, board);
    }
}

/// The largest representable board: max seed, 255 words of 15 moves each.
#[test]
fn test_boundary_board() {
    let moves: Vec<Move> = (0..MAX_MOVES).map(|i| Move::ALL[i % 8]).collect();
    let words = (0..MAX_WORDS)
        .map(|i| Word::new((i % 8) as u8, MAX_START, moves.clone()))
        .collect();
    let board = Board::from_parts(MAX_SEED, words);

    let packed = token::pack(&board).unwrap();
    assert!(packed.len() <= MAX_PACKED_BYTES);

    let token = token::encode(&board).unwrap();
    assert_eq!(token::decode(&token).unwrap(), board);
}

/// Words whose trailing fields are all zero are not lost with the high bytes.
#[test]
fn test_trailing_zero_words_survive() {
    let board = Board::from_parts(
        0,
        vec![
            Word::new(0, 0, Vec::new()),
            Word::new(0, 0, vec![Move::North]),
            Word::new(0, 0, Vec::new()),
        ],
    );

    let token = token::encode(&board).unwrap();
    assert_eq!(token::decode(&token).unwrap(), board);
}

/// Duplicate words are kept, in order.
#[test]
fn test_duplicates_preserved() {
    let word = Word::new(1, 3, vec![Move::East, Move::South, Move::West, Move::NorthWest]);
    let board = Board::from_parts(7, vec![word.clone(), word.clone(), word]);

    let decoded = token::decode(&token::encode(&board).unwrap()).unwrap();
    assert_eq!(decoded.words().len(), 3);
    assert_eq!(decoded, board);
}

/// Building a board word by word matches building it from parts.
#[test]
fn test_incremental_board() {
    let mut board = Board::with_seed(12345);
    board.add_word("0,1:S,S,E,NE".parse().unwrap());
    board.add_word("1,0:N,W,E".parse().unwrap());

    let token = board.to_token().unwrap();
    let decoded = Board::from_token(&token).unwrap();
    assert_eq!(decoded.seed(), 12345);
    assert_eq!(decoded.words(), board.words());
    assert_eq!(decoded.grid(), board.grid());
}

/// Oversized boards are rejected before any token exists.
#[test]
fn test_overflow_rejected() {
    let too_many = Board::from_parts(1, vec![Word::new(0, 0, Vec::new()); MAX_WORDS + 1]);
    assert!(matches!(token::encode(&too_many), Err(Error::Encode(_))));

    let too_long = Board::from_parts(1, vec![Word::new(0, 0, vec![Move::East; MAX_MOVES + 1])]);
    assert!(matches!(token::encode(&too_long), Err(Error::Encode(_))));

    let big_seed = Board::with_seed(MAX_SEED + 1);
    assert!(matches!(token::encode(&big_seed), Err(Error::Encode(_))));
}

/// Changing any single character yields an error or a well-formed board.
#[test]
fn test_character_corruption() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let board = random_board(&mut rng, 8);
    let token = token::encode(&board).unwrap();
    let alphabet = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let mut rejected = 0;
    for pos in 0..token.len() {
        let mut corrupted = token.clone().into_bytes();
        let original = corrupted[pos];
        corrupted[pos] = alphabet
            .iter()
            .copied()
            .find(|&c| c != original)
            .unwrap();
        let corrupted = String::from_utf8(corrupted).unwrap();

        match token::decode(&corrupted) {
            Err(Error::Decode(_)) => rejected += 1,
            Err(other) => panic!("unexpected error kind: {other}"),
            Ok(decoded) => assert!(token::encode(&decoded).is_ok()),
        }
    }

    // Header and checksum catch the vast majority of edits
    assert!(rejected > token.len() / 2);
}

/// Every strict prefix of a token is rejected.
#[test]
fn test_truncation_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let board = random_board(&mut rng, 8);
    let token = token::encode(&board).unwrap();

    for len in 0..token.len() {
        let result = token::decode(&token[..len]);
        assert!(
            matches!(result, Err(Error::Decode(_))),
            "prefix of length {len} was accepted"
        );
    }
}

/// Foreign text is rejected rather than partially decoded.
#[test]
fn test_foreign_input() {
    for input in ["hello world", "AAAA", "////", "eJ", "=="] {
        assert!(token::decode(input).is_err(), "{input:?} was accepted");
    }
}

/// Independent encodes on separate threads agree.
#[test]
fn test_parallel_encodes() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let board = random_board(&mut rng, 32);
    let expected = token::encode(&board).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let board = board.clone();
            std::thread::spawn(move || token::encode(&board).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
