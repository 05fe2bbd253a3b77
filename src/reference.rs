//! Cross-check against the `chess` crate's legal move generator.
//!
//! Every fully legal move is also pseudo-legal, so on any reachable
//! position our validator must accept whatever the reference generator
//! produces, castling and en passant aside (neither is modeled here).

use chess::{ChessMove, File, MoveGen, Rank, Square};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{board::Board, color::Color, coord::Coord, rules};

impl From<Square> for Coord {
    fn from(value: Square) -> Self {
        Coord::new(
            (7 - value.get_rank().to_index()).try_into().unwrap(),
            value.get_file().to_index().try_into().unwrap(),
        )
    }
}
impl From<chess::Color> for Color {
    fn from(value: chess::Color) -> Self {
        match value {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}

fn payload(position: &chess::Board) -> String {
    let mut payload = String::with_capacity(64);
    for row in 0..8 {
        for col in 0..8 {
            let square = Square::make_square(Rank::from_index(7 - row), File::from_index(col));
            let letter = match position.piece_on(square) {
                None => '.',
                Some(piece) => {
                    let letter = match piece {
                        chess::Piece::Pawn => 'p',
                        chess::Piece::Knight => 'n',
                        chess::Piece::Bishop => 'b',
                        chess::Piece::Rook => 'r',
                        chess::Piece::Queen => 'q',
                        chess::Piece::King => 'k',
                    };
                    match position.color_on(square).unwrap() {
                        chess::Color::White => letter.to_ascii_uppercase(),
                        chess::Color::Black => letter,
                    }
                }
            };
            payload.push(letter);
        }
    }
    payload
}

/// Castling and en passant are the two legal-move shapes this oracle
/// deliberately rejects; leave them out of the comparison.
fn modeled(position: &chess::Board, movement: ChessMove) -> bool {
    let source = movement.get_source();
    let destination = movement.get_dest();
    let file_delta = source
        .get_file()
        .to_index()
        .abs_diff(destination.get_file().to_index());
    match position.piece_on(source).unwrap() {
        chess::Piece::King => file_delta <= 1,
        chess::Piece::Pawn => file_delta == 0 || position.piece_on(destination).is_some(),
        _ => true,
    }
}

#[test]
fn legal_moves_are_pseudo_legal() {
    let mut rng = SmallRng::seed_from_u64(0x_C0FF_EE);
    for _ in 0..32 {
        let mut position = chess::Board::default();
        for _ in 0..80 {
            let legal: Vec<ChessMove> = MoveGen::new_legal(&position).collect();
            if legal.is_empty() {
                break;
            }
            let board = Board::from_payload(&payload(&position)).unwrap();
            let turn: Color = position.side_to_move().into();

            let modeled_moves: FxHashSet<(Coord, Coord)> = legal
                .iter()
                .filter(|movement| modeled(&position, **movement))
                .map(|movement| (movement.get_source().into(), movement.get_dest().into()))
                .collect();
            for (from, to) in &modeled_moves {
                assert_eq!(
                    rules::validate(&board, turn, *from, *to),
                    Ok(()),
                    "rejected a legal move on {}",
                    payload(&position),
                );
            }

            let sources: FxHashSet<Coord> =
                modeled_moves.iter().map(|(from, _)| *from).collect();
            for from in sources {
                let enumerated = rules::destinations(&board, turn, from);
                let coords: FxHashSet<Coord> =
                    enumerated.iter().map(|movement| movement.coord).collect();
                for (source, to) in &modeled_moves {
                    if source == &from {
                        assert!(
                            coords.contains(to),
                            "enumeration missed {from} -> {to} on {}",
                            payload(&position),
                        );
                    }
                }
                for movement in enumerated {
                    assert_eq!(movement.capture, !board[movement.coord].is_empty());
                }
            }

            let movement = legal[rng.random_range(0..legal.len())];
            position = position.make_move_new(movement);
        }
    }
}
