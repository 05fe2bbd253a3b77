use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{board::Board, color::Color, coord::Coord, piece::PieceKind};

/// Why a move was rejected. `Display` renders the exact wire reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    EmptySource,
    WrongSide,
    NullMove,
    OwnPieceOnTarget,
    UnknownPiece,
    IllegalForPiece,
}
impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource => write!(f, "No piece on source square")?,
            MoveError::WrongSide => write!(f, "Not your turn")?,
            MoveError::NullMove => write!(f, "Must move to a different square")?,
            MoveError::OwnPieceOnTarget => write!(f, "Cannot capture your own piece")?,
            MoveError::UnknownPiece => write!(f, "Unknown piece type")?,
            MoveError::IllegalForPiece => write!(f, "Illegal move for this piece")?,
        }
        Ok(())
    }
}
impl Error for MoveError {}

/// Whether every square strictly between `from` and `to` is empty.
///
/// Precondition: the two squares share a rank, file, or diagonal. The
/// walk derives its unit step from the delta signs and does not verify
/// alignment; only the sliding-piece rules may call it.
fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();
    let mut row = from.row() as i8 + dr;
    let mut col = from.col() as i8 + dc;
    while (row, col) != (to.row() as i8, to.col() as i8) {
        if !board[Coord::new(row as u8, col as u8)].is_empty() {
            return false;
        }
        row += dr;
        col += dc;
    }
    true
}

/// Pawn geometry. The diagonal step only asks for a non-empty target;
/// same-side targets are already ruled out by the validator.
fn pawn_move(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let (dir, start_row) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    if dc == 0 && dr == dir && board[to].is_empty() {
        return true;
    }
    if dc == 0 && dr == 2 * dir && from.row() as i8 == start_row {
        let step = Coord::new((from.row() as i8 + dir) as u8, from.col());
        if board[step].is_empty() && board[to].is_empty() {
            return true;
        }
    }
    dr == dir && dc.abs() == 1 && !board[to].is_empty()
}

fn rook_move(board: &Board, from: Coord, to: Coord) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && path_clear(board, from, to)
}

fn knight_move(from: Coord, to: Coord) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).abs();
    let dc = (to.col() as i8 - from.col() as i8).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn bishop_move(board: &Board, from: Coord, to: Coord) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).abs();
    let dc = (to.col() as i8 - from.col() as i8).abs();
    dr == dc && path_clear(board, from, to)
}

fn queen_move(board: &Board, from: Coord, to: Coord) -> bool {
    rook_move(board, from, to) || bishop_move(board, from, to)
}

fn king_move(from: Coord, to: Coord) -> bool {
    (to.row() as i8 - from.row() as i8).abs() <= 1 && (to.col() as i8 - from.col() as i8).abs() <= 1
}

/// Judge one move. Checks run in a fixed order and stop at the first
/// failure: source occupancy, turn ownership, null move, self-capture,
/// then the piece's own geometry. Turn ownership deliberately precedes
/// geometry, so prodding an opponent piece always answers `WrongSide`.
pub fn validate(board: &Board, turn: Color, from: Coord, to: Coord) -> Result<(), MoveError> {
    let source = board[from];
    if source.is_empty() {
        return Err(MoveError::EmptySource);
    }
    if source.color() != Some(turn) {
        return Err(MoveError::WrongSide);
    }
    if from == to {
        return Err(MoveError::NullMove);
    }
    let target = board[to];
    if !target.is_empty() && target.color() == Some(turn) {
        return Err(MoveError::OwnPieceOnTarget);
    }
    let legal = match source.kind() {
        Some(PieceKind::Pawn) => pawn_move(board, turn, from, to),
        Some(PieceKind::Rook) => rook_move(board, from, to),
        Some(PieceKind::Knight) => knight_move(from, to),
        Some(PieceKind::Bishop) => bishop_move(board, from, to),
        Some(PieceKind::Queen) => queen_move(board, from, to),
        Some(PieceKind::King) => king_move(from, to),
        None => return Err(MoveError::UnknownPiece),
    };
    if legal {
        Ok(())
    } else {
        Err(MoveError::IllegalForPiece)
    }
}

/// A legal destination, tagged with whether it captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub coord: Coord,
    pub capture: bool,
}

/// Every square the piece on `from` may move to, in row-major order.
/// Empty when the source square is empty or not owned by `turn`.
pub fn destinations(board: &Board, turn: Color, from: Coord) -> Vec<Destination> {
    let source = board[from];
    if source.is_empty() || source.color() != Some(turn) {
        return Vec::new();
    }
    Coord::all()
        .filter(|to| validate(board, turn, from, *to).is_ok())
        .map(|to| Destination {
            coord: to,
            capture: !board[to].is_empty(),
        })
        .collect()
}
