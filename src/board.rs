use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Index,
};

use crate::{
    color::Color,
    coord::Coord,
    piece::{ColoredPiece, PieceKind},
};

/// One square's content as decoded from the payload.
///
/// The payload is deliberately permissive: a letter that names no piece
/// still belongs to a side by its case and only fails at dispatch time,
/// and any other byte is an ownerless obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(ColoredPiece),
    Stray(char),
}
impl Cell {
    fn from_byte(byte: u8) -> Self {
        let c = byte as char;
        if c == '.' {
            Cell::Empty
        } else if let Some(piece) = ColoredPiece::from_letter(c) {
            Cell::Piece(piece)
        } else {
            Cell::Stray(c)
        }
    }
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Piece(piece) => Some(piece.color),
            Cell::Stray(c) => {
                if c.is_ascii_uppercase() {
                    Some(Color::White)
                } else if c.is_ascii_lowercase() {
                    Some(Color::Black)
                } else {
                    None
                }
            }
        }
    }
    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Piece(piece) => Some(piece.kind),
            Cell::Empty | Cell::Stray(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadBoardData;
impl Display for BadBoardData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "board payload was not exactly 64 cells")?;
        Ok(())
    }
}
impl Error for BadBoardData {}

/// An immutable position snapshot, built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}
impl Board {
    /// Decode a 64-byte payload, rank-major from the top rank down.
    ///
    /// Length is the only thing checked; content never fails here.
    pub fn from_payload(payload: &str) -> Result<Self, BadBoardData> {
        let bytes = payload.as_bytes();
        if bytes.len() != 64 {
            return Err(BadBoardData);
        }
        let mut cells = [[Cell::Empty; 8]; 8];
        for (i, byte) in bytes.iter().enumerate() {
            cells[i / 8][i % 8] = Cell::from_byte(*byte);
        }
        Ok(Board { cells })
    }
}
impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.row() as usize][coord.col() as usize]
    }
}
