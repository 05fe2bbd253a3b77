use std::fmt::{self, Display, Formatter};

/// A square on the 8x8 board. Row 0 is the topmost rank of the payload,
/// column 0 the leftmost file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}
impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8);
        debug_assert!(col < 8);
        Coord { row, col }
    }
    pub fn new_checked(row: u8, col: u8) -> Option<Self> {
        if row >= 8 || col >= 8 {
            None
        } else {
            Some(Self::new(row, col))
        }
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }
    /// Every square in row-major order, the order `MOVES` answers in.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Coord::new(row, col)))
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)?;
        Ok(())
    }
}
