use std::fmt::{self, Display, Formatter};

use crate::rules::{Destination, MoveError};

/// A rejection as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reject {
    BadBoardData,
    BadCoordinates,
    Move(MoveError),
}
impl From<MoveError> for Reject {
    fn from(value: MoveError) -> Self {
        Reject::Move(value)
    }
}
impl Display for Reject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Reject::BadBoardData => write!(f, "Bad board data")?,
            Reject::BadCoordinates => write!(f, "Bad coordinates")?,
            Reject::Move(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}

/// One response line, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Valid,
    Invalid(Reject),
    Moves(Vec<Destination>),
    Echo(Box<str>),
}
impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Response::Valid => write!(f, "VALID")?,
            Response::Invalid(reject) => write!(f, "INVALID {reject}")?,
            Response::Moves(moves) => {
                write!(f, "MOVES")?;
                for movement in moves {
                    write!(f, " {} {}", movement.coord, u8::from(movement.capture))?;
                }
            }
            Response::Echo(token) => write!(f, "VALID {token}")?,
        }
        Ok(())
    }
}
