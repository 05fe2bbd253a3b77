use crate::{board::Board, coord::Coord, rules};

mod input;
mod output;

pub use input::{ParseRequestError, Request};
pub use output::{Reject, Response};

/// Answer one request. Pure: the caller owns all I/O.
///
/// The two commands disagree on purpose about malformed inputs: VALIDATE
/// names the problem, MOVES answers an empty move list. Existing callers
/// rely on both shapes.
pub fn handle(request: &Request) -> Response {
    match request {
        Request::Validate {
            board,
            turn,
            from,
            to,
        } => {
            let Ok(board) = Board::from_payload(board) else {
                return Response::Invalid(Reject::BadBoardData);
            };
            let Some((from, to)) = square(*from).zip(square(*to)) else {
                return Response::Invalid(Reject::BadCoordinates);
            };
            match rules::validate(&board, *turn, from, to) {
                Ok(()) => Response::Valid,
                Err(err) => Response::Invalid(err.into()),
            }
        }
        Request::Moves { board, turn, at } => {
            let Ok(board) = Board::from_payload(board) else {
                return Response::Moves(Vec::new());
            };
            let Some(at) = square(*at) else {
                return Response::Moves(Vec::new());
            };
            Response::Moves(rules::destinations(&board, *turn, at))
        }
        Request::Legacy(token) => Response::Echo(token.clone()),
    }
}
fn square((row, col): (i32, i32)) -> Option<Coord> {
    Coord::new_checked(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
}
