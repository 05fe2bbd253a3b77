use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::color::{Color, ParseColorError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRequestError {
    Empty,
    MissingToken(&'static str),
    BadInteger(Box<str>),
    ParseColorError(ParseColorError),
}
impl From<ParseColorError> for ParseRequestError {
    fn from(value: ParseColorError) -> Self {
        ParseRequestError::ParseColorError(value)
    }
}
impl Display for ParseRequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseRequestError::Empty => write!(f, "empty request")?,
            ParseRequestError::MissingToken(name) => write!(f, "missing `{name}` token")?,
            ParseRequestError::BadInteger(token) => {
                write!(f, "found `{token}`, a decimal integer was expected instead")?;
            }
            ParseRequestError::ParseColorError(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseRequestError::ParseColorError(err) => Some(err),
            _ => None,
        }
    }
}

/// One parsed request line.
///
/// Coordinates stay plain integers here; range checking happens in the
/// handler, after the board-length check, so `Bad board data` keeps its
/// precedence over coordinate problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Validate {
        board: Box<str>,
        turn: Color,
        from: (i32, i32),
        to: (i32, i32),
    },
    Moves {
        board: Box<str>,
        turn: Color,
        at: (i32, i32),
    },
    /// Unknown command: the first token is echoed back, the rest of the
    /// line is discarded. Kept only for callers of the old interface.
    Legacy(Box<str>),
}
impl FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let command = tokens.next().ok_or(ParseRequestError::Empty)?;
        let request = match command {
            "VALIDATE" => Request::Validate {
                board: next(&mut tokens, "board")?.into(),
                turn: next(&mut tokens, "turn")?.parse::<Color>()?,
                from: (
                    integer(&mut tokens, "source row")?,
                    integer(&mut tokens, "source column")?,
                ),
                to: (
                    integer(&mut tokens, "target row")?,
                    integer(&mut tokens, "target column")?,
                ),
            },
            "MOVES" => Request::Moves {
                board: next(&mut tokens, "board")?.into(),
                turn: next(&mut tokens, "turn")?.parse::<Color>()?,
                at: (integer(&mut tokens, "row")?, integer(&mut tokens, "column")?),
            },
            _ => Request::Legacy(command.into()),
        };
        Ok(request)
    }
}
fn next<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseRequestError> {
    tokens.next().ok_or(ParseRequestError::MissingToken(name))
}
fn integer<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i32, ParseRequestError> {
    let token = next(tokens, name)?;
    token
        .parse()
        .map_err(|_| ParseRequestError::BadInteger(token.into()))
}
