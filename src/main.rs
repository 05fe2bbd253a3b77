#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io::stdin;

use crate::protocol::Request;

mod board;
mod color;
mod coord;
mod piece;
mod protocol;
#[cfg(test)]
mod reference;
mod rules;

/// One request per invocation: read a line, answer it, exit 0.
fn main() {
    let mut input = String::new();
    stdin().read_line(&mut input).unwrap();
    let input = input.trim();
    if input.is_empty() {
        return;
    }
    match input.parse::<Request>() {
        Ok(request) => println!("{}", protocol::handle(&request)),
        Err(err) => eprintln!("Error: {err}"),
    }
}
