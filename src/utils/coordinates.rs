//! Raw-input parsing for square coordinates and swap choices.
//!
//! A square is typed as its label on the rendered board: exactly two ASCII
//! digits, row then column, each in `0..=7`. Everything else is rejected and
//! re-prompted by the console layer.

use crate::board_location::BoardLocation;
use crate::errors::Errors;

/// Convert raw user text (for example: "64") to a validated `(row, col)`.
pub fn parse_coordinates(input: &str) -> Result<BoardLocation, Errors> {
    let bytes = input.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::MalformedCoordinate(input.to_owned()));
    }
    for &byte in bytes {
        if !(b'0'..=b'7').contains(&byte) {
            return Err(Errors::MalformedCoordinate(input.to_owned()));
        }
    }
    Ok(((bytes[0] - b'0') as i8, (bytes[1] - b'0') as i8))
}

/// Convert raw user text to a promotion-swap index into a listing of
/// `available` entries. Digits only; no sign or whitespace.
pub fn parse_swap_choice(input: &str, available: usize) -> Result<usize, Errors> {
    if input.is_empty() || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Errors::InvalidSwapChoice(input.to_owned()));
    }
    let choice: usize = input
        .parse()
        .map_err(|_| Errors::InvalidSwapChoice(input.to_owned()))?;
    if choice >= available {
        return Err(Errors::InvalidSwapChoice(input.to_owned()));
    }
    Ok(choice)
}
