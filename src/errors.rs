//! Errors used throughout the engine.
//!
//! One crate-wide enum keeps propagation and matching simple: library code
//! returns `Result<..., Errors>` and the console front end maps each variant
//! to a user-facing message and a re-prompt of the same pending decision.
//! Every input-driven variant is recoverable; none of them ends the game.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceKind};

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// A location offset stepped outside the 8x8 board.
    OutOfBounds,
    /// Raw coordinate text that is not two digits in `0..=7`.
    ///
    /// Payload: the offending input.
    MalformedCoordinate(String),
    /// Selected square is empty or holds a piece of the wrong color.
    ///
    /// Payload: (selected location, side whose turn it is).
    IllegalOrigin(BoardLocation, Color),
    /// The selected piece has no legal destination at all.
    ///
    /// Payload: the kind of the stuck piece, for the user-facing message.
    NoLegalMoves(PieceKind),
    /// Chosen destination is not in the precomputed legal set.
    ///
    /// Payload: (kind of the selected piece, rejected destination).
    IllegalDestination(PieceKind, BoardLocation),
    /// Promotion-swap index that is non-numeric or out of range.
    ///
    /// Payload: the offending input.
    InvalidSwapChoice(String),
    /// A state-machine operation was invoked on a square it does not apply
    /// to (for example completing a swap on a square without a pawn). Not
    /// reachable through the console flow.
    GameRuleError,
}
