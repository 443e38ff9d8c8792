//! Central game state and the turn/move state machine.
//!
//! `GameState` owns the board, the move counter, and both captured-piece
//! lists. The side to move is derived from `turn_count` parity alone; the
//! counter advances exactly once per fully completed move and never on the
//! king-capture terminal path.

use crate::board_location::BoardLocation;
use crate::errors::Errors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_promotion_row;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::move_generation::move_generator::generate_valid_moves;

/// Result of applying a validated move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move finished; the turn has passed to the other side.
    Completed,
    /// A pawn reached the far rank but no captured piece of its color is
    /// available to swap in. The pawn stays and the move completed.
    SwapUnavailable,
    /// A pawn reached the far rank and a swap choice is required before the
    /// turn passes. State is frozen until `complete_promotion_swap`.
    SwapPending,
    /// The move captured the opposing king. The game is over and no further
    /// state is mutated; the mover leaves the board entirely.
    Victory(Color),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn_count: u32,
    captured_white: Vec<Piece>,
    captured_black: Vec<Piece>,
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            turn_count: 0,
            captured_white: Vec::new(),
            captured_black: Vec::new(),
        }
    }

    /// Side to move, derived from the move counter: even is White.
    #[inline]
    pub fn current_turn(&self) -> Color {
        if self.turn_count % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Captured pieces of `color`, in capture order. These are the pieces
    /// the *opposing* side has taken, and the pool `color`'s pawns may swap
    /// with on promotion.
    #[inline]
    pub fn captured_for(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    fn captured_for_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        match color {
            Color::White => &mut self.captured_white,
            Color::Black => &mut self.captured_black,
        }
    }

    /// Validate a selection for the side to move and compute its legal
    /// destinations. Destinations are recomputed fresh on every call.
    pub fn select_origin(&self, origin: BoardLocation) -> Result<(Piece, Vec<BoardLocation>), Errors> {
        let turn = self.current_turn();
        let piece = match self.board.piece_at(origin) {
            Some(piece) if piece.color == turn => *piece,
            _ => return Err(Errors::IllegalOrigin(origin, turn)),
        };
        let valid_moves = generate_valid_moves(&self.board, origin, &piece);
        if valid_moves.is_empty() {
            return Err(Errors::NoLegalMoves(piece.kind));
        }
        Ok((piece, valid_moves))
    }

    /// Apply a move whose destination has already been validated against the
    /// selection's legal set.
    ///
    /// Capturing the opposing king short-circuits: the origin is cleared, the
    /// king keeps its square, the mover is not placed, and the counter does
    /// not advance. Any other capture files the victim under its own color's
    /// captured list.
    pub fn apply_move(
        &mut self,
        origin: BoardLocation,
        destination: BoardLocation,
    ) -> Result<MoveOutcome, Errors> {
        let turn = self.current_turn();
        let mover = match self.board.piece_at(origin) {
            Some(piece) if piece.color == turn => *piece,
            _ => return Err(Errors::IllegalOrigin(origin, turn)),
        };
        if let Some(occupant) = self.board.piece_at(destination) {
            if occupant.kind == PieceKind::King {
                self.board.take(origin);
                return Ok(MoveOutcome::Victory(mover.color));
            }
        }
        self.board.take(origin);
        if let Some(captured) = self.board.take(destination) {
            self.captured_for_mut(captured.color).push(captured);
        }
        self.board.place(destination, mover);
        if mover.kind == PieceKind::Pawn && is_promotion_row(destination.0) {
            if !self.captured_for(mover.color).is_empty() {
                return Ok(MoveOutcome::SwapPending);
            }
            self.turn_count += 1;
            return Ok(MoveOutcome::SwapUnavailable);
        }
        self.turn_count += 1;
        Ok(MoveOutcome::Completed)
    }

    /// Finish a pending promotion swap: element `choice` of the pawn's
    /// own-color captured list replaces the pawn on `destination`, and the
    /// pawn joins that same list. The list's length is unchanged by the
    /// swap. An out-of-range choice mutates nothing.
    pub fn complete_promotion_swap(
        &mut self,
        destination: BoardLocation,
        choice: usize,
    ) -> Result<(), Errors> {
        let pawn = match self.board.piece_at(destination) {
            Some(piece) if piece.kind == PieceKind::Pawn => *piece,
            _ => return Err(Errors::GameRuleError),
        };
        let captured = self.captured_for_mut(pawn.color);
        if choice >= captured.len() {
            return Err(Errors::InvalidSwapChoice(choice.to_string()));
        }
        let swap_in = captured.remove(choice);
        captured.push(pawn);
        self.board.take(destination);
        self.board.place(destination, swap_in);
        self.turn_count += 1;
        Ok(())
    }
}
