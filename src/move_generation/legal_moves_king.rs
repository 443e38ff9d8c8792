//! King destination generation: one step in any of the eight directions.
//!
//! No castling and no safety filtering; a king may step onto an attacked
//! square. Capturing the king is the terminal condition, not checkmate.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{
    explore_offsets, DIAGONAL_DIRECTIONS, NON_DIAGONAL_DIRECTIONS,
};

pub fn generate_king_moves(board: &Board, origin: BoardLocation, side: Color) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    explore_offsets(board, origin, side, &NON_DIAGONAL_DIRECTIONS, &mut out);
    explore_offsets(board, origin, side, &DIAGONAL_DIRECTIONS, &mut out);
    out
}
