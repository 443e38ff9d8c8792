//! Rook destination generation: rank and file rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{explore_rays, NON_DIAGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, origin: BoardLocation, side: Color) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    explore_rays(board, origin, side, &NON_DIAGONAL_DIRECTIONS, &mut out);
    out
}
