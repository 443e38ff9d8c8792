//! Bishop destination generation: diagonal rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{explore_rays, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(
    board: &Board,
    origin: BoardLocation,
    side: Color,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    explore_rays(board, origin, side, &DIAGONAL_DIRECTIONS, &mut out);
    out
}
