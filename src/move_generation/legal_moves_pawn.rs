//! Pawn destination generation.
//!
//! Three independent rules are unioned: single forward step onto an empty
//! square, double forward step from the starting rank onto an empty square,
//! and diagonal-forward captures. The double step checks only the landing
//! square; the intermediate square may be occupied. No en passant.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::Color;

pub fn generate_pawn_moves(board: &Board, origin: BoardLocation, side: Color) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    let forward = pawn_direction(side);

    if let Ok(one_step) = move_board_location(&origin, forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);
        }
    }

    if origin.0 == pawn_start_row(side) {
        if let Ok(two_step) = move_board_location(&origin, forward * 2, 0) {
            if board.is_empty(two_step) {
                out.push(two_step);
            }
        }
    }

    for col_delta in [-1, 1] {
        if let Ok(target) = move_board_location(&origin, forward, col_delta) {
            if let Some(occupant) = board.piece_at(target) {
                if occupant.color != side {
                    out.push(target);
                }
            }
        }
    }

    out
}
