//! Canonical rule constants for the starting layout and pawn behavior.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank piece order, left to right, shared by both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: i8 = 0;
pub const BLACK_PAWN_ROW: i8 = 1;
pub const WHITE_PAWN_ROW: i8 = 6;
pub const WHITE_BACK_ROW: i8 = 7;

/// Row delta for a pawn's forward step. White advances toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Starting row from which a pawn may take its double step.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => WHITE_PAWN_ROW,
        Color::Black => BLACK_PAWN_ROW,
    }
}

/// A pawn landing outside rows `1..=6` has reached the far rank and is
/// eligible for the promotion swap.
#[inline]
pub const fn is_promotion_row(row: i8) -> bool {
    row < 1 || row > 6
}
