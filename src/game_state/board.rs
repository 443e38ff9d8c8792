//! The 8x8 grid of owned squares.
//!
//! Cells own their pieces directly; `take`/`place` move pieces by value so a
//! piece is never referenced from two containers at once.

use crate::board_location::BoardLocation;
use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: back ranks on rows 0 (Black) and 7
    /// (White), pawn ranks on rows 1 and 6.
    pub fn starting_position() -> Self {
        let mut board = Self::new_empty();
        for (col, &kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as i8;
            board.place((BLACK_BACK_ROW, col), Piece::new(kind, Color::Black));
            board.place((WHITE_BACK_ROW, col), Piece::new(kind, Color::White));
            board.place((BLACK_PAWN_ROW, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.place((WHITE_PAWN_ROW, col), Piece::new(PieceKind::Pawn, Color::White));
        }
        board
    }

    /// View the occupant of a square, if any. `x` must be a validated
    /// in-bounds location.
    #[inline]
    pub fn piece_at(&self, x: BoardLocation) -> Option<&Piece> {
        self.squares[x.0 as usize][x.1 as usize].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, x: BoardLocation) -> bool {
        self.piece_at(x).is_none()
    }

    /// Place a piece, taking ownership. Any previous occupant is returned so
    /// the caller cannot silently drop a captured piece.
    #[inline]
    pub fn place(&mut self, x: BoardLocation, piece: Piece) -> Option<Piece> {
        self.squares[x.0 as usize][x.1 as usize].replace(piece)
    }

    /// Remove and return the occupant of a square, leaving it empty.
    #[inline]
    pub fn take(&mut self, x: BoardLocation) -> Option<Piece> {
        self.squares[x.0 as usize][x.1 as usize].take()
    }
}
