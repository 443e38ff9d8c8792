//! Destination generation dispatch.
//!
//! Fans out to the per-piece generators on the piece's kind tag. Produces
//! pseudo-legal destinations only: a move may leave the mover's own king
//! exposed, since capturing the king is the win condition here.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// All legal destination squares for `piece` standing at `origin`.
pub fn generate_valid_moves(board: &Board, origin: BoardLocation, piece: &Piece) -> Vec<BoardLocation> {
    let side = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, origin, side),
        PieceKind::Knight => generate_knight_moves(board, origin, side),
        PieceKind::Bishop => generate_bishop_moves(board, origin, side),
        PieceKind::Rook => generate_rook_moves(board, origin, side),
        PieceKind::Queen => generate_queen_moves(board, origin, side),
        PieceKind::King => generate_king_moves(board, origin, side),
    }
}
