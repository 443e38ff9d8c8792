//! Knight destination generation: the eight L-shaped jumps.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{explore_offsets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(
    board: &Board,
    origin: BoardLocation,
    side: Color,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    explore_offsets(board, origin, side, &KNIGHT_OFFSETS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn central_knight_has_eight_destinations() {
        let mut board = Board::new_empty();
        board.place((4, 4), Piece::new(PieceKind::Knight, Color::White));
        let moves = generate_knight_moves(&board, (4, 4), Color::White);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn starting_knight_jumps_over_its_own_pawns() {
        let board = Board::starting_position();
        let mut moves = generate_knight_moves(&board, (7, 1), Color::White);
        moves.sort_unstable();
        assert_eq!(moves, vec![(5, 0), (5, 2)]);
    }

    #[test]
    fn knight_destinations_exclude_friendly_occupants() {
        let mut board = Board::new_empty();
        board.place((4, 4), Piece::new(PieceKind::Knight, Color::Black));
        board.place((2, 5), Piece::new(PieceKind::Pawn, Color::Black));
        board.place((2, 3), Piece::new(PieceKind::Pawn, Color::White));
        let moves = generate_knight_moves(&board, (4, 4), Color::Black);
        assert!(!moves.contains(&(2, 5)));
        assert!(moves.contains(&(2, 3)));
        assert_eq!(moves.len(), 7);
    }
}
