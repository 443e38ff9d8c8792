//! Queen destination generation: rank, file, and diagonal rays.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_shared::{
    explore_rays, DIAGONAL_DIRECTIONS, NON_DIAGONAL_DIRECTIONS,
};

pub fn generate_queen_moves(
    board: &Board,
    origin: BoardLocation,
    side: Color,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    explore_rays(board, origin, side, &NON_DIAGONAL_DIRECTIONS, &mut out);
    explore_rays(board, origin, side, &DIAGONAL_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
    use crate::move_generation::legal_moves_rook::generate_rook_moves;

    #[test]
    fn central_queen_on_empty_board_sees_twentyseven_squares() {
        let mut board = Board::new_empty();
        board.place((4, 4), Piece::new(PieceKind::Queen, Color::White));
        let moves = generate_queen_moves(&board, (4, 4), Color::White);
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn queen_is_the_union_of_rook_and_bishop() {
        let mut board = Board::starting_position();
        board.take((6, 3)).expect("d-file white pawn");
        board.take((6, 4)).expect("e-file white pawn");
        let origin = (7, 3);
        let mut expected = generate_rook_moves(&board, origin, Color::White);
        expected.extend(generate_bishop_moves(&board, origin, Color::White));
        expected.sort_unstable();
        let mut moves = generate_queen_moves(&board, origin, Color::White);
        moves.sort_unstable();
        assert_eq!(moves, expected);
    }
}
