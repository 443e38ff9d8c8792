//! Traversal primitives shared by the per-piece generators.
//!
//! Two exploration styles cover every piece: ray walking for sliders and
//! single-step offset checks for jumpers. Both emit in-bounds destinations
//! that are empty or hold an enemy piece; neither performs check-safety
//! filtering.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

/// Rank and file direction vectors.
pub const NON_DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal direction vectors.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight L-shaped knight offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

/// Walk each direction from `origin` one step at a time.
///
/// Empty squares are destinations and walking continues past them. The first
/// occupied square stops the ray; it is a destination only when held by the
/// opposing side.
pub fn explore_rays(
    board: &Board,
    origin: BoardLocation,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<BoardLocation>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = origin;
        while let Ok(next) = move_board_location(&cursor, d_row, d_col) {
            match board.piece_at(next) {
                Some(occupant) if occupant.color != side => {
                    out.push(next);
                    break;
                }
                Some(_) => break,
                None => {
                    out.push(next);
                    cursor = next;
                }
            }
        }
    }
}

/// Check each offset from `origin` as a single-step destination, independent
/// of intervening squares.
pub fn explore_offsets(
    board: &Board,
    origin: BoardLocation,
    side: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<BoardLocation>,
) {
    for &(d_row, d_col) in offsets {
        let Ok(target) = move_board_location(&origin, d_row, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color != side => out.push(target),
            Some(_) => {}
            None => out.push(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn empty_board_with(pieces: &[(BoardLocation, PieceKind, Color)]) -> Board {
        let mut board = Board::new_empty();
        for &(loc, kind, color) in pieces {
            board.place(loc, Piece::new(kind, color));
        }
        board
    }

    #[test]
    fn rays_stop_at_the_first_occupied_square() {
        let board = empty_board_with(&[((3, 3), PieceKind::Pawn, Color::Black)]);
        let mut out = Vec::new();
        explore_rays(&board, (7, 3), Color::White, &[(-1, 0)], &mut out);
        // Squares (6,3)..(3,3) inclusive; the enemy blocker is a capture stop.
        assert_eq!(out, vec![(6, 3), (5, 3), (4, 3), (3, 3)]);
    }

    #[test]
    fn rays_exclude_friendly_blockers() {
        let board = empty_board_with(&[((3, 3), PieceKind::Pawn, Color::White)]);
        let mut out = Vec::new();
        explore_rays(&board, (7, 3), Color::White, &[(-1, 0)], &mut out);
        assert_eq!(out, vec![(6, 3), (5, 3), (4, 3)]);
    }

    #[test]
    fn rays_never_jump_over_a_blocker() {
        let board = empty_board_with(&[((5, 3), PieceKind::Queen, Color::Black)]);
        let mut out = Vec::new();
        explore_rays(&board, (7, 3), Color::White, &[(-1, 0)], &mut out);
        assert!(out.contains(&(5, 3)));
        assert!(!out.contains(&(4, 3)));
        assert!(!out.contains(&(3, 3)));
    }

    #[test]
    fn offsets_ignore_intervening_squares() {
        // Ring of friendly pawns around the origin must not block L-jumps.
        let ring: Vec<(BoardLocation, PieceKind, Color)> = DIAGONAL_DIRECTIONS
            .iter()
            .chain(NON_DIAGONAL_DIRECTIONS.iter())
            .map(|&(a, b)| ((4 + a, 4 + b), PieceKind::Pawn, Color::White))
            .collect();
        let board = empty_board_with(&ring);
        let mut out = Vec::new();
        explore_offsets(&board, (4, 4), Color::White, &KNIGHT_OFFSETS, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn offsets_off_the_board_are_skipped() {
        let board = Board::new_empty();
        let mut out = Vec::new();
        explore_offsets(&board, (0, 0), Color::White, &KNIGHT_OFFSETS, &mut out);
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn knight_offsets_are_the_eight_distinct_l_moves() {
        let mut unique = KNIGHT_OFFSETS.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 8);
        for (a, b) in KNIGHT_OFFSETS {
            assert_eq!(a.abs() + b.abs(), 3);
            assert_ne!(a.abs(), 0);
            assert_ne!(b.abs(), 0);
        }
    }
}
