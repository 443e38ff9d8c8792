//! Terminal-oriented Unicode board renderer.
//!
//! Produces a boxed grid with each piece's glyph and a `rowcol` label inside
//! every cell, so raw coordinate input can be read straight off the display.
//! Purely observational; never mutates state.

use crate::game_state::board::Board;

const SEPARATOR: &str = "   |   ";
const STARTING_SEPARATOR: &str = "  |   ";
const EMPTY_VAL: &str = " ";

/// Render the board to a string for terminal output.
pub fn render_game_state(board: &Board) -> String {
    let horizontal_line = format!("  {}", "-".repeat(65));
    let spacer_row = format!(
        "{}{}   |",
        STARTING_SEPARATOR,
        [EMPTY_VAL; 8].join(SEPARATOR)
    );

    let mut out = String::new();
    out.push_str(" \n");
    out.push_str(&horizontal_line);
    out.push('\n');

    for row in 0..8i8 {
        out.push_str(&spacer_row);
        out.push('\n');

        let glyphs: Vec<&str> = (0..8i8)
            .map(|col| match board.piece_at((row, col)) {
                Some(piece) => piece.glyph(),
                None => EMPTY_VAL,
            })
            .collect();
        out.push_str(STARTING_SEPARATOR);
        out.push_str(&glyphs.join(SEPARATOR));
        out.push_str("   |\n");

        out.push_str("  ");
        for col in 0..8i8 {
            out.push_str(&format!("|{row}{col}     "));
        }
        out.push_str("|\n");

        out.push_str(&horizontal_line);
        out.push('\n');
    }

    out.push_str(" \n");
    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn starting_position_shows_both_sides_glyphs() {
        let rendered = render_game_state(&Board::starting_position());
        assert!(rendered.contains('♜'));
        assert!(rendered.contains('♖'));
        assert!(rendered.contains('♚'));
        assert!(rendered.contains('♔'));
    }

    #[test]
    fn every_cell_is_labeled_with_its_coordinates() {
        let rendered = render_game_state(&Board::new_empty());
        for row in 0..8 {
            for col in 0..8 {
                assert!(rendered.contains(&format!("|{row}{col}")));
            }
        }
    }

    #[test]
    fn rendering_does_not_mutate_the_board() {
        let board = Board::starting_position();
        let before = board.clone();
        let _ = render_game_state(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn moved_piece_renders_on_its_new_square() {
        let mut board = Board::new_empty();
        board.place((4, 4), Piece::new(PieceKind::Queen, Color::White));
        let rendered = render_game_state(&board);
        let queen_line = rendered
            .lines()
            .find(|line| line.contains('♕'))
            .expect("queen glyph should be rendered");
        let label_line = rendered
            .lines()
            .find(|line| line.contains("|44"))
            .expect("label row for rank 4");
        // Glyph row sits directly above the label row of the same rank.
        let lines: Vec<&str> = rendered.lines().collect();
        let glyph_idx = lines.iter().position(|l| *l == queen_line).unwrap();
        let label_idx = lines.iter().position(|l| *l == label_line).unwrap();
        assert_eq!(label_idx, glyph_idx + 1);
    }
}
