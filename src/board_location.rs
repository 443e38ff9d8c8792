use crate::errors::Errors;

/// A `(row, col)` pair. Row 0 is Black's back rank, row 7 is White's; both
/// components are in `0..=7` for any location obtained from parsing or from
/// `move_board_location`.
pub type BoardLocation = (i8, i8);

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, Errors>` - The new location if within bounds,
///   otherwise `Errors::OutOfBounds`.
pub fn move_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, Errors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(Errors::OutOfBounds)
    } else {
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_on_the_board() {
        assert_eq!(move_board_location(&(3, 3), -1, 2), Ok((2, 5)));
        assert_eq!(move_board_location(&(0, 0), 7, 7), Ok((7, 7)));
    }

    #[test]
    fn steps_off_any_edge_are_rejected() {
        assert_eq!(move_board_location(&(0, 4), -1, 0), Err(Errors::OutOfBounds));
        assert_eq!(move_board_location(&(7, 4), 1, 0), Err(Errors::OutOfBounds));
        assert_eq!(move_board_location(&(4, 0), 0, -1), Err(Errors::OutOfBounds));
        assert_eq!(move_board_location(&(4, 7), 0, 1), Err(Errors::OutOfBounds));
    }
}
