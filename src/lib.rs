//! Crate root module declarations for the Swap Chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! the console front end, and utility helpers) so the binary, tests, and
//! benches can import stable module paths.

pub mod board_location;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod coordinates;
    pub mod render_game_state;
}
