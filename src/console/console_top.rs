//! Console front end and prompt loop.
//!
//! Reads one line per pending decision, routes it through the parsing and
//! game-state layers, and writes the next prompt. Invalid input of any kind
//! re-prompts the same decision with state untouched; the loop is an explicit
//! state machine, never recursion, so hostile input cannot grow the stack.

use std::io::{self, BufRead, Write};

use crate::board_location::BoardLocation;
use crate::errors::Errors;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::game_state::{GameState, MoveOutcome};
use crate::utils::coordinates::{parse_coordinates, parse_swap_choice};
use crate::utils::render_game_state::render_game_state;

/// Run a full game over stdin/stdout until a king is captured or input ends.
pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = GameSession::new();

    session.write_opening(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let game_over = session.handle_line(&line, &mut stdout)?;
        stdout.flush()?;
        if game_over {
            break;
        }
    }

    Ok(())
}

/// Which decision the next input line answers.
enum Phase {
    AwaitingSelection,
    AwaitingDestination {
        origin: BoardLocation,
        piece: Piece,
        valid_moves: Vec<BoardLocation>,
    },
    AwaitingSwapChoice {
        destination: BoardLocation,
    },
    Terminal {
        winner: Color,
    },
}

pub struct GameSession {
    game_state: GameState,
    phase: Phase,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            phase: Phase::AwaitingSelection,
        }
    }

    #[cfg(test)]
    fn with_state(game_state: GameState) -> Self {
        Self {
            game_state,
            phase: Phase::AwaitingSelection,
        }
    }

    /// The winning side once the game has gone terminal.
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::Terminal { winner } => Some(winner),
            _ => None,
        }
    }

    /// Board plus the first selection prompt.
    pub fn write_opening(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render_game_state(&self.game_state.board))?;
        self.write_selection_prompt(out)
    }

    /// Consume one input line for whatever decision is pending and write the
    /// resulting messages and next prompt. Returns `true` once the game is
    /// over.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let input = line.trim();
        let phase = std::mem::replace(&mut self.phase, Phase::AwaitingSelection);
        match phase {
            Phase::Terminal { winner } => {
                self.phase = Phase::Terminal { winner };
                Ok(true)
            }
            Phase::AwaitingSelection => self.handle_selection(input, out),
            Phase::AwaitingDestination {
                origin,
                piece,
                valid_moves,
            } => self.handle_destination(origin, piece, valid_moves, input, out),
            Phase::AwaitingSwapChoice { destination } => {
                self.handle_swap_choice(destination, input, out)
            }
        }
    }

    fn handle_selection(&mut self, input: &str, out: &mut impl Write) -> io::Result<bool> {
        let turn = self.game_state.current_turn();
        let origin = match parse_coordinates(input) {
            Ok(origin) => origin,
            Err(_) => {
                writeln!(out, "Invalid input. Should be a number on the board.")?;
                self.write_selection_prompt(out)?;
                return Ok(false);
            }
        };
        match self.game_state.select_origin(origin) {
            Ok((piece, valid_moves)) => {
                writeln!(out, "Where would you like to move this {}?: ", piece.kind)?;
                self.phase = Phase::AwaitingDestination {
                    origin,
                    piece,
                    valid_moves,
                };
            }
            Err(Errors::NoLegalMoves(kind)) => {
                writeln!(out, "That {kind} can't move anywhere.")?;
                self.write_selection_prompt(out)?;
            }
            Err(_) => {
                writeln!(out, "Invalid input. Choose a square with a {turn} piece.")?;
                self.write_selection_prompt(out)?;
            }
        }
        Ok(false)
    }

    fn handle_destination(
        &mut self,
        origin: BoardLocation,
        piece: Piece,
        valid_moves: Vec<BoardLocation>,
        input: &str,
        out: &mut impl Write,
    ) -> io::Result<bool> {
        let destination = match parse_coordinates(input) {
            Ok(destination) => destination,
            Err(_) => {
                writeln!(out, "Invalid input. Should be a valid number on the board.")?;
                writeln!(out, "Where would you like to move this {}?: ", piece.kind)?;
                self.phase = Phase::AwaitingDestination {
                    origin,
                    piece,
                    valid_moves,
                };
                return Ok(false);
            }
        };
        if !valid_moves.contains(&destination) {
            writeln!(
                out,
                "That {} can't move to {}{}.",
                piece.kind, destination.0, destination.1
            )?;
            writeln!(out, "Where would you like to move this {}?: ", piece.kind)?;
            self.phase = Phase::AwaitingDestination {
                origin,
                piece,
                valid_moves,
            };
            return Ok(false);
        }
        let outcome = match self.game_state.apply_move(origin, destination) {
            Ok(outcome) => outcome,
            Err(_) => {
                // Selection no longer matches the board; restart the decision.
                self.write_board_and_selection_prompt(out)?;
                return Ok(false);
            }
        };
        match outcome {
            MoveOutcome::Victory(winner) => {
                writeln!(out, "Game Over, {winner} wins!")?;
                self.phase = Phase::Terminal { winner };
                return Ok(true);
            }
            MoveOutcome::SwapPending => {
                self.write_swap_menu(destination, out)?;
                self.phase = Phase::AwaitingSwapChoice { destination };
            }
            MoveOutcome::SwapUnavailable => {
                writeln!(out, "No captured pieces to swap with your pawn.")?;
                self.write_board_and_selection_prompt(out)?;
            }
            MoveOutcome::Completed => {
                self.write_board_and_selection_prompt(out)?;
            }
        }
        Ok(false)
    }

    fn handle_swap_choice(
        &mut self,
        destination: BoardLocation,
        input: &str,
        out: &mut impl Write,
    ) -> io::Result<bool> {
        let Some(pawn_color) = self.game_state.board.piece_at(destination).map(|p| p.color) else {
            // The pending pawn vanished; impossible through this interface.
            self.write_board_and_selection_prompt(out)?;
            return Ok(false);
        };
        let available = self.game_state.captured_for(pawn_color).len();
        let applied = parse_swap_choice(input, available)
            .and_then(|choice| self.game_state.complete_promotion_swap(destination, choice));
        match applied {
            Ok(()) => {
                self.write_board_and_selection_prompt(out)?;
            }
            Err(_) => {
                writeln!(out, "Invalid choice. Choose a number listed.")?;
                self.write_swap_menu(destination, out)?;
                self.phase = Phase::AwaitingSwapChoice { destination };
            }
        }
        Ok(false)
    }

    fn write_selection_prompt(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Choose a {} piece to move (square number): ",
            self.game_state.current_turn()
        )
    }

    fn write_board_and_selection_prompt(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.phase = Phase::AwaitingSelection;
        write!(out, "{}", render_game_state(&self.game_state.board))?;
        self.write_selection_prompt(out)
    }

    fn write_swap_menu(&self, destination: BoardLocation, out: &mut impl Write) -> io::Result<()> {
        let Some(pawn_color) = self.game_state.board.piece_at(destination).map(|p| p.color) else {
            return Ok(());
        };
        writeln!(out, "Available Pieces to Swap:")?;
        for (index, piece) in self.game_state.captured_for(pawn_color).iter().enumerate() {
            writeln!(out, "{}: {}", index, piece.kind)?;
        }
        writeln!(out, "Which piece would you like? (choose number): ")
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
