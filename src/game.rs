use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::moves::Move;
use crate::position::Position;
use crate::square::Square;

/// The FEN string of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Represents a game session driven by textual move tokens.
///
/// `Game` owns a single [`Position`] and replaces it wholesale on every
/// accepted move. A rejected move leaves the session completely
/// unchanged, so callers may probe moves freely.
///
/// # Examples
///
/// ```
/// use chess_core::Game;
///
/// let mut game = Game::new();
/// game.make_move("e2e4").unwrap();
///
/// assert_eq!(
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1",
///     game.fen()
/// );
/// assert!(game.make_move("e2e4").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Game {
        Game {
            position: Position::from_fen(STARTING_FEN)
                .expect("failed to parse the starting position"),
        }
    }

    /// Creates a new game from the given FEN string.
    pub fn from_fen(fen_str: &str) -> Result<Game, FenError> {
        Ok(Game {
            position: Position::from_fen(fen_str)?,
        })
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the FEN string of the current position.
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Attempts to make a move given by its token form, e.g. `"e2e4"` or
    /// `"e7e8q"`.
    ///
    /// On success the game advances to the resulting position. On failure
    /// the game state is left untouched and the rejection reason is
    /// returned: [`MoveError::InvalidNotation`] for an unparseable token,
    /// otherwise whatever [`Position::make_move`] reported.
    pub fn make_move(&mut self, token: &str) -> Result<(), MoveError> {
        let mv = Move::from_fen(token).ok_or(MoveError::InvalidNotation)?;

        match self.position.make_move(mv) {
            Ok(next) => {
                self.position = next;
                Ok(())
            }
            Err(e) => {
                log::debug!("rejected move {token}: {e}");
                Err(e)
            }
        }
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves()
    }

    /// Checks if the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move())
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Returns the FEN letter of the piece at the given coordinates, or
    /// `'.'` when the square is empty or off the board.
    pub fn piece_char_at(&self, file: u8, rank: u8) -> char {
        match Square::new(file, rank) {
            Some(sq) => match *self.position.piece_at(sq) {
                Some(pc) => pc.to_fen_char(),
                None => '.',
            },
            None => '.',
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::piece_type::PieceType;
    use crate::square::consts::*;

    #[test]
    fn new_game() {
        let game = Game::new();

        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            game.fen()
        );
        assert_eq!(Color::White, game.side_to_move());
        assert!(!game.in_check());
        assert_eq!(20, game.legal_moves().len());
    }

    #[test]
    fn make_move_ok() {
        let mut game = Game::new();

        game.make_move("e2e4").unwrap();

        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1",
            game.fen()
        );
        assert_eq!(Color::Black, game.side_to_move());
        assert_eq!(1, game.position().fullmove_number());
    }

    #[test]
    fn rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.make_move("e2e4").unwrap();
        let fen_before = game.fen();

        // The pawn already left e2; replaying the move must fail.
        assert!(matches!(
            game.make_move("e2e4"),
            Err(MoveError::Inconsistent(_))
        ));
        assert_eq!(fen_before, game.fen());
        assert_eq!(Color::Black, game.side_to_move());
    }

    #[test]
    fn invalid_notation() {
        let mut game = Game::new();
        let ng_cases = ["", "e2", "e2e9", "O-O", "e2xe4", "hello"];

        for (i, case) in ng_cases.iter().enumerate() {
            assert_eq!(
                Err(MoveError::InvalidNotation),
                game.make_move(case),
                "failed at #{i}"
            );
        }
        assert_eq!(STARTING_FEN.split(' ').next(), game.fen().split(' ').next());
    }

    #[test]
    fn turn_alternation_and_move_number() {
        let mut game = Game::new();

        game.make_move("e2e4").unwrap();
        assert_eq!(Color::Black, game.side_to_move());
        assert_eq!(1, game.position().fullmove_number());

        game.make_move("e7e5").unwrap();
        assert_eq!(Color::White, game.side_to_move());
        assert_eq!(2, game.position().fullmove_number());

        game.make_move("g1f3").unwrap();
        assert_eq!(Color::Black, game.side_to_move());
        assert_eq!(2, game.position().fullmove_number());
    }

    #[test]
    fn out_of_turn_move_rejected() {
        let mut game = Game::new();

        assert!(matches!(
            game.make_move("e7e5"),
            Err(MoveError::Inconsistent(_))
        ));
    }

    #[test]
    fn from_fen() {
        let game = Game::from_fen("4r3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(game.in_check());

        assert!(Game::from_fen("not a fen string").is_err());
    }

    #[test]
    fn promotion_via_token() {
        let mut game = Game::from_fen("8/4P3/8/8/8/8/4K3/8 w - - 0 1").unwrap();
        game.make_move("e7e8q").unwrap();

        assert_eq!(
            Some(Piece {
                piece_type: PieceType::Queen,
                color: Color::White,
            }),
            *game.position().piece_at(SQ_E8)
        );
    }

    #[test]
    fn legal_moves_soundness() {
        // Every move the game enumerates must be accepted by the game.
        let game = Game::new();

        for mv in game.legal_moves() {
            let mut probe = game.clone();
            assert!(probe.make_move(&mv.to_string()).is_ok(), "{mv} was rejected");
        }
    }

    #[test]
    fn non_legal_moves_rejected() {
        // A move absent from the enumeration must be rejected.
        let game = Game::new();
        let legal: Vec<String> = game.legal_moves().iter().map(|m| m.to_string()).collect();

        for token in ["e1e2", "a1a3", "e2d3", "b8c6", "h2h5"] {
            assert!(!legal.contains(&token.to_string()));

            let mut probe = game.clone();
            assert!(probe.make_move(token).is_err(), "{token} was accepted");
        }
    }

    #[test]
    fn piece_char_at() {
        let game = Game::new();

        assert_eq!('R', game.piece_char_at(0, 0));
        assert_eq!('K', game.piece_char_at(4, 0));
        assert_eq!('p', game.piece_char_at(4, 6));
        assert_eq!('k', game.piece_char_at(4, 7));
        assert_eq!('.', game.piece_char_at(4, 3));
        assert_eq!('.', game.piece_char_at(8, 8));
    }

    #[test]
    fn scholars_mate_check() {
        let mut game = Game::new();

        for mv in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6"] {
            game.make_move(mv).unwrap();
        }
        game.make_move("h5f7").unwrap();

        // Black is in check from the queen on f7.
        assert!(game.in_check());
        assert_eq!(Color::Black, game.side_to_move());
    }
}
