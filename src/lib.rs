//! A library for implementing the rules of chess.
//!
//! `chess-core` provides a board representation with FEN
//! serialization, per-piece movement geometry, full move legality
//! (including the self-check guard) and check detection. It does not
//! implement castling, en passant, draw bookkeeping or any kind of
//! search or evaluation.
//!
//! # Examples
//!
//! ```
//! use chess_core::{Color, Game};
//!
//! let mut game = Game::new();
//!
//! game.make_move("e2e4").unwrap();
//! game.make_move("e7e5").unwrap();
//!
//! assert_eq!(
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 2",
//!     game.fen()
//! );
//! assert_eq!(Color::White, game.side_to_move());
//! assert!(!game.in_check());
//! assert_eq!(29, game.legal_moves().len());
//! ```
//!
//! Positions can be manipulated directly as immutable values as well.
//!
//! ```
//! use chess_core::{Color, Position};
//!
//! let pos = Position::from_fen("4r3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
//!
//! assert!(pos.in_check(Color::White));
//! assert!(!pos.in_check(Color::Black));
//! ```

pub mod attacks;
pub mod color;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod piece_type;
pub mod position;
pub mod square;

pub use self::color::Color;
pub use self::error::{FenError, MoveError};
pub use self::game::{Game, STARTING_FEN};
pub use self::moves::{Move, ParseMoveError};
pub use self::piece::Piece;
pub use self::piece_type::{PieceType, PieceTypeIter};
pub use self::position::Position;
pub use self::square::{ParseSquareError, Square, SquareIter};
