use crate::piece_type::PieceType;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represents a move of a piece from one square to another, optionally
/// promoting a pawn.
///
/// # Move token grammar
///
/// A move token is the origin square followed by the destination square in
/// algebraic notation, e.g. `e2e4`. A promotion appends the lowercase
/// letter of the promotion piece, one of `n`, `b`, `r` or `q`, e.g.
/// `e7e8q`. Nothing else is accepted: no capture markers, no check
/// suffixes, no castling tokens.
///
/// # Examples
///
/// ```
/// use chess_core::Move;
/// use chess_core::square::consts::*;
///
/// let mv = Move::from_fen("e2e4").unwrap();
/// assert_eq!(SQ_E2, mv.from);
/// assert_eq!(SQ_E4, mv.to);
/// assert_eq!(None, mv.promotion);
/// assert_eq!("e2e4", mv.to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a new instance of `Move` without a promotion.
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a new instance of `Move` from its token form.
    ///
    /// Returns `None` when the token does not follow the grammar described
    /// on [`Move`], including promotion letters naming a piece a pawn can
    /// never turn into (`p`, `k`).
    pub fn from_fen(s: &str) -> Option<Move> {
        if !s.is_ascii() || (s.len() != 4 && s.len() != 5) {
            return None;
        }

        let from = Square::from_fen(&s[0..2])?;
        let to = Square::from_fen(&s[2..4])?;

        let promotion = if s.len() == 5 {
            let pt = PieceType::from_fen(s.as_bytes()[4] as char)?;
            if !pt.is_promotion_target() {
                return None;
            }
            Some(pt)
        } else {
            None
        };

        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.from, self.to)?;

        if let Some(pt) = self.promotion {
            write!(f, "{pt}")?;
        }

        Ok(())
    }
}

/// Error type for parsing a move from its token form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move notation")
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a move from its token form.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_core::{Move, PieceType};
    ///
    /// let mv: Move = "e7e8q".parse().unwrap();
    /// assert_eq!(Some(PieceType::Queen), mv.promotion);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_fen(s).ok_or(ParseMoveError)
    }
}
