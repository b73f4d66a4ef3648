//! Color type representing each player side.

use std::fmt;

/// Represents each player side, White or Black.
///
/// White moves first and occupies ranks 1 and 2 in the starting position.
///
/// # Examples
///
/// ```
/// use chess_core::Color;
///
/// let c = Color::White;
/// assert_eq!(Color::Black, c.flip());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the side-to-move letter used in the FEN notation.
    pub fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
