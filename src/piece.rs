use crate::color::Color;
use crate::piece_type::PieceType;
use std::fmt;

/// Represents a piece on the game board, i.e. a piece type with a color.
///
/// The FEN letter encoding is case-based: uppercase letters are White
/// pieces and lowercase letters are Black pieces.
///
/// # Examples
///
/// ```
/// use chess_core::{Color, Piece, PieceType};
///
/// let pc = Piece::from_fen('R').unwrap();
/// assert_eq!(PieceType::Rook, pc.piece_type);
/// assert_eq!(Color::White, pc.color);
/// assert_eq!("R", pc.to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Creates a new instance of `Piece` from its FEN letter.
    pub fn from_fen(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        PieceType::from_fen(c.to_ascii_lowercase()).map(|piece_type| Piece { piece_type, color })
    }

    /// Returns the FEN letter of this piece.
    pub fn to_fen_char(self) -> char {
        let c = self.piece_type.to_fen_char();

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns a new piece of the same type with the opposite color.
    #[must_use]
    pub fn flip(self) -> Piece {
        Piece {
            piece_type: self.piece_type,
            color: self.color.flip(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fen() {
        let ok_cases = [
            ('P', PieceType::Pawn, Color::White),
            ('N', PieceType::Knight, Color::White),
            ('B', PieceType::Bishop, Color::White),
            ('R', PieceType::Rook, Color::White),
            ('Q', PieceType::Queen, Color::White),
            ('K', PieceType::King, Color::White),
            ('p', PieceType::Pawn, Color::Black),
            ('n', PieceType::Knight, Color::Black),
            ('b', PieceType::Bishop, Color::Black),
            ('r', PieceType::Rook, Color::Black),
            ('q', PieceType::Queen, Color::Black),
            ('k', PieceType::King, Color::Black),
        ];
        let ng_cases = ['.', '1', 'x', 'X', '/', ' '];

        for case in ok_cases.iter() {
            let pc = Piece::from_fen(case.0);
            assert!(pc.is_some());
            assert_eq!(case.1, pc.unwrap().piece_type);
            assert_eq!(case.2, pc.unwrap().color);
        }

        for case in ng_cases.iter() {
            assert!(
                Piece::from_fen(*case).is_none(),
                "{case} should cause an error"
            );
        }
    }

    #[test]
    fn fen_roundtrip() {
        for c in "PNBRQKpnbrqk".chars() {
            let pc = Piece::from_fen(c).unwrap();
            assert_eq!(c, pc.to_fen_char());
            assert_eq!(c.to_string(), pc.to_string());
        }
    }

    #[test]
    fn flip() {
        let pc = Piece::from_fen('Q').unwrap();
        let flipped = pc.flip();

        assert_eq!(PieceType::Queen, flipped.piece_type);
        assert_eq!(Color::Black, flipped.color);
        assert_eq!(pc, flipped.flip());
    }
}
