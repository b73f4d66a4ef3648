use std::fmt;
use std::iter;

/// Represents a kind of piece, i.e. its movement category.
///
/// # Examples
///
/// ```
/// use chess_core::PieceType;
///
/// let pt = PieceType::from_fen('n').unwrap();
/// assert_eq!(PieceType::Knight, pt);
/// assert_eq!("n", pt.to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Returns an iterator over all piece types.
    pub fn iter() -> PieceTypeIter {
        PieceTypeIter::new()
    }

    /// Creates a new instance of `PieceType` from its lowercase FEN letter.
    pub fn from_fen(c: char) -> Option<PieceType> {
        Some(match c {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        })
    }

    /// Returns the lowercase FEN letter for this piece type.
    pub fn to_fen_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Returns true if a pawn may turn into this piece type on reaching
    /// the last rank.
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        )
    }

    /// Returns the unique number of this piece type for array indexing purpose.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// This struct is created by the [`iter`] method on [`PieceType`].
///
/// [`iter`]: ./enum.PieceType.html#method.iter
/// [`PieceType`]: enum.PieceType.html
pub struct PieceTypeIter {
    current: Option<PieceType>,
}

impl PieceTypeIter {
    fn new() -> PieceTypeIter {
        PieceTypeIter {
            current: Some(PieceType::Pawn),
        }
    }
}

impl iter::Iterator for PieceTypeIter {
    type Item = PieceType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;

        self.current = match self.current {
            Some(PieceType::Pawn) => Some(PieceType::Knight),
            Some(PieceType::Knight) => Some(PieceType::Bishop),
            Some(PieceType::Bishop) => Some(PieceType::Rook),
            Some(PieceType::Rook) => Some(PieceType::Queen),
            Some(PieceType::Queen) => Some(PieceType::King),
            Some(PieceType::King) => None,
            None => None,
        };

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fen() {
        let ok_cases = [
            ('p', PieceType::Pawn),
            ('n', PieceType::Knight),
            ('b', PieceType::Bishop),
            ('r', PieceType::Rook),
            ('q', PieceType::Queen),
            ('k', PieceType::King),
        ];
        let ng_cases = ['P', 'K', 'x', '1', ' ', '+'];

        for case in ok_cases.iter() {
            assert_eq!(Some(case.1), PieceType::from_fen(case.0));
        }

        for case in ng_cases.iter() {
            assert!(PieceType::from_fen(*case).is_none());
        }
    }

    #[test]
    fn fen_roundtrip() {
        for pt in PieceType::iter() {
            assert_eq!(Some(pt), PieceType::from_fen(pt.to_fen_char()));
        }
    }

    #[test]
    fn promotion_targets() {
        for pt in PieceType::iter() {
            let expected = pt != PieceType::Pawn && pt != PieceType::King;
            assert_eq!(expected, pt.is_promotion_target());
        }
    }

    #[test]
    fn iter_count_and_index() {
        assert_eq!(6, PieceType::iter().count());

        for (i, pt) in PieceType::iter().enumerate() {
            assert_eq!(i, pt.index());
        }
    }
}
