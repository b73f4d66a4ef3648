use crate::color::Color;
use std::fmt;
use std::iter;
use std::str::FromStr;

const ASCII_1: u8 = b'1';
const ASCII_LOWER_A: u8 = b'a';

/// Represents a position of each cell on the 8×8 chess board.
///
/// Files a–h map to 0–7 and ranks 1–8 map to 0–7, so `a1` is (0, 0) and
/// `h8` is (7, 7). Off-board coordinates are unrepresentable: every
/// constructor returns `Option` and refuses out-of-range values.
///
/// # Examples
///
/// ```
/// use chess_core::Square;
///
/// let sq = Square::new(4, 3).unwrap();
/// assert_eq!("e4", sq.to_string());
/// ```
///
/// `Square` can be created by parsing algebraic notation as well.
///
/// ```
/// use chess_core::Square;
///
/// let sq = Square::from_fen("e4").unwrap();
/// assert_eq!(4, sq.file());
/// assert_eq!(3, sq.rank());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    inner: u8,
}

impl Square {
    /// The number of files on the board.
    pub const NUM_FILES: u8 = 8;

    /// The number of ranks on the board.
    pub const NUM_RANKS: u8 = 8;

    /// The total number of squares on the board.
    pub const NUM_SQUARES: usize = 64;

    /// Creates a new instance of `Square`.
    ///
    /// `file` and `rank` can each take a value from 0 to 7; anything else
    /// yields `None`.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file >= Self::NUM_FILES || rank >= Self::NUM_RANKS {
            return None;
        }

        Some(Square {
            inner: rank * Self::NUM_FILES + file,
        })
    }

    /// Creates a new instance of `Square` from algebraic notation as used
    /// in FEN and move tokens, e.g. `"e4"`.
    pub fn from_fen(s: &str) -> Option<Square> {
        let bytes: &[u8] = s.as_bytes();

        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0];
        if file < ASCII_LOWER_A || file >= ASCII_LOWER_A + Self::NUM_FILES {
            return None;
        }

        let rank = bytes[1];
        if rank < ASCII_1 || rank >= ASCII_1 + Self::NUM_RANKS {
            return None;
        }

        Square::new(file - ASCII_LOWER_A, rank - ASCII_1)
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: u8) -> Option<Square> {
        if index as usize >= Self::NUM_SQUARES {
            return None;
        }

        Some(Square { inner: index })
    }

    /// Returns an iterator of all squares on the board, in ascending index
    /// order (`a1`, `b1`, ..., `h8`).
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the file (column) of the square, 0-indexed from file a.
    pub fn file(self) -> u8 {
        self.inner % Self::NUM_FILES
    }

    /// Returns the rank (row) of the square, 0-indexed from rank 1.
    pub fn rank(self) -> u8 {
        self.inner / Self::NUM_FILES
    }

    /// Returns a new `Square` instance by moving the file and the rank
    /// values, or `None` if the result would leave the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_core::square::consts::*;
    ///
    /// let sq = SQ_B2;
    /// let shifted = sq.shift(2, 3).unwrap();
    ///
    /// assert_eq!(3, shifted.file());
    /// assert_eq!(4, shifted.rank());
    /// ```
    #[must_use]
    pub fn shift(self, df: i8, dr: i8) -> Option<Square> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;

        if !(0..Self::NUM_FILES as i8).contains(&f) || !(0..Self::NUM_RANKS as i8).contains(&r) {
            return None;
        }

        Square::new(f as u8, r as u8)
    }

    /// Returns the rank as seen from the given color's side of the board.
    ///
    /// For White the rank is returned as-is (0 = rank 1, the back rank).
    /// For Black the rank is mirrored (0 = rank 8). A pawn promotes when
    /// its destination's relative rank is 7.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_core::Color;
    /// use chess_core::square::consts::*;
    ///
    /// let sq = SQ_E2;
    ///
    /// assert_eq!(1, sq.relative_rank(Color::White));
    /// assert_eq!(6, sq.relative_rank(Color::Black));
    /// ```
    pub fn relative_rank(self, c: Color) -> u8 {
        if c == Color::White {
            self.rank()
        } else {
            Self::NUM_RANKS - 1 - self.rank()
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }

    /// Returns both file and rank as a tuple.
    #[inline(always)]
    pub fn coordinates(self) -> (u8, u8) {
        (self.file(), self.rank())
    }

    /// Returns the file as its algebraic-notation letter, 'a'–'h'.
    pub fn file_char(self) -> char {
        (self.file() + ASCII_LOWER_A) as char
    }

    /// Returns the rank as its algebraic-notation digit, '1'–'8'.
    pub fn rank_char(self) -> char {
        (self.rank() + ASCII_1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Error type for parsing a square from algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square notation")
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square from algebraic notation (e.g., "e4", "a8").
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_core::Square;
    ///
    /// let sq: Square = "g6".parse().unwrap();
    /// assert_eq!(sq.file(), 6);
    /// assert_eq!(sq.rank(), 5);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_fen(s).ok_or(ParseSquareError)
    }
}

/// Square constants, `SQ_A1` through `SQ_H8`.
pub mod consts {
    use super::Square;

    macro_rules! make_square {
        {0, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: 0 };
            make_square!{1, $($ts)*}
        };
        {$n:expr, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: $n };
            make_square!{($n + 1), $($ts)*}
        };
        {$n:expr, $t:ident} => {
            pub const $t: Square = Square { inner: $n };
        };
    }

    make_square! {0, SQ_A1 SQ_B1 SQ_C1 SQ_D1 SQ_E1 SQ_F1 SQ_G1 SQ_H1
    SQ_A2 SQ_B2 SQ_C2 SQ_D2 SQ_E2 SQ_F2 SQ_G2 SQ_H2
    SQ_A3 SQ_B3 SQ_C3 SQ_D3 SQ_E3 SQ_F3 SQ_G3 SQ_H3
    SQ_A4 SQ_B4 SQ_C4 SQ_D4 SQ_E4 SQ_F4 SQ_G4 SQ_H4
    SQ_A5 SQ_B5 SQ_C5 SQ_D5 SQ_E5 SQ_F5 SQ_G5 SQ_H5
    SQ_A6 SQ_B6 SQ_C6 SQ_D6 SQ_E6 SQ_F6 SQ_G6 SQ_H6
    SQ_A7 SQ_B7 SQ_C7 SQ_D7 SQ_E7 SQ_F7 SQ_G7 SQ_H7
    SQ_A8 SQ_B8 SQ_C8 SQ_D8 SQ_E8 SQ_F8 SQ_G8 SQ_H8}
}

/// This struct is created by the [`iter`] method on [`Square`].
///
/// [`iter`]: ./struct.Square.html#method.iter
/// [`Square`]: struct.Square.html
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        if cur as usize >= Square::NUM_SQUARES {
            return None;
        }

        self.current += 1;

        Some(Square { inner: cur })
    }
}
