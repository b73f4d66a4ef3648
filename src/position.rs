use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::attacks;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::moves::Move;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::square::Square;

#[derive(Clone)]
struct PieceGrid([Option<Piece>; 64]);

impl PieceGrid {
    pub fn get(&self, sq: Square) -> &Option<Piece> {
        &self.0[sq.index()]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.0[sq.index()] = pc;
    }
}

impl fmt::Debug for PieceGrid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "PieceGrid {{ ")?;

        for pc in self.0.iter() {
            write!(fmt, "{pc:?} ")?;
        }
        write!(fmt, "}}")
    }
}

/// Represents a state of the game.
///
/// A `Position` is never mutated by move application: applying a move
/// always allocates a fresh `Position`, which makes look-ahead (testing a
/// move for self-check without corrupting the real game state) safe by
/// construction.
///
/// # Examples
///
/// ```
/// use chess_core::{Move, Position};
///
/// let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
///
/// let mv: Move = "e2e4".parse().unwrap();
/// let next = pos.make_move(mv).unwrap();
///
/// assert_eq!("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1", next.to_fen());
/// ```
#[derive(Debug, Clone)]
pub struct Position {
    board: PieceGrid,
    side_to_move: Color,
    fullmove_number: u16,
}

/////////////////////////////////////////////////////////////////////////////
// Type implementation
/////////////////////////////////////////////////////////////////////////////

impl Position {
    /// Creates a new instance of `Position` with an empty board.
    pub fn new() -> Position {
        Default::default()
    }

    /// Creates a new instance of `Position` from a FEN string.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let mut pos = Position::new();
        pos.set_fen(fen_str)?;
        Ok(pos)
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    /// Returns a piece at the given square.
    pub fn piece_at(&self, sq: Square) -> &Option<Piece> {
        self.board.get(sq)
    }

    /// Returns the side to make a move next.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the fullmove number.
    ///
    /// It starts at 1 and increments after each Black move.
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Returns the position of the king with the given color.
    pub fn find_king(&self, c: Color) -> Option<Square> {
        let king = Piece {
            piece_type: PieceType::King,
            color: c,
        };

        Square::iter().find(|&sq| *self.piece_at(sq) == Some(king))
    }

    /////////////////////////////////////////////////////////////////////////
    // Check detection
    /////////////////////////////////////////////////////////////////////////

    /// Checks if the given square is attacked by any piece of the specified
    /// color.
    ///
    /// The query is parameterized by the attacking color explicitly, so it
    /// works for either side regardless of whose turn it is.
    pub fn is_attacked_by(&self, sq: Square, c: Color) -> bool {
        Square::iter().any(|from| match *self.piece_at(from) {
            Some(p) if p.color == c => attacks::move_candidates(self, from, p).contains(&sq),
            _ => false,
        })
    }

    /// Checks if the king with the given color is in check.
    ///
    /// A position without a king of that color reports `false`: there is
    /// no king to threaten.
    pub fn in_check(&self, c: Color) -> bool {
        if let Some(king_sq) = self.find_king(c) {
            self.is_attacked_by(king_sq, c.flip())
        } else {
            false
        }
    }

    /// Checks if making the given move would leave the mover's own king
    /// exposed to capture.
    ///
    /// The move is simulated on a fresh position; the current position is
    /// left untouched. Legality of the move itself is not verified here.
    pub fn is_check_after_move(&self, m: &Move) -> bool {
        self.apply_move(m).in_check(self.side_to_move)
    }

    /////////////////////////////////////////////////////////////////////////
    // Making a move
    /////////////////////////////////////////////////////////////////////////

    /// Produces the position resulting from the given move without
    /// validating it.
    ///
    /// The origin square is cleared, the moving piece (or its promotion
    /// piece) is placed at the destination, the side to move flips, and
    /// the fullmove number increments when the mover was Black. An empty
    /// origin square degrades to clearing both squares. Validation is the
    /// caller's responsibility; see [`make_move`](#method.make_move).
    #[must_use]
    pub fn apply_move(&self, m: &Move) -> Position {
        let mut next = self.clone();

        let placed = match (*self.piece_at(m.from), m.promotion) {
            (Some(p), Some(pt)) => Some(Piece {
                piece_type: pt,
                color: p.color,
            }),
            (moved, None) => moved,
            (None, Some(_)) => None,
        };

        next.board.set(m.from, None);
        next.board.set(m.to, placed);

        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.flip();

        next
    }

    /// Makes the given move with full validation, returning the resulting
    /// position.
    ///
    /// A move is accepted when it obeys piece geometry and occupancy for
    /// the side to move and does not leave the mover's own king exposed to
    /// capture. Rejections are reported as [`MoveError::Inconsistent`]
    /// with the violated precondition, or [`MoveError::InCheck`] for the
    /// self-check guard.
    pub fn make_move(&self, m: Move) -> Result<Position, MoveError> {
        let stm = self.side_to_move;

        let moved = self
            .piece_at(m.from)
            .ok_or(MoveError::Inconsistent("no piece at the origin square"))?;

        if moved.color != stm {
            return Err(MoveError::Inconsistent(
                "the piece does not belong to the side to move",
            ));
        }

        if let Some(pt) = m.promotion {
            if moved.piece_type != PieceType::Pawn {
                return Err(MoveError::Inconsistent("only a pawn can promote"));
            }
            if m.to.relative_rank(stm) != Square::NUM_RANKS - 1 {
                return Err(MoveError::Inconsistent(
                    "a pawn promotes only on the last rank",
                ));
            }
            if !pt.is_promotion_target() {
                return Err(MoveError::Inconsistent(
                    "a pawn cannot turn into that piece",
                ));
            }
        }

        if !attacks::move_candidates(self, m.from, moved).contains(&m.to) {
            return Err(MoveError::Inconsistent("the piece cannot move to there"));
        }

        let next = self.apply_move(&m);
        if next.in_check(stm) {
            return Err(MoveError::InCheck);
        }

        Ok(next)
    }

    /////////////////////////////////////////////////////////////////////////
    // Legal move enumeration
    /////////////////////////////////////////////////////////////////////////

    /// Returns all fully legal moves for the side to move.
    ///
    /// Every returned move passes [`make_move`](#method.make_move). The
    /// enumeration is deterministic: origin squares are visited in
    /// ascending square-index order and destinations in the geometry
    /// module's fixed emission order. Promotion markers are not
    /// enumerated; a pawn reaching the last rank is listed as a plain
    /// move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move)
    }

    /// Returns all fully legal moves for the specified color, as if it
    /// were that color's turn.
    pub fn legal_moves_for(&self, c: Color) -> Vec<Move> {
        let mut pos = self.clone();
        pos.side_to_move = c;

        let mut moves = Vec::new();
        for sq in Square::iter() {
            if let Some(pc) = *pos.piece_at(sq) {
                if pc.color == c {
                    for to in attacks::move_candidates(&pos, sq, pc) {
                        let mv = Move::new(sq, to);
                        if !pos.is_check_after_move(&mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        moves
    }

    /////////////////////////////////////////////////////////////////////////
    // FEN serialization / deserialization
    /////////////////////////////////////////////////////////////////////////

    /// Parses the given FEN string and updates the game state.
    ///
    /// All six fields must be present. The castling, en-passant and
    /// halfmove-clock fields are not interpreted; their content is
    /// accepted as-is and discarded.
    pub fn set_fen(&mut self, fen_str: &str) -> Result<(), FenError> {
        let mut parts = fen_str.split_whitespace();

        parts
            .next()
            .ok_or(FenError::MissingDataFields)
            .and_then(|s| self.parse_fen_board(s))?;
        parts
            .next()
            .ok_or(FenError::MissingDataFields)
            .and_then(|s| self.parse_fen_stm(s))?;

        // Castling rights, the en-passant target and the halfmove clock are
        // not tracked. The fields must be present but are not interpreted.
        parts.next().ok_or(FenError::MissingDataFields)?;
        parts.next().ok_or(FenError::MissingDataFields)?;
        parts.next().ok_or(FenError::MissingDataFields)?;

        parts
            .next()
            .ok_or(FenError::MissingDataFields)
            .and_then(|s| self.parse_fen_fullmove(s))?;

        Ok(())
    }

    /// Converts the current state into a FEN formatted string.
    ///
    /// The untracked fields are always normalized: castling rights and the
    /// en-passant target render as `-`, the halfmove clock as `0`.
    pub fn to_fen(&self) -> String {
        let board = (0..Square::NUM_RANKS)
            .rev()
            .map(|rank| {
                let mut s = String::new();
                let mut num_empty = 0;
                for file in 0..Square::NUM_FILES {
                    match *self.piece_at(Square::new(file, rank).unwrap()) {
                        Some(pc) => {
                            if num_empty > 0 {
                                s.push_str(&num_empty.to_string());
                                num_empty = 0;
                            }

                            s.push(pc.to_fen_char());
                        }
                        None => num_empty += 1,
                    }
                }

                if num_empty > 0 {
                    s.push_str(&num_empty.to_string());
                }

                s
            })
            .join("/");

        format!(
            "{} {} - - 0 {}",
            board,
            self.side_to_move.to_fen_char(),
            self.fullmove_number
        )
    }

    fn parse_fen_board(&mut self, s: &str) -> Result<(), FenError> {
        self.board = PieceGrid([None; 64]);

        for (i, row) in s.split('/').enumerate() {
            if i >= Square::NUM_RANKS as usize {
                return Err(FenError::IllegalPiecePlacement);
            }

            // FEN lists ranks from rank 8 down to rank 1.
            let rank = Square::NUM_RANKS - 1 - i as u8;
            let mut file = 0;

            for c in row.chars() {
                match c {
                    n if n.is_ascii_digit() => {
                        if let Some(n) = n.to_digit(10) {
                            for _ in 0..n {
                                if file >= Square::NUM_FILES {
                                    return Err(FenError::IllegalPiecePlacement);
                                }

                                file += 1;
                            }
                        }
                    }
                    c => match Piece::from_fen(c) {
                        Some(piece) => {
                            if file >= Square::NUM_FILES {
                                return Err(FenError::IllegalPiecePlacement);
                            }

                            let sq = Square::new(file, rank).unwrap();
                            self.board.set(sq, Some(piece));
                            file += 1;
                        }
                        None => return Err(FenError::IllegalPieceType),
                    },
                }
            }
        }

        Ok(())
    }

    fn parse_fen_stm(&mut self, s: &str) -> Result<(), FenError> {
        self.side_to_move = match s {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::IllegalSideToMove),
        };
        Ok(())
    }

    fn parse_fen_fullmove(&mut self, s: &str) -> Result<(), FenError> {
        self.fullmove_number = s.parse()?;
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Trait implementations
/////////////////////////////////////////////////////////////////////////////

impl Default for Position {
    fn default() -> Position {
        Position {
            board: PieceGrid([None; 64]),
            side_to_move: Color::White,
            fullmove_number: 1,
        }
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "+---+---+---+---+---+---+---+---+")?;

        for rank in (0..Square::NUM_RANKS).rev() {
            write!(f, "|")?;
            for file in 0..Square::NUM_FILES {
                if let Some(ref piece) = *self.piece_at(Square::new(file, rank).unwrap()) {
                    write!(f, " {piece} |")?;
                } else {
                    write!(f, "   |")?;
                }
            }

            writeln!(f, " {}", (b'1' + rank) as char)?;
            writeln!(f, "+---+---+---+---+---+---+---+---+")?;
        }

        writeln!(f, "  a   b   c   d   e   f   g   h")?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;
        write!(f, "Move number: {}", self.fullmove_number)?;

        Ok(())
    }
}
