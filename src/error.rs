//! Error types returned by FEN parsing and move application.

use std::num::ParseIntError;
use thiserror::Error;

/// The error type for FEN deserialization.
///
/// A malformed FEN string is always reported as a structured error; the
/// position is never silently replaced with a default one.
#[derive(Error, Debug)]
pub enum FenError {
    #[error("data fields are missing")]
    MissingDataFields,

    #[error("an illegal piece placement is found")]
    IllegalPiecePlacement,

    #[error("an illegal piece letter is found")]
    IllegalPieceType,

    #[error("an illegal side to move is found")]
    IllegalSideToMove,

    #[error("an illegal move number is found")]
    IllegalMoveNumber(#[from] ParseIntError),
}

/// The error type for an attempted move which cannot be made.
///
/// Distinguishes geometry/occupancy violations from the self-check guard so
/// callers can assert on the specific rejection cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid move notation")]
    InvalidNotation,

    #[error("the move is inconsistent with the position: {0}")]
    Inconsistent(&'static str),

    #[error("the king would be left exposed to capture")]
    InCheck,
}
