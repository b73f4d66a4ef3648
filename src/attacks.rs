//! Piece movement geometry.
//!
//! This module answers the purely geometric half of move legality: given a
//! piece standing on a square of some position, which destination squares
//! does it reach? The answer accounts for occupancy (sliding pieces stop at
//! blockers, pawns push only onto empty squares, own-color squares are
//! never offered) but is deliberately blind to king safety — the self-check
//! guard is layered on top by [`Position`].
//!
//! Candidate squares are emitted in a fixed order, so callers iterating
//! them observe deterministic output.

use crate::color::Color;
use crate::moves::Move;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::position::Position;
use crate::square::Square;

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Returns all pseudo-legal destination squares for the given piece
/// standing on `sq` in `pos`.
///
/// The returned squares obey piece geometry and occupancy: sliding pieces
/// stop at the first blocker and include it only when it is an enemy
/// piece, pawns push forward onto empty squares (two from their home rank)
/// and capture diagonally onto enemy pieces, and no square holding a piece
/// of the mover's own color is ever included. Whether a destination leaves
/// the mover's king exposed is not considered here.
pub fn move_candidates(pos: &Position, sq: Square, p: Piece) -> Vec<Square> {
    match p.piece_type {
        PieceType::Pawn => pawn_candidates(pos, sq, p),
        PieceType::Knight => step_candidates(pos, sq, p, &KNIGHT_STEPS),
        PieceType::Bishop => ray_candidates(pos, sq, p, &BISHOP_RAYS),
        PieceType::Rook => ray_candidates(pos, sq, p, &ROOK_RAYS),
        PieceType::Queen => {
            let mut candidates = ray_candidates(pos, sq, p, &ROOK_RAYS);
            candidates.extend(ray_candidates(pos, sq, p, &BISHOP_RAYS));
            candidates
        }
        PieceType::King => step_candidates(pos, sq, p, &KING_STEPS),
    }
}

/// Checks whether the move obeys piece geometry and occupancy for the side
/// to move, ignoring king safety.
///
/// The origin must hold a piece belonging to the side to move and the
/// destination must be among that piece's candidates.
pub fn is_pseudo_legal(pos: &Position, m: &Move) -> bool {
    match *pos.piece_at(m.from) {
        Some(p) if p.color == pos.side_to_move() => move_candidates(pos, m.from, p).contains(&m.to),
        _ => false,
    }
}

fn step_candidates(pos: &Position, sq: Square, p: Piece, steps: &[(i8, i8)]) -> Vec<Square> {
    let mut candidates = Vec::new();

    for &(df, dr) in steps {
        if let Some(to) = sq.shift(df, dr) {
            match *pos.piece_at(to) {
                Some(other) if other.color == p.color => {}
                _ => candidates.push(to),
            }
        }
    }

    candidates
}

fn ray_candidates(pos: &Position, sq: Square, p: Piece, rays: &[(i8, i8)]) -> Vec<Square> {
    let mut candidates = Vec::new();

    for &(df, dr) in rays {
        let mut cur = sq;

        while let Some(to) = cur.shift(df, dr) {
            match *pos.piece_at(to) {
                None => {
                    candidates.push(to);
                    cur = to;
                }
                Some(other) => {
                    if other.color != p.color {
                        candidates.push(to);
                    }
                    break;
                }
            }
        }
    }

    candidates
}

fn pawn_candidates(pos: &Position, sq: Square, p: Piece) -> Vec<Square> {
    let mut candidates = Vec::new();

    let dr = if p.color == Color::White { 1 } else { -1 };

    // Pushes require empty squares; a double push additionally requires the
    // pawn to stand on its home rank.
    if let Some(one) = sq.shift(0, dr) {
        if pos.piece_at(one).is_none() {
            candidates.push(one);

            if sq.relative_rank(p.color) == 1 {
                if let Some(two) = one.shift(0, dr) {
                    if pos.piece_at(two).is_none() {
                        candidates.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures require an enemy piece on the target square.
    for df in [-1, 1] {
        if let Some(to) = sq.shift(df, dr) {
            if let Some(other) = *pos.piece_at(to) {
                if other.color != p.color {
                    candidates.push(to);
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::consts::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).expect("failed to parse FEN string")
    }

    fn candidates(fen: &str, sq: Square) -> Vec<String> {
        let pos = pos(fen);
        let p = pos.piece_at(sq).expect("no piece at the given square");
        move_candidates(&pos, sq, p)
            .into_iter()
            .map(|sq| sq.to_string())
            .collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn knight() {
        // A knight in the center reaches all eight L-squares.
        let c = candidates("8/8/8/8/4N3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(8, c.len());
        assert_eq!(
            vec!["c3", "c5", "d2", "d6", "f2", "f6", "g3", "g5"],
            sorted(c)
        );

        // A cornered knight reaches only two squares.
        let c = candidates("8/8/8/8/8/8/8/N7 w - - 0 1", SQ_A1);
        assert_eq!(vec!["b3", "c2"], sorted(c));

        // Own pieces block the destination, enemy pieces are captured.
        let c = candidates("8/8/8/8/4N3/2P3p1/3q4/8 w - - 0 1", SQ_E4);
        assert_eq!(vec!["c5", "d2", "d6", "f2", "f6", "g3", "g5"], sorted(c));
    }

    #[test]
    fn king() {
        let c = candidates("8/8/8/8/4K3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(8, c.len());

        let c = candidates("8/8/8/8/8/8/8/K7 w - - 0 1", SQ_A1);
        assert_eq!(vec!["a2", "b1", "b2"], sorted(c));
    }

    #[test]
    fn rook() {
        // An empty board gives the full cross.
        let c = candidates("8/8/8/8/4R3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(14, c.len());

        // Rays stop at the first blocker; an enemy blocker is included,
        // an own blocker is not.
        let c = candidates("8/8/4p3/8/2P1R3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(
            vec!["d4", "e1", "e2", "e3", "e5", "e6", "f4", "g4", "h4"],
            sorted(c)
        );
    }

    #[test]
    fn bishop() {
        let c = candidates("8/8/8/8/4B3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(13, c.len());

        let c = candidates("8/8/2p5/8/4B3/3P4/8/8 w - - 0 1", SQ_E4);
        assert_eq!(
            vec!["c6", "d5", "f3", "f5", "g2", "g6", "h1", "h7"],
            sorted(c)
        );
    }

    #[test]
    fn queen() {
        let c = candidates("8/8/8/8/4Q3/8/8/8 w - - 0 1", SQ_E4);
        assert_eq!(27, c.len());
    }

    #[test]
    fn pawn_pushes() {
        // A pawn on its home rank may push one or two squares.
        let c = candidates(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            SQ_E2,
        );
        assert_eq!(vec!["e3", "e4"], sorted(c));

        // Off the home rank only a single push remains.
        let c = candidates("8/8/8/8/8/4P3/8/8 w - - 0 1", SQ_E3);
        assert_eq!(vec!["e4"], sorted(c));

        // A black pawn pushes down the board.
        let c = candidates("8/4p3/8/8/8/8/8/8 b - - 0 1", SQ_E7);
        assert_eq!(vec!["e5", "e6"], sorted(c));
    }

    #[test]
    fn pawn_blocked() {
        // A blocked pawn cannot push at all, not even diagonally onto
        // empty squares.
        let c = candidates("8/8/8/8/4p3/4P3/8/8 w - - 0 1", SQ_E3);
        assert!(c.is_empty());

        // A blocker on the double-push square still allows the single push.
        let c = candidates("8/8/8/8/4p3/8/4P3/8 w - - 0 1", SQ_E2);
        assert_eq!(vec!["e3"], sorted(c));
    }

    #[test]
    fn pawn_captures() {
        // Diagonal squares are offered only when an enemy piece stands there.
        let c = candidates("8/8/8/8/3p1q2/4P3/8/8 w - - 0 1", SQ_E3);
        assert_eq!(vec!["d4", "e4", "f4"], sorted(c));

        // Own pieces are never captured.
        let c = candidates("8/8/8/8/3P1q2/4P3/8/8 w - - 0 1", SQ_E3);
        assert_eq!(vec!["e4", "f4"], sorted(c));
    }

    #[test]
    fn pseudo_legal() {
        let pos = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

        // A regular opening move is pseudo-legal.
        assert!(is_pseudo_legal(&pos, &Move::new(SQ_E2, SQ_E4)));
        assert!(is_pseudo_legal(&pos, &Move::new(SQ_G1, SQ_F3)));

        // The origin must hold a piece of the side to move.
        assert!(!is_pseudo_legal(&pos, &Move::new(SQ_E4, SQ_E5)));
        assert!(!is_pseudo_legal(&pos, &Move::new(SQ_E7, SQ_E5)));

        // Geometry violations are rejected.
        assert!(!is_pseudo_legal(&pos, &Move::new(SQ_E2, SQ_E5)));
        assert!(!is_pseudo_legal(&pos, &Move::new(SQ_A1, SQ_A3)));
    }

    #[test]
    fn candidates_never_include_own_pieces() {
        let pos = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

        for sq in Square::iter() {
            if let Some(p) = *pos.piece_at(sq) {
                for to in move_candidates(&pos, sq, p) {
                    if let Some(other) = *pos.piece_at(to) {
                        assert_ne!(p.color, other.color, "{sq} -> {to}");
                    }
                }
            }
        }
    }

    #[test]
    fn color_parameterized() {
        // The same square yields different pawn candidates per color.
        let pos = pos("8/8/8/8/8/8/8/8 w - - 0 1");
        let white = Piece {
            piece_type: PieceType::Pawn,
            color: Color::White,
        };
        let black = white.flip();

        let from_white: Vec<_> = move_candidates(&pos, SQ_E4, white)
            .iter()
            .map(|s| s.to_string())
            .collect();
        let from_black: Vec<_> = move_candidates(&pos, SQ_E4, black)
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(vec!["e5"], from_white);
        assert_eq!(vec!["e3"], from_black);
    }
}
