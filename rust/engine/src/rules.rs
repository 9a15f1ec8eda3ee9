use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::pieces::{Piece, PieceKind};

/// Which movement rules the engine enforces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Directional and path-blocking rules for every kind.
    #[default]
    Standard,
    /// Legacy rules: orthogonal-only King steps, Knight jumps, castling.
    /// Pawns, Bishops, Rooks and Queens cannot move.
    Baseline,
}

/// Rook relocation that accompanies a castling King.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Castling {
    pub rook_from: Coord,
    pub rook_to: Coord,
}

/// Decides whether the piece on `origin` may travel to `destination`.
///
/// Occupancy of the destination by the mover's own side is checked by the
/// caller; here a destination occupant is always treated as an enemy to
/// capture. Zero-length moves and empty origins are illegal.
///
/// # Examples
///
/// ```
/// use gambit_engine::board::{Board, Coord};
/// use gambit_engine::rules::{can_move, RuleSet};
///
/// let board = Board::new();
/// let knight = Coord::new(0, 1).unwrap();
/// assert!(can_move(&board, knight, Coord::new(2, 2).unwrap(), RuleSet::Standard));
/// assert!(!can_move(&board, knight, Coord::new(1, 1).unwrap(), RuleSet::Standard));
/// ```
pub fn can_move(board: &Board, origin: Coord, destination: Coord, rules: RuleSet) -> bool {
    let piece = match board.piece_at(origin) {
        Some(p) => p,
        None => return false,
    };
    if origin == destination {
        return false;
    }
    let dx = destination.x() as i32 - origin.x() as i32;
    let dy = destination.y() as i32 - origin.y() as i32;
    let (ax, ay) = (dx.abs(), dy.abs());

    match (piece.kind(), rules) {
        (PieceKind::King, RuleSet::Standard) => {
            ax.max(ay) == 1 || castling(board, origin, destination).is_some()
        }
        (PieceKind::King, RuleSet::Baseline) => {
            ax + ay == 1 || castling(board, origin, destination).is_some()
        }
        (PieceKind::Knight, _) => ax * ay == 2,
        (PieceKind::Rook, RuleSet::Standard) => {
            (dx == 0 || dy == 0) && board.is_path_clear(origin, destination)
        }
        (PieceKind::Bishop, RuleSet::Standard) => ax == ay && board.is_path_clear(origin, destination),
        (PieceKind::Queen, RuleSet::Standard) => {
            (dx == 0 || dy == 0 || ax == ay) && board.is_path_clear(origin, destination)
        }
        (PieceKind::Pawn, RuleSet::Standard) => pawn_can_move(board, piece, origin, dx, dy),
        (
            PieceKind::Pawn | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen,
            RuleSet::Baseline,
        ) => false,
    }
}

fn pawn_can_move(board: &Board, pawn: &Piece, origin: Coord, dx: i32, dy: i32) -> bool {
    let forward = pawn.side().forward();
    let target = match origin.offset(dx, dy) {
        Some(c) => c,
        None => return false,
    };
    let target_occupied = board.piece_at(target).is_some();

    if dy == 0 && dx == forward {
        return !target_occupied;
    }
    if dy == 0 && dx == 2 * forward {
        let on_start_rank = origin.x() == pawn.side().pawn_rank();
        let between_empty = origin
            .offset(forward, 0)
            .is_some_and(|c| board.piece_at(c).is_none());
        return on_start_rank && !pawn.has_moved() && between_empty && !target_occupied;
    }
    if dy.abs() == 1 && dx == forward {
        return board
            .piece_at(target)
            .is_some_and(|p| p.side() != pawn.side());
    }
    false
}

/// Returns the rook relocation if moving the King on `origin` to
/// `destination` is a legal castling transition.
///
/// The King must stand unmoved on its home cell and not have castled yet;
/// it moves two files along its back rank towards an unmoved, uncaptured
/// rook of its own side in that corner, with nothing in between.
pub fn castling(board: &Board, origin: Coord, destination: Coord) -> Option<Castling> {
    let king = board.piece_at(origin)?;
    if king.kind() != PieceKind::King || king.has_castled() || king.has_moved() {
        return None;
    }
    let rank = king.side().home_rank();
    if origin.x() != rank || origin.y() != KING_FILE || destination.x() != rank {
        return None;
    }
    let (rook_file, rook_to_file) = match destination.y() {
        6 => (7, 5),
        2 => (0, 3),
        _ => return None,
    };
    let rook_from = Coord::new(rank as i32, rook_file).ok()?;
    let rook = board.piece_at(rook_from)?;
    let rook_ready = rook.kind() == PieceKind::Rook
        && rook.side() == king.side()
        && !rook.has_moved()
        && !rook.is_captured();
    if !rook_ready || !board.is_path_clear(origin, rook_from) {
        return None;
    }
    Some(Castling {
        rook_from,
        rook_to: Coord::new(rank as i32, rook_to_file).ok()?,
    })
}

const KING_FILE: u8 = 4;

/// Every destination the piece on `origin` could legally reach, including
/// the own-side occupancy check the game applies.
pub fn legal_destinations(board: &Board, origin: Coord, rules: RuleSet) -> Vec<Coord> {
    let Some(side) = board.piece_at(origin).map(|p| p.side()) else {
        return Vec::new();
    };
    Coord::all()
        .filter(|&to| board.piece_at(to).map(|p| p.side()) != Some(side))
        .filter(|&to| can_move(board, origin, to, rules))
        .collect()
}
