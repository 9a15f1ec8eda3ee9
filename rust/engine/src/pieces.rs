use serde::{Deserialize, Serialize};

/// One of the two opposing sides in a game session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Moves first, back rank on x = 0
    Light,
    /// Back rank on x = 7
    Dark,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Rank index of this side's back rank.
    pub fn home_rank(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    /// Rank index pawns of this side start on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Side::Light => 1,
            Side::Dark => 6,
        }
    }

    /// Direction of pawn advance along x.
    pub fn forward(self) -> i32 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }
}

/// The closed set of piece kinds. Movement legality is decided by an
/// exhaustive match over this enum in [`crate::rules`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Kinds on the back rank, indexed by file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A piece and its bookkeeping flags. Pieces live in the board's arena
/// for the whole reset generation; capture only flips `captured`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    captured: bool,
    moved: bool,
    castled: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self {
            kind,
            side,
            captured: false,
            moved: false,
            castled: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }
    pub fn side(&self) -> Side {
        self.side
    }
    pub fn is_captured(&self) -> bool {
        self.captured
    }
    /// True once the piece has left its starting cell.
    pub fn has_moved(&self) -> bool {
        self.moved
    }
    /// King only: the one-time castling move has been played.
    pub fn has_castled(&self) -> bool {
        self.castled
    }

    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
    }
    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }
    pub(crate) fn mark_castled(&mut self) {
        self.castled = true;
    }
}

/// Arena handle for a piece, valid only within the board generation that
/// issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub(crate) generation: u32,
    pub(crate) index: u8,
}

/// Identity plus the immutable attributes of a piece, as stored in move
/// records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PieceTag {
    pub id: PieceId,
    pub kind: PieceKind,
    pub side: Side,
}
