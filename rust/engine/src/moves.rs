use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::pieces::{PieceKind, PieceTag};
use crate::player::Player;

/// Record of one applied move. Built once the transition has been
/// validated and carried out, then appended to the game's move log.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Player who issued the move
    pub player: Player,
    /// Cell the piece left
    pub origin: Coord,
    /// Cell the piece arrived on
    pub destination: Coord,
    /// The piece that moved
    pub moved: PieceTag,
    /// Enemy piece taken on the destination, if any
    #[serde(default)]
    pub captured: Option<PieceTag>,
    /// King castling transition (the rook moved as well)
    #[serde(default)]
    pub castling: bool,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// True when this move took the opposing King.
    pub fn captured_king(&self) -> bool {
        self.captured.is_some_and(|p| p.kind == PieceKind::King)
    }
}
