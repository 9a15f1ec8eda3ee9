use thiserror::Error;

use crate::game::GameStatus;
use crate::pieces::{PieceKind, Side};

/// Faults that abort a single request without touching game state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("Cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },
    #[error("A game needs exactly one light and one dark player")]
    InvalidPlayers,
    #[error("Player is not seated in this game")]
    UnknownPlayer,
    #[error("Game is already over ({status:?})")]
    GameOver { status: GameStatus },
}

/// Why a move request was turned down. Rejections are ordinary results,
/// the game is left exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Game is already over")]
    GameOver,
    #[error("No piece on the origin cell")]
    EmptyOrigin,
    #[error("Player is not seated in this game")]
    UnknownPlayer,
    #[error("It's not {actual:?}'s turn (expected {expected:?})")]
    NotPlayersTurn { expected: Side, actual: Side },
    #[error("Piece on the origin cell belongs to the opponent")]
    NotPlayersPiece,
    #[error("Destination holds a piece of the mover's own side")]
    OwnPieceAtDestination,
    #[error("{kind:?} cannot move that way")]
    IllegalMovement { kind: PieceKind },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
