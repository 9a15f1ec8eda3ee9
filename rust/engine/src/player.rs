use serde::{Deserialize, Serialize};

use crate::pieces::Side;

/// Who chooses the moves for a seat. The engine only validates what is
/// requested; move selection lives outside the crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Moves come from a person
    #[default]
    Human,
    /// Moves come from an automated strategy
    Automated,
}

/// A seat in the game: a side plus who is driving it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    side: Side,
    kind: PlayerKind,
}

impl Player {
    pub fn new(side: Side, kind: PlayerKind) -> Self {
        Self { side, kind }
    }

    pub fn human(side: Side) -> Self {
        Self::new(side, PlayerKind::Human)
    }

    pub fn automated(side: Side) -> Self {
        Self::new(side, PlayerKind::Automated)
    }

    pub fn side(&self) -> Side {
        self.side
    }
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}
