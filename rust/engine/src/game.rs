use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::config::EngineConfig;
use crate::errors::{GameError, Rejection};
use crate::moves::Move;
use crate::pieces::{PieceKind, PieceTag, Side};
use crate::player::Player;
use crate::rules::{self, RuleSet};

/// Where a game stands. Every status except `Active` is terminal and
/// sticky.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    LightWins,
    DarkWins,
    Forfeit,
    Stalemate,
    Resignation,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }

    /// Status reached when `side` takes the opposing King.
    pub fn win_for(side: Side) -> GameStatus {
        match side {
            Side::Light => GameStatus::LightWins,
            Side::Dark => GameStatus::DarkWins,
        }
    }
}

/// What happens to turn ownership on the move that ends the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPolicy {
    /// Turn passes to the opponent after every accepted move, including
    /// the one that ends the game.
    #[default]
    AlwaysFlip,
    /// Turn stays with the player who made the game-ending move.
    FreezeOnTerminal,
}

/// Result of a move request that passed the bounds check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    Accepted,
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted => None,
            MoveOutcome::Rejected(r) => Some(*r),
        }
    }
}

/// One occupied cell in a [`GameSnapshot`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct OccupiedCell {
    pub x: u8,
    pub y: u8,
    pub kind: PieceKind,
    pub side: Side,
}

/// Serializable view of a game for rendering collaborators.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub turn: Side,
    pub rules: RuleSet,
    pub pieces: Vec<OccupiedCell>,
    pub move_count: usize,
    #[serde(default)]
    pub last_move: Option<Move>,
}

/// The rule engine for one session: two players, the board, whose turn it
/// is, the status and the move log.
///
/// # Examples
///
/// ```
/// use gambit_engine::game::{Game, GameStatus};
/// use gambit_engine::pieces::Side;
/// use gambit_engine::player::Player;
///
/// let light = Player::human(Side::Light);
/// let dark = Player::automated(Side::Dark);
/// let mut game = Game::new(light, dark).unwrap();
///
/// // Knight from (0,1) to (2,2)
/// let outcome = game.request_move(&light, 0, 1, 2, 2).unwrap();
/// assert!(outcome.is_accepted());
/// assert_eq!(game.current_turn().side(), Side::Dark);
/// assert_eq!(game.status(), GameStatus::Active);
///
/// // Coordinates off the board are an error, not a rejection
/// assert!(game.request_move(&dark, 8, 0, 5, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Light seat first
    players: [Player; 2],
    board: Board,
    /// Index into `players`
    turn: usize,
    status: GameStatus,
    moves: Vec<Move>,
    rules: RuleSet,
    turn_policy: TurnPolicy,
}

impl Game {
    /// New game with the default configuration.
    pub fn new(player1: Player, player2: Player) -> Result<Self, GameError> {
        Self::with_config(player1, player2, &EngineConfig::default())
    }

    /// New game whose seats come from the configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GameError> {
        let (light, dark) = config.players();
        Self::with_config(light, dark, config)
    }

    pub fn with_config(
        player1: Player,
        player2: Player,
        config: &EngineConfig,
    ) -> Result<Self, GameError> {
        let mut game = Self::blank(player1, player2, config);
        game.initialize(player1, player2)?;
        Ok(game)
    }

    /// Game starting from a custom position. Light moves first.
    pub fn with_board(
        player1: Player,
        player2: Player,
        board: Board,
        config: &EngineConfig,
    ) -> Result<Self, GameError> {
        let mut game = Self::blank(player1, player2, config);
        game.seat(player1, player2)?;
        game.board = board;
        Ok(game)
    }

    fn blank(player1: Player, player2: Player, config: &EngineConfig) -> Self {
        Self {
            players: [player1, player2],
            board: Board::empty(),
            turn: 0,
            status: GameStatus::Active,
            moves: Vec::new(),
            rules: config.rules,
            turn_policy: config.turn_policy,
        }
    }

    /// Starts (or restarts) the session: fixes the seats, resets the board,
    /// gives light the move and clears the log.
    pub fn initialize(&mut self, player1: Player, player2: Player) -> Result<(), GameError> {
        self.seat(player1, player2)?;
        self.board.reset_layout();
        tracing::info!(
            light = ?self.players[0].kind(),
            dark = ?self.players[1].kind(),
            rules = ?self.rules,
            "game initialized"
        );
        Ok(())
    }

    fn seat(&mut self, player1: Player, player2: Player) -> Result<(), GameError> {
        let players = match (player1.side(), player2.side()) {
            (Side::Light, Side::Dark) => [player1, player2],
            (Side::Dark, Side::Light) => [player2, player1],
            _ => return Err(GameError::InvalidPlayers),
        };
        self.players = players;
        self.turn = 0;
        self.status = GameStatus::Active;
        self.moves.clear();
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
    pub fn current_turn(&self) -> &Player {
        &self.players[self.turn]
    }
    /// Light seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }
    pub fn rules(&self) -> RuleSet {
        self.rules
    }
    pub fn turn_policy(&self) -> TurnPolicy {
        self.turn_policy
    }

    fn seat_of(&self, player: &Player) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    /// Validates and applies one move.
    ///
    /// Off-board coordinates fail with [`GameError::OutOfBounds`]. Every
    /// other refusal comes back as [`MoveOutcome::Rejected`]; in both cases
    /// board, turn, status and log are untouched.
    pub fn request_move(
        &mut self,
        player: &Player,
        origin_x: i32,
        origin_y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> Result<MoveOutcome, GameError> {
        let origin = Coord::new(origin_x, origin_y)?;
        let destination = Coord::new(dest_x, dest_y)?;

        let moved = match self.validate(player, origin, destination) {
            Ok(moved) => moved,
            Err(rejection) => {
                tracing::debug!(
                    side = ?player.side(),
                    origin = ?(origin_x, origin_y),
                    destination = ?(dest_x, dest_y),
                    reason = %rejection,
                    "move rejected"
                );
                return Ok(MoveOutcome::Rejected(rejection));
            }
        };

        self.apply(*player, moved, origin, destination);
        Ok(MoveOutcome::Accepted)
    }

    fn validate(
        &self,
        player: &Player,
        origin: Coord,
        destination: Coord,
    ) -> Result<PieceTag, Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver);
        }
        let piece = self.tag_at(origin).ok_or(Rejection::EmptyOrigin)?;
        let seat = self.seat_of(player).ok_or(Rejection::UnknownPlayer)?;
        if seat != self.turn {
            return Err(Rejection::NotPlayersTurn {
                expected: self.current_turn().side(),
                actual: player.side(),
            });
        }
        if piece.side != player.side() {
            return Err(Rejection::NotPlayersPiece);
        }
        match self.board.piece_at(destination) {
            Some(occupant) if occupant.side() == piece.side => {
                return Err(Rejection::OwnPieceAtDestination);
            }
            // empty, or an enemy to capture
            _ => {}
        }
        if !rules::can_move(&self.board, origin, destination, self.rules) {
            return Err(Rejection::IllegalMovement { kind: piece.kind });
        }
        Ok(piece)
    }

    /// Carries out a move `validate` accepted; `moved` is the piece on `origin`.
    fn apply(&mut self, player: Player, moved: PieceTag, origin: Coord, destination: Coord) {
        let mover = player.side();
        let castling = rules::castling(&self.board, origin, destination);

        let captured = self.tag_at(destination);
        if let Some(tag) = captured {
            self.board.take(destination);
            if let Some(p) = self.board.piece_mut(tag.id) {
                p.mark_captured();
            }
        }

        if let Some(c) = castling {
            self.board.relocate(c.rook_from, c.rook_to);
            if let Some(rook) = self.board.id_at(c.rook_to) {
                if let Some(p) = self.board.piece_mut(rook) {
                    p.mark_moved();
                }
            }
        }
        self.board.relocate(origin, destination);
        if let Some(p) = self.board.piece_mut(moved.id) {
            p.mark_moved();
            if castling.is_some() {
                p.mark_castled();
            }
        }

        let record = Move {
            player,
            origin,
            destination,
            moved,
            captured,
            castling: castling.is_some(),
        };
        self.moves.push(record);

        tracing::debug!(
            side = ?mover,
            piece = ?moved.kind,
            origin = ?(origin.x(), origin.y()),
            destination = ?(destination.x(), destination.y()),
            captured = ?captured.map(|t| t.kind),
            castling = record.castling,
            ply = self.moves.len(),
            "move accepted"
        );

        if record.captured_king() {
            self.finish(GameStatus::win_for(mover));
        }

        let freeze = self.status.is_terminal() && self.turn_policy == TurnPolicy::FreezeOnTerminal;
        if !freeze {
            self.turn = 1 - self.turn;
        }
    }

    fn tag_at(&self, coord: Coord) -> Option<PieceTag> {
        let id = self.board.id_at(coord)?;
        let piece = self.board.piece(id)?;
        Some(PieceTag {
            id,
            kind: piece.kind(),
            side: piece.side(),
        })
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        tracing::info!(status = ?status, moves = self.moves.len(), "game finished");
    }

    fn end_by(&mut self, player: &Player, status: GameStatus) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        if self.seat_of(player).is_none() {
            return Err(GameError::UnknownPlayer);
        }
        tracing::debug!(side = ?player.side(), status = ?status, "game ended by player");
        self.finish(status);
        Ok(())
    }

    /// `player` concedes the game.
    pub fn resign(&mut self, player: &Player) -> Result<(), GameError> {
        self.end_by(player, GameStatus::Resignation)
    }

    /// `player` forfeits, e.g. after leaving the session or running out of time.
    pub fn forfeit(&mut self, player: &Player) -> Result<(), GameError> {
        self.end_by(player, GameStatus::Forfeit)
    }

    /// Ends the game as a stalemate, as agreed by the players or decided by
    /// an external arbiter.
    pub fn declare_stalemate(&mut self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        self.finish(GameStatus::Stalemate);
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            turn: self.current_turn().side(),
            rules: self.rules,
            pieces: self
                .board
                .occupied()
                .map(|(c, p)| OccupiedCell {
                    x: c.x(),
                    y: c.y(),
                    kind: p.kind(),
                    side: p.side(),
                })
                .collect(),
            move_count: self.moves.len(),
            last_move: self.moves.last().copied(),
        }
    }
}
