#![allow(dead_code)]

use gambit_engine::board::{Board, Coord};
use gambit_engine::config::EngineConfig;
use gambit_engine::game::Game;
use gambit_engine::pieces::{PieceKind, Side};
use gambit_engine::player::Player;

pub fn light() -> Player {
    Player::human(Side::Light)
}

pub fn dark() -> Player {
    Player::human(Side::Dark)
}

pub fn at(x: i32, y: i32) -> Coord {
    Coord::new(x, y).expect("coordinate on board")
}

/// Board holding exactly the listed pieces.
pub fn position(pieces: &[(i32, i32, PieceKind, Side)]) -> Board {
    let mut board = Board::empty();
    for &(x, y, kind, side) in pieces {
        board.place(at(x, y), kind, side).expect("cell free");
    }
    board
}

/// Human vs human game from a custom position, light to move.
pub fn game_with(pieces: &[(i32, i32, PieceKind, Side)], config: &EngineConfig) -> Game {
    Game::with_board(light(), dark(), position(pieces), config).expect("valid seats")
}

/// Snapshot of everything a request may mutate.
pub fn state_of(game: &Game) -> (String, Side, usize) {
    let snapshot = serde_json::to_string(&game.snapshot()).expect("serialize snapshot");
    (snapshot, game.current_turn().side(), game.moves().len())
}
