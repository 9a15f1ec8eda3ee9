use gambit_engine::config::EngineConfig;
use gambit_engine::errors::{GameError, Rejection};
use gambit_engine::game::{Game, GameStatus, TurnPolicy};
use gambit_engine::pieces::{PieceKind, Side};

mod helpers;
use helpers::{dark, game_with, light, state_of};

fn king_hunt(policy: TurnPolicy) -> Game {
    let config = EngineConfig {
        turn_policy: policy,
        ..EngineConfig::default()
    };
    game_with(
        &[
            (0, 4, PieceKind::King, Side::Light),
            (7, 0, PieceKind::Rook, Side::Light),
            (7, 4, PieceKind::King, Side::Dark),
            (6, 0, PieceKind::Pawn, Side::Dark),
        ],
        &config,
    )
}

#[test]
fn capturing_the_king_ends_the_game() {
    let mut game = king_hunt(TurnPolicy::AlwaysFlip);
    assert!(game.request_move(&light(), 7, 0, 7, 4).unwrap().is_accepted());

    assert_eq!(game.status(), GameStatus::LightWins);
    assert!(game.is_game_over());
    let record = game.last_move().unwrap();
    assert!(record.captured_king());
    assert_eq!(game.board().captured(Side::Dark).count(), 1);
}

#[test]
fn turn_flips_after_game_ending_move_by_default() {
    let mut game = king_hunt(TurnPolicy::AlwaysFlip);
    game.request_move(&light(), 7, 0, 7, 4).unwrap();
    assert_eq!(game.current_turn().side(), Side::Dark);
}

#[test]
fn turn_freezes_after_game_ending_move_when_configured() {
    let mut game = king_hunt(TurnPolicy::FreezeOnTerminal);
    game.request_move(&light(), 7, 0, 7, 4).unwrap();
    assert_eq!(game.status(), GameStatus::LightWins);
    assert_eq!(game.current_turn().side(), Side::Light);
}

#[test]
fn freeze_policy_still_flips_on_ordinary_moves() {
    let mut game = king_hunt(TurnPolicy::FreezeOnTerminal);
    game.request_move(&light(), 0, 4, 1, 4).unwrap();
    assert_eq!(game.current_turn().side(), Side::Dark);
}

#[test]
fn no_move_is_applied_after_the_game_ends() {
    let mut game = king_hunt(TurnPolicy::AlwaysFlip);
    game.request_move(&light(), 7, 0, 7, 4).unwrap();
    let before = state_of(&game);

    let outcome = game.request_move(&dark(), 6, 0, 5, 0).unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::GameOver));
    let outcome = game.request_move(&light(), 0, 4, 1, 4).unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::GameOver));

    assert_eq!(state_of(&game), before);
    assert_eq!(game.status(), GameStatus::LightWins);
}

#[test]
fn dark_wins_by_taking_the_light_king() {
    let mut game = game_with(
        &[
            (0, 4, PieceKind::King, Side::Light),
            (1, 0, PieceKind::Pawn, Side::Light),
            (7, 4, PieceKind::King, Side::Dark),
            (2, 5, PieceKind::Knight, Side::Dark),
        ],
        &EngineConfig::default(),
    );
    assert!(game.request_move(&light(), 1, 0, 2, 0).unwrap().is_accepted());
    assert!(game.request_move(&dark(), 2, 5, 0, 4).unwrap().is_accepted());
    assert_eq!(game.status(), GameStatus::DarkWins);
}

#[test]
fn resignation_is_terminal_and_sticky() {
    let mut game = Game::new(light(), dark()).unwrap();
    game.resign(&dark()).unwrap();
    assert_eq!(game.status(), GameStatus::Resignation);
    assert!(game.is_game_over());

    assert_eq!(
        game.forfeit(&light()),
        Err(GameError::GameOver {
            status: GameStatus::Resignation
        })
    );
    assert!(game.declare_stalemate().is_err());
    let outcome = game.request_move(&light(), 1, 0, 2, 0).unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::GameOver));
    assert_eq!(game.status(), GameStatus::Resignation);
}

#[test]
fn forfeit_and_stalemate_end_an_active_game() {
    let mut game = Game::new(light(), dark()).unwrap();
    game.forfeit(&light()).unwrap();
    assert_eq!(game.status(), GameStatus::Forfeit);

    let mut game = Game::new(light(), dark()).unwrap();
    game.declare_stalemate().unwrap();
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.resign(&dark()).is_err());
}

#[test]
fn only_seated_players_may_resign() {
    let mut game = Game::new(light(), dark()).unwrap();
    let stranger = gambit_engine::player::Player::automated(Side::Dark);
    assert_eq!(game.resign(&stranger), Err(GameError::UnknownPlayer));
    assert_eq!(game.status(), GameStatus::Active);
}
