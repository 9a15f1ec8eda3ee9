use gambit_engine::board::Coord;
use gambit_engine::config::EngineConfig;
use gambit_engine::game::{Game, GameStatus, TurnPolicy};
use gambit_engine::pieces::Side;
use gambit_engine::player::Player;
use gambit_engine::rules::{legal_destinations, RuleSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

mod helpers;
use helpers::{dark, light, state_of};

fn pick_legal(game: &Game, rng: &mut ChaCha20Rng) -> Option<(Coord, Coord)> {
    let side = game.current_turn().side();
    let candidates: Vec<(Coord, Coord)> = game
        .board()
        .occupied()
        .filter(|(_, p)| p.side() == side)
        .flat_map(|(c, _)| {
            legal_destinations(game.board(), c, game.rules())
                .into_iter()
                .map(move |d| (c, d))
        })
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

fn play(seed: u64, config: &EngineConfig) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut game = Game::with_config(light(), dark(), config).unwrap();
    let stranger = Player::automated(Side::Dark);

    for _ in 0..600 {
        let player = match rng.random_range(0..5) {
            0 => stranger,
            1 | 2 => light(),
            _ => dark(),
        };
        let (ox, oy, dx, dy) = match pick_legal(&game, &mut rng) {
            Some((o, d)) if rng.random_bool(0.6) => {
                (o.x() as i32, o.y() as i32, d.x() as i32, d.y() as i32)
            }
            _ => (
                rng.random_range(-2..10),
                rng.random_range(-2..10),
                rng.random_range(-2..10),
                rng.random_range(-2..10),
            ),
        };

        let before = state_of(&game);
        let was_over = game.is_game_over();
        let turn_before = game.current_turn().side();
        match game.request_move(&player, ox, oy, dx, dy) {
            Ok(outcome) if outcome.is_accepted() => {
                assert!(!was_over);
                assert_eq!(turn_before, player.side());
                assert_eq!(game.moves().len(), before.2 + 1);
                let record = game.last_move().unwrap();
                assert_eq!(record.player, player);
                assert_eq!((record.destination.x() as i32, record.destination.y() as i32), (dx, dy));
                let flipped = game.current_turn().side() != turn_before;
                let frozen = game.is_game_over() && config.turn_policy == TurnPolicy::FreezeOnTerminal;
                assert_eq!(flipped, !frozen);
            }
            Ok(_) | Err(_) => assert_eq!(state_of(&game), before),
        }

        let board = game.board();
        let taken = board.captured(Side::Light).count() + board.captured(Side::Dark).count();
        assert_eq!(board.piece_count() + taken, 32);
        if game.status() == GameStatus::Active {
            let kings = board
                .occupied()
                .filter(|(_, p)| p.kind() == gambit_engine::pieces::PieceKind::King)
                .count();
            assert_eq!(kings, 2);
        }
    }
}

#[test]
fn random_requests_preserve_invariants_standard() {
    for seed in 0..8 {
        play(seed, &EngineConfig::default());
    }
}

#[test]
fn random_requests_preserve_invariants_baseline() {
    let config = EngineConfig {
        rules: RuleSet::Baseline,
        turn_policy: TurnPolicy::FreezeOnTerminal,
        ..EngineConfig::default()
    };
    for seed in 100..104 {
        play(seed, &config);
    }
}
