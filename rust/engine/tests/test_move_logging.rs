use std::sync::{Arc, Mutex};

use gambit_engine::config::EngineConfig;
use gambit_engine::game::Game;
use gambit_engine::pieces::{PieceKind, Side};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

mod helpers;
use helpers::{dark, game_with, light};

#[derive(Debug, Clone)]
struct LogEntry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

impl LogEntry {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

fn capture(f: impl FnOnce()) -> Vec<LogEntry> {
    let layer = CaptureLayer::default();
    let entries = Arc::clone(&layer.entries);
    let subscriber = Registry::default().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = entries.lock().unwrap().clone();
    out
}

#[test]
fn accepted_and_rejected_moves_are_logged() {
    let entries = capture(|| {
        let mut game = Game::new(light(), dark()).unwrap();
        game.request_move(&light(), 1, 4, 3, 4).unwrap();
        game.request_move(&light(), 1, 3, 3, 3).unwrap();
    });

    let init = entries.iter().find(|e| e.message == "game initialized").expect("init event");
    assert_eq!(init.level, Level::INFO);

    let accepted: Vec<_> = entries.iter().filter(|e| e.message == "move accepted").collect();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].level, Level::DEBUG);
    assert_eq!(accepted[0].field("piece"), Some("Pawn"));
    assert_eq!(accepted[0].field("ply"), Some("1"));

    let rejected = entries.iter().find(|e| e.message == "move rejected").expect("reject event");
    assert!(rejected.field("reason").unwrap().contains("turn"));
}

#[test]
fn king_capture_logs_game_finished() {
    let entries = capture(|| {
        let mut game = game_with(
            &[
                (0, 4, PieceKind::King, Side::Light),
                (7, 0, PieceKind::Rook, Side::Light),
                (7, 4, PieceKind::King, Side::Dark),
            ],
            &EngineConfig::default(),
        );
        game.request_move(&light(), 7, 0, 7, 4).unwrap();
    });

    let finished = entries.iter().find(|e| e.message == "game finished").expect("finish event");
    assert_eq!(finished.level, Level::INFO);
    assert_eq!(finished.field("status"), Some("LightWins"));
}
