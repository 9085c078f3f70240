use std::sync::{Arc, Mutex};

use pokercards_engine::cards::Card;
use pokercards_engine::deck::{Deck, Position};
use pokercards_engine::evaluator::evaluate_hand;
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Captured event: level, message and recorded fields.
#[derive(Debug, Clone)]
struct LogEntry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
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

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

#[test]
fn evaluation_logs_cards_and_category_at_debug() {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        let cards = Card::parse_list("2H 2D 2C 5S 5H").unwrap();
        evaluate_hand(&cards).unwrap();
    });

    let entries = layer.entries.lock().unwrap().clone();
    let evaluated = entries
        .iter()
        .find(|e| e.message == "hand evaluated")
        .expect("evaluation result is logged");
    assert_eq!(evaluated.level, Level::DEBUG);
    assert!(evaluated
        .fields
        .iter()
        .any(|(k, v)| k == "category" && v == "full house"));

    let input = entries
        .iter()
        .find(|e| e.message == "evaluating hand")
        .expect("input cards are logged");
    assert!(input
        .fields
        .iter()
        .any(|(k, v)| k == "cards" && v == "2H,2D,2C,5S,5H"));
}

#[test]
fn deck_logs_every_card_movement_at_trace() {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut deck = Deck::new();
        deck.shuffle_with_seed(1);
        let dealt = deck.deal_one().unwrap();
        deck.discard().unwrap();
        deck.deal(2).unwrap();
        deck.return_cards(&[dealt], Position::Top).unwrap();
        deck.return_all(Position::Bottom);
    });

    let entries = layer.entries.lock().unwrap().clone();
    let count = |message: &str| entries.iter().filter(|e| e.message == message).count();
    assert!(entries.iter().all(|e| e.level == Level::TRACE));
    assert_eq!(count("deck shuffled"), 1);
    assert_eq!(count("dealt card"), 1);
    assert_eq!(count("discarded card"), 1);
    assert_eq!(count("dealt cards"), 1);
    // one explicit return, then the dealt and discarded piles
    assert_eq!(count("returned cards"), 3);

    let single = entries
        .iter()
        .find(|e| e.message == "dealt card")
        .expect("single deal is logged");
    assert!(single.fields.iter().any(|(k, _)| k == "card"));
}
