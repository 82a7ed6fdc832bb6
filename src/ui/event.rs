use crate::Seat;
use crate::Slot;
use crate::cards::Card;
use serde::Serialize;

/// Everything observable about a running game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A card was dealt into a slot.
    CardPlaced { slot: Slot, card: Card },
    /// A slot was emptied.
    CardRemoved { slot: Slot },
    /// A player put a token on a slot.
    TokenPlaced { seat: Seat, slot: Slot },
    /// A player's token left a slot, by its own hand or the dealer's.
    TokenRemoved { seat: Seat, slot: Slot },
    /// Time left in the round, and whether it is in the warning zone.
    Countdown { millis: u64, warn: bool },
    /// A player's score changed.
    Score { seat: Seat, score: usize },
    /// A player is frozen for this much longer; zero releases it.
    Freeze { seat: Seat, millis: u64 },
    /// The game is over.
    Winners { seats: Vec<Seat> },
}

impl Event {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::CardPlaced { slot, card } => write!(f, "slot {:>2} <- {}", slot, card),
            Event::CardRemoved { slot } => write!(f, "slot {:>2} cleared", slot),
            Event::TokenPlaced { seat, slot } => write!(f, "P{} token on slot {}", seat, slot),
            Event::TokenRemoved { seat, slot } => write!(f, "P{} token off slot {}", seat, slot),
            Event::Countdown { millis, .. } => write!(f, "{}s left", millis / 1000),
            Event::Score { seat, score } => write!(f, "P{} scores {}", seat, score),
            Event::Freeze { seat, millis } => write!(f, "P{} frozen {}ms", seat, millis),
            Event::Winners { seats } => write!(
                f,
                "winners: {}",
                seats
                    .iter()
                    .map(|s| format!("P{}", s))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
