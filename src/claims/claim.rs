use crate::Seat;
use crate::cards::Card;

/// Per-player sequence number identifying one claim.
pub type Ticket = u64;

/// A player's commitment of three tokened cards.
///
/// A plain value: the cards are copied out of the table at submission, so
/// later table changes never alter it. The dealer looks the seat up in its
/// own roster rather than holding on to player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claim {
    seat: Seat,
    ticket: Ticket,
    cards: [Card; 3],
}

impl Claim {
    pub fn new(seat: Seat, ticket: Ticket, cards: [Card; 3]) -> Self {
        Self {
            seat,
            ticket,
            cards,
        }
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }
    /// Whether any of the given cards is part of this claim.
    pub fn overlaps(&self, cards: &[Card]) -> bool {
        self.cards.iter().any(|c| cards.contains(c))
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c] = self.cards;
        write!(f, "P{}#{} [{} {} {}]", self.seat, self.ticket, a, b, c)
    }
}
