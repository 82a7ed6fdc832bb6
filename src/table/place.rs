use crate::Seat;
use crate::cards::Card;
use std::collections::BTreeSet;

/// One table slot: at most one card and the players holding a token on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    card: Option<Card>,
    holders: BTreeSet<Seat>,
}

impl Place {
    pub fn card(&self) -> Option<Card> {
        self.card
    }
    pub fn holders(&self) -> &BTreeSet<Seat> {
        &self.holders
    }
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }
    pub(super) fn set(&mut self, card: Card) {
        debug_assert!(self.card.is_none());
        self.card = Some(card);
    }
    pub(super) fn take(&mut self) -> Option<Card> {
        self.card.take()
    }
    /// Returns false if the seat already held a token here.
    pub(super) fn hold(&mut self, seat: Seat) -> bool {
        self.holders.insert(seat)
    }
    /// Returns false if the seat held no token here.
    pub(super) fn release(&mut self, seat: Seat) -> bool {
        self.holders.remove(&seat)
    }
    pub(super) fn release_all(&mut self) -> BTreeSet<Seat> {
        std::mem::take(&mut self.holders)
    }
}
