use super::place::Place;
use crate::Seat;
use crate::Slot;
use crate::cards::Card;
use std::collections::BTreeSet;

/// Slot-to-card mapping, its card-to-slot reverse index, and per-slot token
/// holders, plus the ready flag gating player mutations.
///
/// Slots are an arena of [`Place`] records addressed by index; the reverse
/// index is a plain array keyed by card. Nothing here locks: the table is
/// shared as `Arc<Mutex<Table>>` and every caller checks [`Table::is_ready`]
/// under the same guard as the mutation it performs. Only the dealer flips
/// the flag, and it does so for the whole of a dealing or resolving window.
///
/// Invariants:
/// - a card appears in at most one slot, and `index[card] == Some(slot)` iff
///   `places[slot].card == Some(card)`
/// - a card leaves the table only after its slot's holders were cleared
#[derive(Debug, Clone)]
pub struct Table {
    places: Vec<Place>,
    index: Vec<Option<Slot>>,
    ready: bool,
}

impl Table {
    /// An empty table with `slots` places for cards drawn from a deck of
    /// `deck` cards. The table starts not ready.
    pub fn new(slots: usize, deck: usize) -> Self {
        Self {
            places: vec![Place::default(); slots],
            index: vec![None; deck],
            ready: false,
        }
    }
    pub fn capacity(&self) -> usize {
        self.places.len()
    }
    pub fn is_ready(&self) -> bool {
        self.ready
    }
    /// Dealer only.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
    pub fn card(&self, slot: Slot) -> Option<Card> {
        self.places.get(slot).and_then(Place::card)
    }
    pub fn slot(&self, card: Card) -> Option<Slot> {
        self.index.get(usize::from(card)).copied().flatten()
    }
    /// Every card on the table, in slot order.
    pub fn cards(&self) -> Vec<Card> {
        self.places.iter().filter_map(Place::card).collect()
    }
    pub fn count_cards(&self) -> usize {
        self.places.iter().filter(|p| !p.is_empty()).count()
    }
    pub fn empty_slots(&self) -> Vec<Slot> {
        (0..self.capacity())
            .filter(|&slot| self.places[slot].is_empty())
            .collect()
    }
    /// Slots currently holding each of the cards, or None if any is gone.
    pub fn locate(&self, cards: &[Card; 3]) -> Option<[Slot; 3]> {
        let [a, b, c] = cards;
        Some([self.slot(*a)?, self.slot(*b)?, self.slot(*c)?])
    }
    pub fn holders(&self, slot: Slot) -> BTreeSet<Seat> {
        self.places
            .get(slot)
            .map(|p| p.holders().clone())
            .unwrap_or_default()
    }
}

/// Card placement. Dealer only.
impl Table {
    /// Puts a card into an empty slot.
    pub fn place_card(&mut self, card: Card, slot: Slot) {
        debug_assert!(self.slot(card).is_none(), "card {} already dealt", card);
        log::trace!("[table] {} -> slot {}", card, slot);
        self.places[slot].set(card);
        self.index[usize::from(card)] = Some(slot);
    }
    /// Takes the card out of a slot. The slot's tokens must have been
    /// reconciled beforehand.
    pub fn remove_card(&mut self, slot: Slot) -> Option<Card> {
        debug_assert!(self.places[slot].holders().is_empty());
        let card = self.places[slot].take()?;
        self.index[usize::from(card)] = None;
        log::trace!("[table] {} <- slot {}", card, slot);
        Some(card)
    }
    /// Removes every token from a slot, returning who held one.
    pub fn clear_tokens(&mut self, slot: Slot) -> BTreeSet<Seat> {
        self.places
            .get_mut(slot)
            .map(Place::release_all)
            .unwrap_or_default()
    }
}

/// Token placement. Each player touches only its own tokens.
impl Table {
    /// Returns false if the slot does not exist or the token was already there.
    pub fn place_token(&mut self, seat: Seat, slot: Slot) -> bool {
        self.places
            .get_mut(slot)
            .map(|p| p.hold(seat))
            .unwrap_or(false)
    }
    /// Returns false if the slot does not exist or held no such token.
    pub fn remove_token(&mut self, seat: Seat, slot: Slot) -> bool {
        self.places
            .get_mut(slot)
            .map(|p| p.release(seat))
            .unwrap_or(false)
    }
}

/// Consistency of the card/slot mapping in both directions.
impl Table {
    pub fn is_consistent(&self) -> bool {
        let forward = self.places.iter().enumerate().all(|(slot, p)| {
            p.card()
                .map(|card| self.slot(card) == Some(slot))
                .unwrap_or(true)
        });
        let backward = self.index.iter().enumerate().all(|(card, slot)| {
            slot.map(|s| self.card(s).map(usize::from) == Some(card))
                .unwrap_or(true)
        });
        forward && backward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt() -> Table {
        let mut table = Table::new(12, 81);
        (0..12).for_each(|i| table.place_card(Card::from(i as u16 * 2), i));
        table
    }

    #[test]
    fn new_table_is_empty_and_not_ready() {
        let table = Table::new(12, 81);
        assert!(!table.is_ready());
        assert_eq!(table.count_cards(), 0);
        assert_eq!(table.empty_slots().len(), 12);
    }

    #[test]
    fn place_card_indexes_both_ways() {
        let table = dealt();
        assert_eq!(table.card(3), Some(Card::from(6)));
        assert_eq!(table.slot(Card::from(6)), Some(3));
        assert_eq!(table.slot(Card::from(7)), None);
        assert!(table.is_consistent());
    }

    #[test]
    fn remove_card_clears_both_ways() {
        let mut table = dealt();
        assert_eq!(table.remove_card(3), Some(Card::from(6)));
        assert_eq!(table.card(3), None);
        assert_eq!(table.slot(Card::from(6)), None);
        assert_eq!(table.remove_card(3), None);
        assert_eq!(table.empty_slots(), vec![3]);
        assert!(table.is_consistent());
    }

    #[test]
    fn tokens_are_per_seat_per_slot() {
        let mut table = dealt();
        assert!(table.place_token(0, 5));
        assert!(!table.place_token(0, 5));
        assert!(table.place_token(1, 5));
        assert_eq!(table.holders(5), BTreeSet::from([0, 1]));
        assert!(table.remove_token(0, 5));
        assert!(!table.remove_token(0, 5));
        assert_eq!(table.clear_tokens(5), BTreeSet::from([1]));
        assert!(table.holders(5).is_empty());
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        let mut table = dealt();
        assert!(!table.place_token(0, 12));
        assert!(!table.remove_token(0, 12));
        assert_eq!(table.card(12), None);
    }

    #[test]
    fn locate_requires_all_three() {
        let mut table = dealt();
        let cards = [0, 2, 4].map(Card::from);
        assert_eq!(table.locate(&cards), Some([0, 1, 2]));
        table.remove_card(1);
        assert_eq!(table.locate(&cards), None);
    }
}
