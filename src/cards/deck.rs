use super::card::Card;
use crate::FEATURE_SIZE;
use rand::Rng;
use rand::seq::SliceRandom;

/// The cards not currently on the table.
///
/// Order only matters between a shuffle and the draws that follow it; the
/// dealer shuffles before every deal and pushes cards back on a reshuffle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full sorted deck of `3^features` cards.
    pub fn new(features: usize) -> Self {
        let size = FEATURE_SIZE.pow(features as u32) as u16;
        Self((0..size).map(Card::from).collect())
    }
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Takes the top card, if any remain.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Returns a card to the deck.
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.0.contains(&card), "card {} already in deck", card);
        self.0.push(card);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn standard_deck_has_81_cards() {
        let deck = Deck::new(4);
        assert_eq!(deck.len(), 81);
        assert!(deck.contains(&Card::from(0)));
        assert!(deck.contains(&Card::from(80)));
        assert!(!deck.contains(&Card::from(81)));
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = Deck::new(3);
        deck.shuffle(&mut SmallRng::seed_from_u64(7));
        let mut cards = deck.cards().to_vec();
        cards.sort();
        assert_eq!(cards, Deck::new(3).cards());
    }

    #[test]
    fn draw_then_push() {
        let mut deck = Deck::new(1);
        let card = deck.draw().expect("three cards");
        assert_eq!(deck.len(), 2);
        assert!(!deck.contains(&card));
        deck.push(card);
        assert_eq!(deck.len(), 3);
        deck.draw();
        deck.draw();
        deck.draw();
        assert!(deck.draw().is_none());
    }
}
