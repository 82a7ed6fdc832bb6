use super::card::Card;
use crate::FEATURE_SIZE;
use std::collections::HashSet;

/// The domain rule deciding which triples of cards count as a set.
///
/// Pure functions over card identifiers; the dealer consults it when
/// resolving a claim and when deciding whether the game can go on.
pub trait Rules: Send + Sync {
    /// Whether the three cards form a set.
    fn is_set(&self, cards: &[Card; 3]) -> bool;
    /// Up to `limit` distinct sets that can be drawn from the pool.
    fn find_sets(&self, pool: &[Card], limit: usize) -> Vec<[Card; 3]>;
    /// Number of sets in the pool, stopping once `limit` are found.
    fn count_sets(&self, pool: &[Card], limit: usize) -> usize {
        self.find_sets(pool, limit).len()
    }
}

/// Standard rule: on every feature the three cards are all equal or all
/// different. With three values per feature that is exactly "the values sum
/// to zero mod 3", and any two cards determine the unique third.
#[derive(Debug, Clone, Copy)]
pub struct Classic {
    features: usize,
}

impl Classic {
    pub fn new(features: usize) -> Self {
        Self { features }
    }
    /// The unique card completing a set with `a` and `b`.
    pub fn complement(&self, a: Card, b: Card) -> Card {
        let n = FEATURE_SIZE as u8;
        let features = (0..self.features)
            .map(|i| (n - (a.feature(i) + b.feature(i)) % n) % n)
            .collect::<Vec<u8>>();
        Card::compose(&features)
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new(crate::FEATURES)
    }
}

impl Rules for Classic {
    fn is_set(&self, cards: &[Card; 3]) -> bool {
        let [a, b, c] = cards;
        a != b
            && b != c
            && a != c
            && (0..self.features)
                .all(|i| (a.feature(i) + b.feature(i) + c.feature(i)) as usize % FEATURE_SIZE == 0)
    }
    fn find_sets(&self, pool: &[Card], limit: usize) -> Vec<[Card; 3]> {
        let present = pool.iter().copied().collect::<HashSet<Card>>();
        let mut sorted = present.iter().copied().collect::<Vec<Card>>();
        sorted.sort();
        let mut sets = Vec::new();
        for (i, &a) in sorted.iter().enumerate() {
            for &b in sorted.iter().skip(i + 1) {
                if sets.len() >= limit {
                    return sets;
                }
                let c = self.complement(a, b);
                // each set is reported once, from its two smallest cards
                if c > b && present.contains(&c) {
                    sets.push([a, b, c]);
                }
            }
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn cards(ids: [u16; 3]) -> [Card; 3] {
        ids.map(Card::from)
    }

    #[test]
    fn all_same_but_one_feature_all_different() {
        assert!(Classic::default().is_set(&cards([0, 1, 2])));
        assert!(Classic::default().is_set(&cards([0, 3, 6])));
    }

    #[test]
    fn two_equal_one_different_is_not_a_set() {
        assert!(!Classic::default().is_set(&cards([0, 1, 3])));
        assert!(!Classic::default().is_set(&cards([0, 0, 0])));
    }

    #[test]
    fn complement_completes_the_set() {
        let rules = Classic::default();
        let (a, b) = (Card::from(17), Card::from(58));
        let c = rules.complement(a, b);
        assert!(rules.is_set(&[a, b, c]));
    }

    #[test]
    fn full_deck_has_1080_sets() {
        let deck = Deck::new(4);
        let rules = Classic::default();
        assert_eq!(rules.count_sets(deck.cards(), usize::MAX), 1080);
        assert_eq!(rules.count_sets(deck.cards(), 1), 1);
    }

    #[test]
    fn pool_without_sets() {
        let pool = [0, 1, 3, 4].map(Card::from);
        assert!(Classic::default().find_sets(&pool, usize::MAX).is_empty());
    }

    #[test]
    fn found_sets_are_valid_and_distinct() {
        let rules = Classic::default();
        let pool = (0..12).map(Card::from).collect::<Vec<_>>();
        let sets = rules.find_sets(&pool, usize::MAX);
        assert!(!sets.is_empty());
        assert!(sets.iter().all(|s| rules.is_set(s)));
        let unique = sets.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), sets.len());
    }
}
