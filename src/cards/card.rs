use crate::FEATURE_SIZE;

/// A card encoded as its index in a sorted deck.
///
/// The deck holds every combination of `features` attributes, each taking one
/// of [`FEATURE_SIZE`] values. The index is the base-3 number whose digits are
/// those values, least significant feature first:
///
/// ```text
/// card 46 = 1·27 + 2·9 + 0·3 + 1·1  →  features [1, 0, 2, 1]
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Card(u16);

impl Card {
    /// Value of the `i`-th feature, `0..FEATURE_SIZE`.
    pub fn feature(&self, i: usize) -> u8 {
        let radix = (FEATURE_SIZE as u16).pow(i as u32);
        ((self.0 / radix) % FEATURE_SIZE as u16) as u8
    }
    /// All feature values of this card, given how many features a card has.
    pub fn features(&self, n: usize) -> Vec<u8> {
        (0..n).map(|i| self.feature(i)).collect()
    }
    /// Builds a card from its feature values, least significant first.
    pub fn compose(features: &[u8]) -> Self {
        Self(
            features
                .iter()
                .rev()
                .fold(0u16, |acc, &v| acc * FEATURE_SIZE as u16 + v as u16),
        )
    }
}

/// u16 isomorphism
impl From<u16> for Card {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Card> for u16 {
    fn from(c: Card) -> u16 {
        c.0
    }
}

/// index into card-keyed arrays
impl From<Card> for usize {
    fn from(c: Card) -> usize {
        c.0 as usize
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02}", self.0)
    }
}
