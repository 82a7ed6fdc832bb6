//! Cards, the deck, and the set predicate.
//!
//! ## Core Types
//!
//! - [`Card`] — An immutable card identifier, `0..3^features`
//! - [`Deck`] — The dealer's shuffled pile of cards not on the table
//! - [`Rules`] — Pluggable validity predicate and exhaustive set search
//! - [`Classic`] — The standard rule: every feature all-equal or all-distinct
mod card;
mod deck;
mod rules;

pub use card::*;
pub use deck::*;
pub use rules::*;
