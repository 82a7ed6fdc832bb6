use super::status::Status;
use crate::Slot;
use crate::TOKENS;
use std::collections::BTreeSet;

/// One player's shared record.
///
/// Written by the player's own actor for its presses and its outcomes, and by
/// the dealer while it reconciles tokens or resets a round. Always locked
/// after the table, never before it.
///
/// `budget() + placed().len() == TOKENS` holds at every unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    score: usize,
    budget: usize,
    placed: BTreeSet<Slot>,
    status: Status,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            score: 0,
            budget: TOKENS,
            placed: BTreeSet::new(),
            status: Status::Playing,
        }
    }
}

impl Player {
    pub fn score(&self) -> usize {
        self.score
    }
    pub fn budget(&self) -> usize {
        self.budget
    }
    pub fn placed(&self) -> &BTreeSet<Slot> {
        &self.placed
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn holds(&self, slot: Slot) -> bool {
        self.placed.contains(&slot)
    }
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
    /// Spends one token on a slot. Returns false if none is left or the slot
    /// already has one of ours.
    pub fn take(&mut self, slot: Slot) -> bool {
        if self.budget == 0 || !self.placed.insert(slot) {
            return false;
        }
        self.budget -= 1;
        true
    }
    /// Gets the token on a slot back. A withdrawing player whose last token
    /// comes back is playing again.
    pub fn give(&mut self, slot: Slot) -> bool {
        if !self.placed.remove(&slot) {
            return false;
        }
        self.budget += 1;
        if self.status == Status::Withdrawing && self.placed.is_empty() {
            self.status = Status::Playing;
        }
        true
    }
    /// Adds a point, returning the new score.
    pub fn award(&mut self) -> usize {
        self.score += 1;
        self.score
    }
    /// Full budget, no tokens, playing. Score is kept.
    pub fn reset(&mut self) {
        self.budget = TOKENS;
        self.placed.clear();
        self.status = Status::Playing;
    }
    pub fn is_balanced(&self) -> bool {
        self.budget + self.placed.len() == TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player() {
        let player = Player::default();
        assert_eq!(player.budget(), 3);
        assert_eq!(player.score(), 0);
        assert_eq!(player.status(), Status::Playing);
        assert!(player.is_balanced());
    }

    #[test]
    fn take_and_give_keep_balance() {
        let mut player = Player::default();
        assert!(player.take(4));
        assert!(!player.take(4));
        assert!(player.take(7));
        assert!(player.take(9));
        assert!(!player.take(1));
        assert_eq!(player.budget(), 0);
        assert!(player.is_balanced());
        assert!(player.give(7));
        assert!(!player.give(7));
        assert_eq!(player.budget(), 1);
        assert!(player.is_balanced());
    }

    #[test]
    fn withdrawing_ends_with_last_token() {
        let mut player = Player::default();
        player.take(0);
        player.take(1);
        player.set_status(Status::Withdrawing);
        player.give(0);
        assert_eq!(player.status(), Status::Withdrawing);
        player.give(1);
        assert_eq!(player.status(), Status::Playing);
    }

    #[test]
    fn reset_keeps_score() {
        let mut player = Player::default();
        player.award();
        player.take(2);
        player.set_status(Status::Awaiting);
        player.reset();
        assert_eq!(player.score(), 1);
        assert_eq!(player.budget(), 3);
        assert!(player.placed().is_empty());
        assert_eq!(player.status(), Status::Playing);
    }
}
