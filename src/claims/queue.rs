use super::claim::Claim;
use crate::cards::Card;
use crate::lock;
use std::collections::VecDeque;
use std::sync::Mutex;

/// FIFO of pending claims.
///
/// Many players append; only the dealer pops, voids, or clears. Every
/// operation takes the one lock, which is plenty since each player has at
/// most one claim pending at a time.
#[derive(Debug, Default)]
pub struct Claims(Mutex<VecDeque<Claim>>);

impl Claims {
    /// Appends a claim. Never blocks beyond the lock.
    pub fn submit(&self, claim: Claim) {
        log::debug!("[claims] submitted {}", claim);
        lock(&self.0).push_back(claim);
    }
    /// Oldest pending claim, if any.
    pub fn pop(&self) -> Option<Claim> {
        lock(&self.0).pop_front()
    }
    /// Removes a specific pending claim. Returns false if it was no longer
    /// pending, so voiding twice is harmless.
    pub fn invalidate(&self, claim: &Claim) -> bool {
        let mut queue = lock(&self.0);
        match queue.iter().position(|c| c == claim) {
            Some(i) => queue.remove(i).is_some(),
            None => false,
        }
    }
    /// Removes and returns every pending claim that uses any of the cards.
    pub fn invalidate_overlapping(&self, cards: &[Card]) -> Vec<Claim> {
        let mut queue = lock(&self.0);
        let (voided, kept) = queue
            .drain(..)
            .partition::<Vec<Claim>, _>(|c| c.overlaps(cards));
        queue.extend(kept);
        voided
    }
    /// Removes and returns every pending claim.
    pub fn clear(&self) -> Vec<Claim> {
        lock(&self.0).drain(..).collect()
    }
    pub fn is_empty(&self) -> bool {
        lock(&self.0).is_empty()
    }
    pub fn len(&self) -> usize {
        lock(&self.0).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(seat: usize, cards: [u16; 3]) -> Claim {
        Claim::new(seat, 0, cards.map(Card::from))
    }

    #[test]
    fn pops_in_submission_order() {
        let claims = Claims::default();
        claims.submit(claim(2, [0, 1, 2]));
        claims.submit(claim(0, [3, 4, 5]));
        claims.submit(claim(1, [6, 7, 8]));
        assert_eq!(claims.pop().map(|c| c.seat()), Some(2));
        assert_eq!(claims.pop().map(|c| c.seat()), Some(0));
        assert_eq!(claims.pop().map(|c| c.seat()), Some(1));
        assert!(claims.pop().is_none());
        assert!(claims.is_empty());
    }

    #[test]
    fn invalidate_is_idempotent() {
        let claims = Claims::default();
        let a = claim(0, [0, 1, 2]);
        let b = claim(1, [3, 4, 5]);
        claims.submit(a);
        claims.submit(b);
        assert!(claims.invalidate(&a));
        assert!(!claims.invalidate(&a));
        assert_eq!(claims.len(), 1);
        assert_eq!(claims.pop(), Some(b));
    }

    #[test]
    fn invalidate_overlapping_keeps_order_of_the_rest() {
        let claims = Claims::default();
        claims.submit(claim(0, [0, 1, 2]));
        claims.submit(claim(1, [2, 9, 10]));
        claims.submit(claim(2, [3, 4, 5]));
        claims.submit(claim(3, [6, 7, 8]));
        let voided = claims.invalidate_overlapping(&[Card::from(2), Card::from(7)]);
        assert_eq!(voided.iter().map(Claim::seat).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(claims.pop().map(|c| c.seat()), Some(2));
        assert!(claims.is_empty());
    }

    #[test]
    fn concurrent_submitters() {
        let claims = std::sync::Arc::new(Claims::default());
        let handles = (0..8)
            .map(|seat| {
                let claims = claims.clone();
                std::thread::spawn(move || claims.submit(claim(seat, [0, 1, 2])))
            })
            .collect::<Vec<_>>();
        handles.into_iter().for_each(|h| h.join().unwrap());
        assert_eq!(claims.clear().len(), 8);
        assert!(claims.is_empty());
    }
}
