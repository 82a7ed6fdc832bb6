use super::status::Status;
use crate::Seat;
use crate::Slot;
use crate::TOKENS;
use crate::game::Arena;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;

/// Front door of an actor: holds at most [`TOKENS`] unconsumed presses.
///
/// Presses that cannot matter are dropped on arrival: the table is not
/// ready, the player is waiting for a ruling, or a withdrawing player presses
/// a slot it holds no token on. A press arriving while the inbox is full is
/// dropped too. None of this is an error; it is how concurrent input is kept
/// from racing the dealer.
#[derive(Debug, Clone)]
pub struct Intake {
    seat: Seat,
    inbox: Sender<Slot>,
    arena: Arena,
}

impl Intake {
    pub const CAPACITY: usize = TOKENS;

    pub(super) fn new(seat: Seat, inbox: Sender<Slot>, arena: Arena) -> Self {
        Self { seat, inbox, arena }
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    /// Offers a press. Returns whether it was queued.
    pub fn press(&self, slot: Slot) -> bool {
        if !self.admits(slot) {
            log::trace!("[intake P{}] dropped slot {}", self.seat, slot);
            return false;
        }
        match self.inbox.try_send(slot) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::trace!("[intake P{}] full, dropped slot {}", self.seat, slot);
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
    fn admits(&self, slot: Slot) -> bool {
        let table = self.arena.table();
        if slot >= table.capacity() || !table.is_ready() {
            return false;
        }
        let player = self.arena.player(self.seat);
        match player.status() {
            Status::Playing => true,
            Status::Awaiting => false,
            Status::Withdrawing => player.holds(slot),
        }
    }
}
