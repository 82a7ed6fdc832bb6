use super::intake::Intake;
use super::status::Status;
use crate::Seat;
use crate::Slot;
use crate::cards::Card;
use crate::claims::Claim;
use crate::claims::Ruling;
use crate::claims::Ticket;
use crate::claims::Verdict;
use crate::game::Arena;
use crate::game::stopped;
use crate::ui::Event;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::channel;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Freeze lengths a player imposes on itself after a ruling.
#[derive(Debug, Clone, Copy)]
pub struct Freeze {
    pub point: Duration,
    pub penalty: Duration,
}

/// One player's coordinator task.
///
/// - Playing: each press toggles a token; spending the last token commits the
///   three tokened cards as a claim
/// - Awaiting: blocked on the ruling for that claim; presses wait in the intake
/// - Withdrawing: presses may only lift own tokens
///
/// The dealer reconciles tokens and decides; the actor applies the point or
/// the penalty to its own player.
pub struct Actor {
    seat: Seat,
    arena: Arena,
    freeze: Freeze,
    inbox: Receiver<Slot>,
    rulings: UnboundedReceiver<Ruling>,
    shutdown: watch::Receiver<bool>,
    ticket: Ticket,
    pending: Option<Claim>,
}

impl Actor {
    /// Creates the actor and the intake that feeds it.
    pub fn new(
        seat: Seat,
        arena: Arena,
        freeze: Freeze,
        rulings: UnboundedReceiver<Ruling>,
        shutdown: watch::Receiver<bool>,
    ) -> (Self, Intake) {
        let (tx, rx) = channel(Intake::CAPACITY);
        let intake = Intake::new(seat, tx, arena.clone());
        let actor = Self {
            seat,
            arena,
            freeze,
            inbox: rx,
            rulings,
            shutdown,
            ticket: 0,
            pending: None,
        };
        (actor, intake)
    }
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
    async fn run(mut self) {
        log::debug!("[actor P{}] starting", self.seat);
        loop {
            tokio::select! {
                biased;
                _ = stopped(&mut self.shutdown) => break,
                press = self.inbox.recv() => match press {
                    Some(slot) => {
                        if let Some(claim) = self.toggle(slot) {
                            if !self.await_ruling(claim).await {
                                break;
                            }
                        }
                    }
                    None => {
                        stopped(&mut self.shutdown).await;
                        break;
                    }
                },
            }
        }
        self.settle_delivered();
        log::debug!("[actor P{}] terminated", self.seat);
    }
}

impl Actor {
    /// Applies one press. Returns the claim it committed, if any.
    pub fn toggle(&mut self, slot: Slot) -> Option<Claim> {
        let ref mut table = self.arena.table();
        if !table.is_ready() {
            log::trace!("[actor P{}] table not ready, dropped slot {}", self.seat, slot);
            return None;
        }
        let ref mut player = self.arena.player(self.seat);
        match player.status() {
            Status::Awaiting => None,
            Status::Withdrawing => {
                if player.holds(slot) {
                    table.remove_token(self.seat, slot);
                    player.give(slot);
                    self.arena.notify(Event::TokenRemoved { seat: self.seat, slot });
                }
                None
            }
            Status::Playing => {
                if player.holds(slot) {
                    table.remove_token(self.seat, slot);
                    player.give(slot);
                    self.arena.notify(Event::TokenRemoved { seat: self.seat, slot });
                    return None;
                }
                if table.card(slot).is_none() || !player.take(slot) {
                    return None;
                }
                table.place_token(self.seat, slot);
                self.arena.notify(Event::TokenPlaced { seat: self.seat, slot });
                if player.budget() > 0 {
                    return None;
                }
                let cards = player
                    .placed()
                    .iter()
                    .map(|&s| table.card(s))
                    .collect::<Option<Vec<Card>>>()
                    .and_then(|cards| <[Card; 3]>::try_from(cards).ok());
                let Some(cards) = cards else {
                    log::warn!("[actor P{}] tokens on empty slots, claim withheld", self.seat);
                    return None;
                };
                self.ticket += 1;
                let claim = Claim::new(self.seat, self.ticket, cards);
                player.set_status(Status::Awaiting);
                self.arena.claims().submit(claim);
                self.pending = Some(claim);
                Some(claim)
            }
        }
    }
}

impl Actor {
    /// Blocks until the ruling for this claim arrives, ignoring rulings for
    /// earlier claims. Returns false if the game shut down first.
    async fn await_ruling(&mut self, claim: Claim) -> bool {
        log::debug!("[actor P{}] awaiting ruling on {}", self.seat, claim);
        loop {
            tokio::select! {
                biased;
                ruling = self.rulings.recv() => match ruling {
                    Some(ruling) if ruling.ticket == claim.ticket() => {
                        self.pending = None;
                        self.settle(ruling.verdict).await;
                        return true;
                    }
                    Some(stale) => {
                        log::debug!("[actor P{}] ignoring stale ruling #{}", self.seat, stale.ticket);
                        continue;
                    }
                    None => return false,
                },
                _ = stopped(&mut self.shutdown) => return false,
            }
        }
    }
    /// Applies a verdict to this player.
    pub async fn settle(&mut self, verdict: Verdict) {
        log::debug!("[actor P{}] ruled {}", self.seat, verdict);
        match verdict {
            Verdict::Point => {
                self.award();
                self.frozen(self.freeze.point).await;
                self.arena.player(self.seat).set_status(Status::Playing);
                self.discard_presses();
            }
            Verdict::Penalty => {
                self.frozen(self.freeze.penalty).await;
                let mut player = self.arena.player(self.seat);
                match player.placed().is_empty() {
                    true => player.set_status(Status::Playing),
                    false => player.set_status(Status::Withdrawing),
                }
                drop(player);
                self.discard_presses();
            }
            Verdict::Void => {
                self.arena.player(self.seat).set_status(Status::Playing);
            }
        }
    }
    fn award(&self) {
        let score = self.arena.player(self.seat).award();
        self.arena.notify(Event::Score { seat: self.seat, score });
    }
    /// Sleeps through a freeze, counting it down on the display once a
    /// second. Cut short by shutdown.
    async fn frozen(&mut self, length: Duration) {
        let mut left = length;
        while !left.is_zero() {
            self.arena.notify(Event::Freeze {
                seat: self.seat,
                millis: left.as_millis() as u64,
            });
            let step = left.min(Duration::from_secs(1));
            tokio::select! {
                _ = tokio::time::sleep(step) => left = left.saturating_sub(step),
                _ = stopped(&mut self.shutdown) => break,
            }
        }
        self.arena.notify(Event::Freeze {
            seat: self.seat,
            millis: 0,
        });
    }
    /// Presses made while frozen are void.
    fn discard_presses(&mut self) {
        while self.inbox.try_recv().is_ok() {}
    }
    /// On the way out: a point already delivered for the pending claim still
    /// counts.
    fn settle_delivered(&mut self) {
        let Some(claim) = self.pending.take() else {
            return;
        };
        while let Ok(ruling) = self.rulings.try_recv() {
            if ruling.ticket == claim.ticket() && ruling.verdict == Verdict::Point {
                self.award();
            }
        }
    }
}
