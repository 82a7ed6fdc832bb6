use super::timer::Timer;
use super::timer::TimerPolicy;
use crate::Seat;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Rules;
use crate::claims::Claim;
use crate::claims::Ruling;
use crate::claims::Verdict;
use crate::game::Arena;
use crate::game::Config;
use crate::game::Handle;
use crate::game::stopped;
use crate::ui::Event;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Round lifecycle driver.
///
/// ```text
/// Dealing ──no sets left──────────────────────────┐
///    │                                            │
///    ▼                                            ▼
/// Running ⇄ Resolving ──timeout──▶ Reshuffling  Terminating
///    │                                 │
///    └──────────terminate──────────────┴──▶ Terminating
/// ```
///
/// Claims are resolved strictly one at a time in submission order, each one
/// completely (tokens returned, overlapping claims voided, cards removed,
/// ruling sent) under a single hold of the table lock before the next is
/// popped. That is what keeps two claims from ever scoring the same card.
pub struct Dealer {
    arena: Arena,
    config: Config,
    rules: Arc<dyn Rules>,
    deck: Deck,
    rng: SmallRng,
    timer: Timer,
    rulings: Vec<UnboundedSender<Ruling>>,
    handle: Handle,
}

impl Dealer {
    /// `rulings[seat]` reaches that seat's actor.
    pub fn new(
        arena: Arena,
        config: Config,
        rules: Arc<dyn Rules>,
        rulings: Vec<UnboundedSender<Ruling>>,
        handle: Handle,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            deck: Deck::new(config.features),
            timer: Timer::new(config.turn_timeout, config.warning),
            arena,
            config,
            rules,
            rng,
            rulings,
            handle,
        }
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

/// Lifecycle.
impl Dealer {
    /// Runs rounds until the cards run out of sets or termination is
    /// requested, then stops the actors and returns the winners.
    pub async fn run(mut self, actors: Vec<JoinHandle<()>>) -> Vec<Seat> {
        log::info!("[dealer] starting with {} players", self.arena.seats());
        while !self.handle.is_terminated() {
            if !self.deal().await {
                log::info!("[dealer] no sets left in deck and table");
                break;
            }
            let over = self.play().await;
            self.reshuffle();
            if over {
                break;
            }
        }
        self.terminate(actors).await
    }
    /// Running: poll, update the countdown, drain claims, refill. Returns
    /// true if the game must end after this round.
    async fn play(&mut self) -> bool {
        self.timer.start();
        self.set_ready(true);
        while !self.handle.is_terminated() && !self.timer.expired() {
            tokio::time::sleep(self.config.poll).await;
            self.tick();
            if self.drain() > 0 {
                if !self.deal().await {
                    log::info!("[dealer] no sets left after refill");
                    return true;
                }
                self.set_ready(true);
            }
        }
        match self.handle.is_terminated() {
            true => log::info!("[dealer] round interrupted"),
            false => log::info!("[dealer] round timed out, reshuffling"),
        }
        self.handle.is_terminated()
    }
    /// Terminating: stops every actor, waits for them, and announces the
    /// highest scorers.
    async fn terminate(self, actors: Vec<JoinHandle<()>>) -> Vec<Seat> {
        self.handle.terminate();
        self.set_ready(false);
        for claim in self.arena.claims().clear() {
            self.rule(&claim, Verdict::Void);
        }
        for actor in actors {
            if let Err(e) = actor.await {
                log::warn!("[dealer] actor failed: {}", e);
            }
        }
        let winners = self.winners();
        log::info!("[dealer] scores {:?}", self.arena.scores());
        self.arena.notify(Event::Winners {
            seats: winners.clone(),
        });
        if !self.config.end_pause.is_zero() {
            tokio::time::sleep(self.config.end_pause).await;
        }
        log::info!("[dealer] terminated");
        winners
    }
}

/// Dealing.
impl Dealer {
    /// Shuffles and fills every empty slot the deck can cover. Leaves the
    /// table not ready. Returns whether any set remains among deck and table.
    pub async fn deal(&mut self) -> bool {
        self.set_ready(false);
        self.deck.shuffle(&mut self.rng);
        let empty = self.arena.table().empty_slots();
        for slot in empty {
            if self.handle.is_terminated() {
                log::debug!("[dealer] dealing cut short by termination");
                break;
            }
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.arena.table().place_card(card, slot);
            self.arena.notify(Event::CardPlaced { slot, card });
            if !self.config.deal_delay.is_zero() {
                let mut shutdown = self.handle.subscribe();
                tokio::select! {
                    _ = tokio::time::sleep(self.config.deal_delay) => {}
                    _ = stopped(&mut shutdown) => break,
                }
            }
        }
        let dealt = self.arena.table().count_cards();
        log::debug!("[dealer] dealt, {} on table, {} in deck", dealt, self.deck.len());
        self.hints();
        self.has_sets()
    }
    /// Whether deck and table together still hold a set.
    pub fn has_sets(&self) -> bool {
        let mut pool = self.arena.table().cards();
        pool.extend_from_slice(self.deck.cards());
        self.rules.count_sets(&pool, 1) > 0
    }
    fn hints(&self) {
        if !self.config.hints {
            return;
        }
        let table = self.arena.table();
        self.rules
            .find_sets(&table.cards(), usize::MAX)
            .iter()
            .filter_map(|set| table.locate(set))
            .for_each(|slots| log::info!("[dealer] hint: slots {:?}", slots));
    }
    /// Reshuffling: voids every pending claim without penalty, returns every
    /// card to the deck, clears every token and resets every player.
    pub fn reshuffle(&mut self) {
        self.timer.clear();
        let mut table = self.arena.table();
        table.set_ready(false);
        for claim in self.arena.claims().clear() {
            self.rule(&claim, Verdict::Void);
        }
        for slot in 0..table.capacity() {
            for seat in table.clear_tokens(slot) {
                self.arena.notify(Event::TokenRemoved { seat, slot });
            }
            if let Some(card) = table.remove_card(slot) {
                self.deck.push(card);
                self.arena.notify(Event::CardRemoved { slot });
            }
        }
        (0..self.arena.seats()).for_each(|seat| self.arena.player(seat).reset());
        log::debug!("[dealer] reshuffled, {} in deck", self.deck.len());
    }
}

/// Resolving.
impl Dealer {
    /// Resolves every pending claim, oldest first, with the table closed to
    /// players. Returns how many were resolved.
    pub fn drain(&mut self) -> usize {
        if self.arena.claims().is_empty() {
            return 0;
        }
        self.set_ready(false);
        let mut resolved = 0;
        while let Some(claim) = self.arena.claims().pop() {
            self.resolve(claim);
            resolved += 1;
        }
        resolved
    }
    /// Resolves one claim and sends the ruling to its player.
    ///
    /// - a card of the claim has left the table → [`Verdict::Void`]
    /// - the cards are not a set → [`Verdict::Penalty`], table untouched
    /// - the cards are a set → [`Verdict::Point`]: every token on their slots
    ///   goes back to its owner, every other pending claim using one of them
    ///   is voided, and the cards leave the table
    pub fn resolve(&mut self, claim: Claim) -> Verdict {
        let verdict = {
            let mut table = self.arena.table();
            let verdict = match table.locate(claim.cards()) {
                None => Verdict::Void,
                Some(_) if !self.rules.is_set(claim.cards()) => Verdict::Penalty,
                Some(slots) => {
                    for slot in slots {
                        for seat in table.clear_tokens(slot) {
                            self.arena.player(seat).give(slot);
                            self.arena.notify(Event::TokenRemoved { seat, slot });
                        }
                    }
                    for voided in self.arena.claims().invalidate_overlapping(claim.cards()) {
                        log::debug!("[dealer] {} voided by {}", voided, claim);
                        self.rule(&voided, Verdict::Void);
                    }
                    for slot in slots {
                        table.remove_card(slot);
                        self.arena.notify(Event::CardRemoved { slot });
                    }
                    Verdict::Point
                }
            };
            self.rule(&claim, verdict);
            verdict
        };
        log::info!("[dealer] {} -> {}", claim, verdict);
        if verdict == Verdict::Point && self.config.timer == TimerPolicy::ResetOnPoint {
            self.timer.start();
        }
        verdict
    }
    fn rule(&self, claim: &Claim, verdict: Verdict) {
        let ruling = Ruling {
            ticket: claim.ticket(),
            verdict,
        };
        match self.rulings.get(claim.seat()).map(|tx| tx.send(ruling)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[dealer] ruling to P{} failed: {:?}", claim.seat(), e),
            None => log::warn!("[dealer] ruling to P{}: no such player", claim.seat()),
        }
    }
}

/// Countdown and bookkeeping.
impl Dealer {
    /// Reports the time left. Returns whether the round is over.
    pub fn tick(&self) -> bool {
        if let Some(left) = self.timer.remaining() {
            self.arena.notify(Event::Countdown {
                millis: left.as_millis() as u64,
                warn: self.timer.warns(),
            });
        }
        self.timer.expired()
    }
    fn set_ready(&self, ready: bool) {
        self.arena.table().set_ready(ready);
    }
    /// Every seat sharing the highest score.
    pub fn winners(&self) -> Vec<Seat> {
        let scores = self.arena.scores();
        let best = scores.iter().copied().max().unwrap_or(0);
        scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect()
    }
    /// Every card the dealer accounts for, on the table or in the deck.
    pub fn accounted(&self) -> Vec<Card> {
        let mut cards = self.arena.table().cards();
        cards.extend_from_slice(self.deck.cards());
        cards.sort();
        cards
    }
}
