use crate::Seat;
use crate::claims::Claims;
use crate::lock;
use crate::players::Player;
use crate::table::Table;
use crate::ui::Event;
use crate::ui::Ui;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Handles to everything the dealer and players share.
///
/// Cloning is cheap; every clone points at the same table, queue, roster
/// and display. Lock order is table, then player, then the claim queue.
#[derive(Clone)]
pub struct Arena {
    table: Arc<Mutex<Table>>,
    claims: Arc<Claims>,
    players: Arc<Vec<Mutex<Player>>>,
    ui: Arc<dyn Ui>,
}

impl Arena {
    pub fn new(table: Table, seats: usize, ui: Arc<dyn Ui>) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
            claims: Arc::new(Claims::default()),
            players: Arc::new((0..seats).map(|_| Mutex::new(Player::default())).collect()),
            ui,
        }
    }
    pub fn table(&self) -> MutexGuard<'_, Table> {
        lock(&self.table)
    }
    pub fn player(&self, seat: Seat) -> MutexGuard<'_, Player> {
        lock(&self.players[seat])
    }
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
    pub fn seats(&self) -> usize {
        self.players.len()
    }
    pub fn notify(&self, event: Event) {
        self.ui.notify(&event);
    }
    /// Every player's score, by seat.
    pub fn scores(&self) -> Vec<usize> {
        (0..self.seats()).map(|s| self.player(s).score()).collect()
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("table", &self.table)
            .field("claims", &self.claims)
            .field("players", &self.players)
            .finish()
    }
}
