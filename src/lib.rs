//! Concurrent engine for a real-time card-matching game.
//!
//! One dealer task owns the deck and the round clock, several player tasks
//! race to pick triples of cards off a shared table, and every committed
//! pick is resolved strictly one at a time in submission order.
//!
//! ## Modules
//!
//! - [`cards`] — card encoding, the deck, and the set predicate
//! - [`table`] — slot/card/token state shared by the dealer and players
//! - [`claims`] — pending claims and the rulings that resolve them
//! - [`players`] — per-player state machine, coordinator task, input sources
//! - [`dealer`] — round lifecycle: deal, countdown, resolve, reshuffle
//! - [`ui`] — events emitted for rendering and their sinks
//! - [`game`] — configuration and wiring of all tasks
pub mod cards;
pub mod claims;
pub mod dealer;
pub mod game;
pub mod players;
pub mod table;
pub mod ui;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Player identifier, `0..players`.
pub type Seat = usize;
/// Table position, `0..table_size`.
pub type Slot = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards in a claim; also the number of tokens each player owns.
pub const TOKENS: usize = 3;
/// Values each card feature can take.
pub const FEATURE_SIZE: usize = 3;
/// Upper bound on card features (3^6 = 729 cards).
pub const MAX_FEATURES: usize = 6;
/// Slots on a standard table.
pub const TABLE_SIZE: usize = 12;
/// Features on a standard card (3^4 = 81 cards).
pub const FEATURES: usize = 4;
/// Longest permitted dealer polling interval.
pub const MAX_POLL: std::time::Duration = std::time::Duration::from_millis(100);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Recover the guard of a poisoned mutex.
/// A panicking player task must not take the table down with it.
pub fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Directory holding one log file per game.
#[cfg(feature = "server")]
pub const LOG_DIR: &str = "logs";

/// Log file of a game started at `secs` past the epoch.
#[cfg(feature = "server")]
pub fn logfile(secs: u64) -> std::path::PathBuf {
    std::path::Path::new(LOG_DIR).join(format!("setgame-{}.log", secs))
}

/// Routes the `log` facade to the terminal and to this game's file under
/// [`LOG_DIR`]. The file always gets DEBUG; the terminal gets INFO, or DEBUG
/// with `verbose` (token moves and claim traffic).
#[cfg(feature = "server")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = logfile(secs);
    std::fs::create_dir_all(LOG_DIR)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let terminal = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            terminal,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(&path)?,
        ),
    ])?;
    log::debug!("[game] logging to {}", path.display());
    Ok(())
}

/// Ctrl-C ends the game gracefully: winners are still announced.
/// A second Ctrl-C exits immediately.
#[cfg(feature = "server")]
pub fn interrupt(handle: game::Handle) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("cannot listen for interrupts: {}", e);
            return;
        }
        println!();
        log::warn!("interrupt received, finishing the game");
        handle.terminate();
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("second interrupt received, exiting immediately");
            std::process::exit(130);
        }
    });
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn logfile_is_named_after_the_game_start() {
        assert_eq!(
            logfile(1700000000),
            std::path::Path::new("logs").join("setgame-1700000000.log")
        );
    }
}
