//! Configuration and wiring.
//!
//! - [`Config`] — every tunable, validated before a game starts
//! - [`Arena`] — the state the dealer and the players share
//! - [`Handle`] — one-way termination switch
//! - [`Game`] — spawns the actors, their input and the dealer, and returns
//!   the winners
mod arena;
mod config;
mod game;
mod handle;

pub use arena::*;
pub use config::*;
pub use game::*;
pub use handle::*;
