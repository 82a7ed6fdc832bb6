//! Player side of the table.
//!
//! ## State
//!
//! - [`Player`] — score, token budget, placed tokens, and [`Status`]
//!
//! ## Execution
//!
//! - [`Actor`] — per-player task: applies presses, submits claims, waits for
//!   rulings, and applies points and penalties to itself
//! - [`Intake`] — bounded three-press inbox in front of an actor
//!
//! ## Input
//!
//! - [`Source`] — anything producing slot presses at its own pace
//! - [`Robot`] — random presses
//! - [`Script`] — a fixed sequence of presses
//! - [`Keyboard`] — human presses read from stdin
mod actor;
mod intake;
mod keyboard;
mod player;
mod robot;
mod script;
mod source;
mod status;

pub use actor::*;
pub use intake::*;
pub use keyboard::*;
pub use player::*;
pub use robot::*;
pub use script::*;
pub use source::*;
pub use status::*;
