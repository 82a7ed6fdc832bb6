//! Rendering boundary.
//!
//! The engine never draws anything itself; it reports what changed as
//! [`Event`]s to a [`Ui`] sink.
//!
//! - [`Silent`] — discards everything
//! - [`Recorder`] — keeps every event, for inspection in tests
//! - [`Journal`] — one JSON object per event on stdout
//! - [`Terminal`] — human-readable colored log lines
mod event;
mod journal;
mod recorder;
mod silent;
#[cfg(feature = "server")]
mod terminal;
mod ui;

pub use event::*;
pub use journal::*;
pub use recorder::*;
pub use silent::*;
#[cfg(feature = "server")]
pub use terminal::*;
pub use ui::*;
