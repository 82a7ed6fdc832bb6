//! The dealer: sole owner of the deck and the round clock, and the only
//! writer of cards on the table.
mod dealer;
mod timer;

pub use dealer::*;
pub use timer::*;
