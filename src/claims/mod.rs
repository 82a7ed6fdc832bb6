//! Claims submitted by players and the rulings the dealer hands back.
mod claim;
mod queue;
mod ruling;

pub use claim::*;
pub use queue::*;
pub use ruling::*;
