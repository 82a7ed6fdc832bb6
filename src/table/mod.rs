//! Shared table state: which card sits in which slot, and who holds a token
//! on it.
mod place;
mod table;

pub use place::*;
pub use table::*;
