/// Where a player stands in the claim cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// May place and remove tokens.
    #[default]
    Playing,
    /// A claim is out (or its point/penalty freeze is running); presses are
    /// dropped.
    Awaiting,
    /// Penalized: may only lift its own tokens, and plays again once none
    /// are left.
    Withdrawing,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::Awaiting => write!(f, "awaiting"),
            Status::Withdrawing => write!(f, "withdrawing"),
        }
    }
}
