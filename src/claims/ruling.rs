use super::claim::Ticket;

/// How the dealer resolved a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The cards formed a set and were taken off the table.
    Point,
    /// The cards did not form a set.
    Penalty,
    /// The claim was voided without score effect: one of its cards was taken
    /// by an earlier claim, or the round ended first.
    Void,
}

/// A verdict addressed to one specific claim of the receiving player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruling {
    pub ticket: Ticket,
    pub verdict: Verdict,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Point => write!(f, "point"),
            Verdict::Penalty => write!(f, "penalty"),
            Verdict::Void => write!(f, "void"),
        }
    }
}
