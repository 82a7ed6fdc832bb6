use super::source::Source;
use crate::Slot;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// Presses uniformly random slots at a steady pace.
#[derive(Debug)]
pub struct Robot {
    rng: SmallRng,
    slots: usize,
    pace: Duration,
}

impl Robot {
    pub fn new(slots: usize, pace: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { rng, slots, pace }
    }
}

#[async_trait::async_trait]
impl Source for Robot {
    async fn next(&mut self) -> Option<Slot> {
        tokio::time::sleep(self.pace).await;
        Some(self.rng.random_range(0..self.slots))
    }
}
