use super::source::Source;
use crate::Slot;
use std::collections::VecDeque;
use std::time::Duration;

/// Replays a fixed list of presses, one per `pace`.
#[derive(Debug, Clone)]
pub struct Script {
    presses: VecDeque<Slot>,
    pace: Duration,
}

impl Script {
    pub fn new<I>(presses: I, pace: Duration) -> Self
    where
        I: IntoIterator<Item = Slot>,
    {
        Self {
            presses: presses.into_iter().collect(),
            pace,
        }
    }
}

#[async_trait::async_trait]
impl Source for Script {
    async fn next(&mut self) -> Option<Slot> {
        if self.presses.is_empty() {
            return None;
        }
        tokio::time::sleep(self.pace).await;
        self.presses.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_ends() {
        let mut script = Script::new([3, 1, 4], Duration::ZERO);
        assert_eq!(script.next().await, Some(3));
        assert_eq!(script.next().await, Some(1));
        assert_eq!(script.next().await, Some(4));
        assert_eq!(script.next().await, None);
    }
}
