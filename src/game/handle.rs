use std::sync::Arc;
use tokio::sync::watch;

/// Termination switch shared by the dealer, every actor and every source.
///
/// Flipping it is one-way; each loop notices within one polling interval.
#[derive(Debug, Clone)]
pub struct Handle(Arc<watch::Sender<bool>>);

impl Default for Handle {
    fn default() -> Self {
        Self(Arc::new(watch::channel(false).0))
    }
}

impl Handle {
    /// Asks the game to stop and announce its winners.
    pub fn terminate(&self) {
        if !self.0.send_replace(true) {
            log::info!("[game] termination requested");
        }
    }
    pub fn is_terminated(&self) -> bool {
        *self.0.borrow()
    }
    /// A receiver that resolves `wait_for(|&stop| stop)` on termination.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.0.subscribe()
    }
}

/// Resolves once termination is requested, or the switch is gone.
///
/// Nothing borrowed from the receiver outlives the call, so a `select!` arm
/// on it leaves the owner free for its other branches.
pub async fn stopped(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|&stop| stop).await;
}
