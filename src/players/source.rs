use super::intake::Intake;
use crate::Slot;
use crate::game::stopped;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Producer of slot presses for one player.
///
/// Human and automated input look the same to the engine: a stream of slots
/// pushed through the player's [`Intake`], paced however the source likes.
#[async_trait::async_trait]
pub trait Source: Send {
    /// Next press. `None` ends the feed.
    async fn next(&mut self) -> Option<Slot>;
}

/// Pumps a source into an intake on its own task until the source runs dry or
/// the game shuts down.
pub fn feed(
    mut source: Box<dyn Source>,
    intake: Intake,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        log::debug!("[source P{}] starting", intake.seat());
        loop {
            tokio::select! {
                biased;
                _ = stopped(&mut shutdown) => break,
                slot = source.next() => match slot {
                    Some(slot) => {
                        intake.press(slot);
                    }
                    None => break,
                },
            }
        }
        log::debug!("[source P{}] terminated", intake.seat());
    })
}
