use super::event::Event;

/// Sink for everything the dealer and players want shown.
///
/// Called from every task, sometimes while the table lock is held, so
/// implementations must be quick and must not call back into the engine.
pub trait Ui: Send + Sync {
    fn notify(&self, event: &Event);
}
