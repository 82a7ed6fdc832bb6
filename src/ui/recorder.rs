use super::*;
use crate::lock;
use std::sync::Mutex;

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct Recorder(Mutex<Vec<Event>>);

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        lock(&self.0).clone()
    }
    /// Events matching a predicate, in arrival order.
    pub fn filter<F>(&self, f: F) -> Vec<Event>
    where
        F: Fn(&Event) -> bool,
    {
        lock(&self.0).iter().filter(|e| f(e)).cloned().collect()
    }
}

impl Ui for Recorder {
    fn notify(&self, event: &Event) {
        lock(&self.0).push(event.clone());
    }
}
