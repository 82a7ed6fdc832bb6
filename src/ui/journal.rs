use super::*;
use std::io::Write;

/// Writes each event as a JSON line on stdout, for piping into a renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Journal;

impl Ui for Journal {
    fn notify(&self, event: &Event) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", event.to_json()) {
            log::warn!("[journal] write failed: {}", e);
        }
    }
}
