use super::*;
use colored::Colorize;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Renders events as log lines.
///
/// The dealer reports the countdown on every poll; only whole-second changes
/// are printed.
#[derive(Debug, Default)]
pub struct Terminal {
    second: AtomicU64,
}

impl Ui for Terminal {
    fn notify(&self, event: &Event) {
        match event {
            Event::Countdown { millis, warn } => {
                let second = millis / 1000;
                if self.second.swap(second, Ordering::Relaxed) != second {
                    match warn {
                        true => log::info!("{}", event.to_string().red().bold()),
                        false => log::info!("{}", event),
                    }
                }
            }
            Event::CardPlaced { .. } | Event::CardRemoved { .. } => {
                log::info!("{}", event.to_string().dimmed())
            }
            Event::TokenPlaced { .. } | Event::TokenRemoved { .. } => log::debug!("{}", event),
            Event::Score { .. } => log::info!("{}", event.to_string().green()),
            Event::Freeze { millis, .. } if *millis > 0 => {
                log::info!("{}", event.to_string().yellow())
            }
            Event::Freeze { .. } => log::debug!("{}", event),
            Event::Winners { .. } => log::info!("{}", event.to_string().bold().cyan()),
        }
    }
}
