use super::intake::Intake;
use crate::Seat;
use crate::Slot;
use std::io::BufRead;

/// Key layouts for up to two humans sharing one keyboard, row by row over a
/// 3x4 table.
pub const LAYOUTS: [&str; 2] = ["qwerasdfzxcv", "uiopjkl;m,./"];

/// Human input: reads stdin line by line and turns every character into a
/// press for whichever player owns that key.
pub struct Keyboard {
    intakes: Vec<Intake>,
}

impl Keyboard {
    /// Intakes in seat order; the i-th one gets the i-th layout.
    pub fn new(intakes: Vec<Intake>) -> Self {
        Self { intakes }
    }
    /// Which player and slot a key stands for.
    pub fn translate(key: char, humans: usize) -> Option<(Seat, Slot)> {
        LAYOUTS
            .iter()
            .take(humans)
            .enumerate()
            .find_map(|(seat, layout)| layout.chars().position(|k| k == key).map(|s| (seat, s)))
    }
    /// Reads stdin on a dedicated thread until end of input. The thread is
    /// detached: a blocked read cannot be cancelled, and presses arriving
    /// after the game ended go nowhere.
    pub fn spawn(self) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                line.chars()
                    .map(|key| key.to_ascii_lowercase())
                    .filter_map(|key| Self::translate(key, self.intakes.len()))
                    .for_each(|(seat, slot)| {
                        self.intakes[seat].press(slot);
                    });
            }
            log::debug!("[keyboard] end of input");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_seats_and_slots() {
        assert_eq!(Keyboard::translate('q', 2), Some((0, 0)));
        assert_eq!(Keyboard::translate('v', 2), Some((0, 11)));
        assert_eq!(Keyboard::translate('j', 2), Some((1, 4)));
        assert_eq!(Keyboard::translate('/', 2), Some((1, 11)));
    }

    #[test]
    fn second_layout_needs_second_human() {
        assert_eq!(Keyboard::translate('u', 1), None);
        assert_eq!(Keyboard::translate('1', 2), None);
    }
}
