use super::arena::Arena;
use super::config::Config;
use super::handle::Handle;
use crate::Seat;
use crate::cards::Classic;
use crate::cards::Rules;
use crate::dealer::Dealer;
use crate::players::Actor;
use crate::players::Freeze;
use crate::players::Keyboard;
use crate::players::Robot;
use crate::players::Source;
use crate::players::feed;
use crate::table::Table;
use crate::ui::Silent;
use crate::ui::Ui;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

/// Where one seat's presses come from.
pub enum Input {
    /// Shared stdin, one key layout per human.
    Keyboard,
    Feed(Box<dyn Source>),
}

/// One game, from the first deal to the winners.
pub struct Game {
    config: Config,
    rules: Arc<dyn Rules>,
    ui: Arc<dyn Ui>,
    inputs: Vec<Input>,
    handle: Handle,
}

impl Game {
    /// Humans on the keyboard in the lowest seats, robots after them, the
    /// classic rules, and no display.
    pub fn new(config: Config) -> Self {
        let inputs = (0..config.humans)
            .map(|_| Input::Keyboard)
            .chain((0..config.robots).map(|i| {
                let seed = config.seed.map(|s| s.wrapping_add(1 + i as u64));
                let robot = Robot::new(config.table_size, config.robot_pace, seed);
                Input::Feed(Box::new(robot) as Box<dyn Source>)
            }))
            .collect();
        Self {
            rules: Arc::new(Classic::new(config.features)),
            ui: Arc::new(Silent),
            handle: Handle::default(),
            inputs,
            config,
        }
    }
    pub fn with_rules(mut self, rules: Arc<dyn Rules>) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_ui(mut self, ui: Arc<dyn Ui>) -> Self {
        self.ui = ui;
        self
    }
    /// Replaces every seat's input; seat `i` is fed by `inputs[i]`.
    pub fn with_inputs(mut self, inputs: Vec<Input>) -> Self {
        let humans = inputs.iter().filter(|i| matches!(i, Input::Keyboard)).count();
        self.config.humans = humans;
        self.config.robots = inputs.len() - humans;
        self.inputs = inputs;
        self
    }
    /// Switch for ending the game from outside.
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }

    /// Plays until no set is left or the handle is flipped. Returns every
    /// seat sharing the top score.
    pub async fn run(self) -> anyhow::Result<Vec<Seat>> {
        let Self {
            config,
            rules,
            ui,
            inputs,
            handle,
        } = self;
        config.validate()?;
        log::info!(
            "[game] {} humans, {} robots, {} slots, {} cards",
            config.humans,
            config.robots,
            config.table_size,
            config.deck_size()
        );
        let table = Table::new(config.table_size, config.deck_size());
        let arena = Arena::new(table, config.seats(), ui);
        let freeze = Freeze {
            point: config.point_freeze,
            penalty: config.penalty_freeze,
        };
        let mut rulings = Vec::with_capacity(config.seats());
        let mut actors = Vec::with_capacity(config.seats());
        let mut feeders = Vec::new();
        let mut keys = Vec::new();
        for (seat, input) in inputs.into_iter().enumerate() {
            let (tx, rx) = unbounded_channel();
            let (actor, intake) = Actor::new(seat, arena.clone(), freeze, rx, handle.subscribe());
            rulings.push(tx);
            actors.push(actor.spawn());
            match input {
                Input::Keyboard => keys.push(intake),
                Input::Feed(source) => feeders.push(feed(source, intake, handle.subscribe())),
            }
        }
        if !keys.is_empty() {
            Keyboard::new(keys).spawn();
        }
        let dealer = Dealer::new(arena, config, rules, rulings, handle);
        let winners = tokio::spawn(dealer.run(actors)).await?;
        for feeder in feeders {
            if let Err(e) = feeder.await {
                log::warn!("[game] source failed: {}", e);
            }
        }
        Ok(winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::players::Script;
    use crate::ui::Event;
    use crate::ui::Recorder;
    use std::time::Duration;

    /// No triple is ever a set.
    struct Barren;
    impl Rules for Barren {
        fn is_set(&self, _: &[Card; 3]) -> bool {
            false
        }
        fn find_sets(&self, _: &[Card], _: usize) -> Vec<[Card; 3]> {
            vec![]
        }
    }

    /// Any three distinct cards are a set.
    struct Lenient;
    impl Rules for Lenient {
        fn is_set(&self, [a, b, c]: &[Card; 3]) -> bool {
            a != b && b != c && a != c
        }
        fn find_sets(&self, pool: &[Card], limit: usize) -> Vec<[Card; 3]> {
            pool.chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .take(limit)
                .collect()
        }
    }

    fn quick() -> Config {
        Config {
            poll: Duration::from_millis(5),
            point_freeze: Duration::ZERO,
            penalty_freeze: Duration::ZERO,
            robot_pace: Duration::from_millis(1),
            seed: Some(11),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn no_sets_ends_in_a_tie() {
        let recorder = Arc::new(Recorder::default());
        let winners = Game::new(quick())
            .with_rules(Arc::new(Barren))
            .with_ui(recorder.clone())
            .run();
        let winners = tokio::time::timeout(Duration::from_secs(2), winners)
            .await
            .expect("game ends on its own")
            .unwrap();
        assert_eq!(winners, vec![0, 1]);
        assert_eq!(
            recorder.events().last(),
            Some(&Event::Winners { seats: vec![0, 1] })
        );
    }

    #[tokio::test]
    async fn terminate_stops_a_running_game() {
        let game = Game::new(quick());
        let handle = game.handle();
        let task = tokio::spawn(game.run());
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.terminate();
        let winners = tokio::time::timeout(Duration::from_secs(2), task)
            .await
            .expect("game stops promptly")
            .unwrap()
            .unwrap();
        assert!(!winners.is_empty());
    }

    #[tokio::test]
    async fn scripted_claim_scores() {
        let recorder = Arc::new(Recorder::default());
        let game = Game::new(quick())
            .with_rules(Arc::new(Lenient))
            .with_ui(recorder.clone())
            .with_inputs(vec![
                Input::Feed(Box::new(Script::new([0, 1, 2], Duration::from_millis(20)))),
                Input::Feed(Box::new(Script::new(Vec::new(), Duration::ZERO))),
            ]);
        let handle = game.handle();
        let task = tokio::spawn(game.run());
        tokio::time::sleep(Duration::from_millis(300)).await;
        handle.terminate();
        let winners = task.await.unwrap().unwrap();
        assert_eq!(winners, vec![0]);
        assert!(recorder.events().contains(&Event::Score { seat: 0, score: 1 }));
    }

    #[tokio::test]
    async fn invalid_config_is_refused() {
        let config = Config {
            robots: 0,
            ..quick()
        };
        assert!(Game::new(config).run().await.is_err());
    }
}
