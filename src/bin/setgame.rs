//! Setgame Binary
//!
//! Plays one game on the terminal: up to two humans sharing the keyboard
//! against any number of robots.
//!
//! Keys (type them, then Enter): `qwer asdf zxcv` for the first human,
//! `uiop jkl; m,./` for the second.

use clap::Parser;
use setgame::dealer::TimerPolicy;
use setgame::game::Config;
use setgame::game::Game;
use setgame::ui::Journal;
use setgame::ui::Terminal;
use setgame::ui::Ui;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Players on the keyboard
    #[arg(long, default_value_t = 1)]
    humans: usize,
    /// Computer players pressing random slots
    #[arg(long, default_value_t = 1)]
    robots: usize,
    /// Features per card
    #[arg(long, default_value_t = setgame::FEATURES)]
    features: usize,
    #[arg(long, default_value_t = setgame::TABLE_SIZE)]
    table: usize,
    /// Seconds per round before a reshuffle
    #[arg(long, default_value_t = 60)]
    timeout: u64,
    /// Seconds left at which the countdown turns red
    #[arg(long, default_value_t = 5)]
    warning: u64,
    /// Milliseconds frozen after a point
    #[arg(long, default_value_t = 1000)]
    point_freeze: u64,
    /// Milliseconds frozen after a penalty
    #[arg(long, default_value_t = 5000)]
    penalty_freeze: u64,
    /// Milliseconds between robot presses
    #[arg(long, default_value_t = 100)]
    robot_pace: u64,
    /// Milliseconds between cards while dealing
    #[arg(long, default_value_t = 0)]
    deal_delay: u64,
    /// Seconds to linger after announcing the winners
    #[arg(long, default_value_t = 0)]
    end_pause: u64,
    /// Keep the full round time after a point instead of restarting it
    #[arg(long)]
    fixed_timer: bool,
    /// Log the sets on the table after every deal
    #[arg(long)]
    hints: bool,
    #[arg(long)]
    seed: Option<u64>,
    /// Emit events as JSON lines instead of colored text
    #[arg(long)]
    journal: bool,
    /// Show token moves and claim traffic on the terminal too
    #[arg(long, short)]
    verbose: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            humans: args.humans,
            robots: args.robots,
            table_size: args.table,
            features: args.features,
            turn_timeout: Duration::from_secs(args.timeout),
            warning: Duration::from_secs(args.warning),
            point_freeze: Duration::from_millis(args.point_freeze),
            penalty_freeze: Duration::from_millis(args.penalty_freeze),
            robot_pace: Duration::from_millis(args.robot_pace),
            deal_delay: Duration::from_millis(args.deal_delay),
            end_pause: Duration::from_secs(args.end_pause),
            hints: args.hints,
            seed: args.seed,
            timer: match args.fixed_timer {
                true => TimerPolicy::Fixed,
                false => TimerPolicy::ResetOnPoint,
            },
            ..Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setgame::log(args.verbose)?;
    let ui: Arc<dyn Ui> = match args.journal {
        true => Arc::new(Journal),
        false => Arc::new(Terminal::default()),
    };
    let game = Game::new(Config::from(&args)).with_ui(ui);
    setgame::interrupt(game.handle());
    let winners = game.run().await?;
    println!("winners: {:?}", winners);
    Ok(())
}
