use std::rc::Rc;

use clap::Subcommand;

use altera_core::clock::SystemClock;
use altera_core::storage::{Config, SessionDb};
use altera_core::timer::TimerRegistry;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or restore) the timer for a candidate/question pair
    Start {
        /// Candidate identifier
        #[arg(long, short)]
        candidate: String,
        /// Zero-based question index
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
    /// Pause the timer
    Pause {
        #[arg(long, short)]
        candidate: String,
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
    /// Resume a paused timer
    Resume {
        #[arg(long, short)]
        candidate: String,
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
    /// Stop the timer and discard its session
    Stop {
        #[arg(long, short)]
        candidate: String,
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
    /// Print current timer state as JSON
    Status {
        #[arg(long, short)]
        candidate: String,
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
    /// Print elapsed time as M:SS
    Time {
        #[arg(long, short)]
        candidate: String,
        #[arg(long, short, default_value = "0")]
        question: u32,
    },
}

fn open_registry() -> Result<TimerRegistry, Box<dyn std::error::Error>> {
    let db = SessionDb::open()?;
    let config = Config::load_or_default();
    Ok(TimerRegistry::with_autosave_interval(
        Rc::new(SystemClock),
        Rc::new(db),
        config.timer.autosave_interval_ms,
    ))
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = open_registry()?;

    match action {
        TimerAction::Start {
            candidate,
            question,
        } => {
            let timer = registry.get_timer(&candidate, question);
            let event = timer.started_event();
            timer.save_state();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Pause {
            candidate,
            question,
        } => {
            let timer = registry.get_timer(&candidate, question);
            if let Some(event) = timer.pause() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
            timer.save_state();
        }
        TimerAction::Resume {
            candidate,
            question,
        } => {
            let timer = registry.get_timer(&candidate, question);
            if let Some(event) = timer.resume() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
            timer.save_state();
        }
        TimerAction::Stop {
            candidate,
            question,
        } => {
            let event = registry.get_timer(&candidate, question).stop();
            registry.cleanup_timer(&candidate, question);
            match event {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{{}}"),
            }
        }
        TimerAction::Status {
            candidate,
            question,
        } => {
            let timer = registry.get_timer(&candidate, question);
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
        TimerAction::Time {
            candidate,
            question,
        } => {
            let timer = registry.get_timer(&candidate, question);
            println!("{}", timer.formatted_time());
            timer.save_state();
        }
    }

    Ok(())
}
