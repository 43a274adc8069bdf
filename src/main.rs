//! Meteor Mayhem runner (default binary).
//!
//! Parses the command line, takes over the terminal and runs the game loop
//! until the rocket is destroyed or the player quits.

use anyhow::Result;
use clap::Parser;
use log::info;

use meteor_mayhem::cli::Args;
use meteor_mayhem::core::SystemClock;
use meteor_mayhem::engine::{Outcome, Session};
use meteor_mayhem::input::CrosstermInput;
use meteor_mayhem::logging;
use meteor_mayhem::term::{GameView, TerminalSurface};

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings();

    if let Some(path) = logging::init()? {
        info!("logging to {}", path.display());
    }

    let mut surface = TerminalSurface::new();
    surface.enter()?;

    let result = run(&mut surface, settings.view());

    // Always try to restore terminal state.
    let _ = surface.exit();
    let outcome = result?;

    println!("\n ~ Gameover! ~\n\n  * Player Score: {}\n", outcome.score);
    Ok(())
}

fn run(surface: &mut TerminalSurface, view: GameView) -> Result<Outcome> {
    let seed = rand::random::<u64>();
    let mut session = Session::new(surface, CrosstermInput::new(), SystemClock::new(), view, seed)?;
    session.run()
}
