//! Hamlet's Descent level dump
//!
//! Builds Act 1 from settings and prints the layout as JSON.
//! Usage: `hamlets-descent [SETTINGS.json]`

use hamlets_descent::level::LevelState;
use hamlets_descent::{HAMLET_QUOTES, Settings};

fn run() -> hamlets_descent::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let state = LevelState::act_one(settings.seed(), settings.screen_height, HAMLET_QUOTES)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Hamlet's Descent level setup starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
