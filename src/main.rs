mod app;
mod command;
mod config;
mod consts;
mod game;
mod grid;
mod logging;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load_default().context("Failed to load configuration")?;
    match logging::init(&config.log) {
        Ok(Some(path)) => log::debug!("Logging to {}", path.display()),
        Ok(None) => (),
        Err(e) => eprintln!(
            "gridsnake: continuing without logging: {:?}",
            anyhow::Error::new(e)
        ),
    }
    log::info!(
        "Starting on a {}x{} board with a tick period of {:?}",
        config.game.bounds().width(),
        config.game.bounds().height(),
        config.game.tick_period()
    );
    let terminal = ratatui::init();
    let r = App::new(config.game).run(terminal);
    ratatui::restore();
    r?;
    log::info!("Exiting");
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
