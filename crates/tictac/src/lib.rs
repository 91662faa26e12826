//! Terminal front end for time-travel tic-tac-toe.
//!
//! The [`App`] owns a [`tictac_core::GameController`] and mirrors its events
//! into view state: board selection, history highlight, the end-of-game
//! dialog and a confetti burst. [`ui::draw`] renders that state with
//! ratatui, and [`run`] drives both from crossterm input.

#![warn(missing_docs)]

mod app;
pub mod cli;
pub mod config;
mod confetti;
pub mod input;
pub mod ui;

pub use app::{App, AppAction, DialogButton};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use confetti::{Confetti, Particle};

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Runs the event loop until the user quits.
///
/// Each pass draws the current state, handles every pending terminal event
/// and advances animations by one tick.
#[instrument(skip_all)]
pub async fn run<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let tick = Duration::from_millis(*app.config().tick_ms());
    let size = terminal.size()?;
    app.set_viewport(size.width, size.height);
    info!(width = size.width, height = size.height, "Starting game loop");

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                // Windows reports releases too.
                Event::Key(key) if key.kind == KeyEventKind::Release => {}
                Event::Key(key) => {
                    if app.handle_key(key)? == AppAction::Quit {
                        info!("Leaving game loop");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    app.set_viewport(width, height);
                }
                _ => {}
            }
        }

        app.tick();
        sleep(tick).await;
    }
}
