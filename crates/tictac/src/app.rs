//! Application state and logic.

use crossterm::event::KeyEvent;
use tictac_core::{Dialog, GameController, GameEvent, Outcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::config::TuiConfig;
use crate::confetti::Confetti;
use crate::input::{self, Command, Focus};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Buttons of the end-of-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    /// Close the dialog, keep the game.
    #[default]
    Close,
    /// Restart the game.
    StartAgain,
}

impl DialogButton {
    /// The other button.
    pub fn toggle(self) -> Self {
        match self {
            DialogButton::Close => DialogButton::StartAgain,
            DialogButton::StartAgain => DialogButton::Close,
        }
    }
}

/// Main application state.
///
/// The app holds the [`GameController`] and learns about its changes
/// through a subscription feeding an unbounded channel. Each command drains
/// the channel before returning, so the view is current by the next draw.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    events: mpsc::UnboundedReceiver<GameEvent>,
    config: TuiConfig,
    selected: Position,
    focus: Focus,
    history_selected: usize,
    dialog_button: DialogButton,
    confetti: Option<Confetti>,
    viewport: (u16, u16),
    last_outcome: Option<Outcome>,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        let mut controller = GameController::with_policy(*config.start_entry());
        controller.subscribe(move |event: &GameEvent| {
            if event_tx.send(event.clone()).is_err() {
                debug!(?event, "Event receiver dropped");
            }
        });

        Self {
            controller,
            events,
            config,
            selected: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            dialog_button: DialogButton::Close,
            confetti: None,
            viewport: (80, 24),
            last_outcome: None,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Active configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Cell highlighted on the board.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Panel that receives navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    /// Highlighted dialog button.
    pub fn dialog_button(&self) -> DialogButton {
        self.dialog_button
    }

    /// Running confetti, if any.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    /// Outcome of the most recent finished game since the last reset.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Records the terminal size, used to place confetti.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        if let Some(confetti) = &mut self.confetti {
            confetti.resize(width, height);
        }
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Fails only when the controller rejects a history jump, which the
    /// rendered list never offers.
    #[instrument(skip(self), fields(key = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<AppAction> {
        let dialog_open = self.controller.dialog().is_open();
        match input::command_for(key, dialog_open, self.focus) {
            Some(command) => self.apply(command),
            None => Ok(AppAction::Continue),
        }
    }

    /// Executes a command against the game.
    ///
    /// # Errors
    ///
    /// See [`App::handle_key`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> anyhow::Result<AppAction> {
        match command {
            Command::Quit => {
                info!("User quit");
                return Ok(AppAction::Quit);
            }
            Command::Restart => self.controller.restart(),
            Command::CloseDialog => {
                self.controller.dismiss_dialog();
            }
            Command::ToggleDialogButton => self.dialog_button = self.dialog_button.toggle(),
            Command::ConfirmDialog => match self.dialog_button {
                DialogButton::Close => {
                    self.controller.dismiss_dialog();
                }
                DialogButton::StartAgain => self.controller.restart(),
            },
            Command::PlaceAt(position) => {
                self.selected = position;
                self.place(position);
            }
            Command::PlaceSelected => self.place(self.selected),
            Command::MoveSelection(direction) => {
                self.selected = input::move_selection(self.selected, direction);
            }
            Command::ToggleFocus => self.focus = self.focus.toggle(),
            Command::HistoryUp => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            Command::HistoryDown => {
                let last = self.controller.history().len() - 1;
                self.history_selected = (self.history_selected + 1).min(last);
            }
            Command::JumpSelected => {
                if self.controller.history().has_entries() {
                    self.controller.jump_to(self.history_selected)?;
                } else {
                    debug!("History is empty, nothing to jump to");
                }
            }
        }
        self.drain_events();
        Ok(AppAction::Continue)
    }

    fn place(&mut self, position: Position) {
        // Rejected moves are ordinary clicks on a taken or finished board.
        if let Err(error) = self.controller.apply_move(position) {
            debug!(%error, %position, "Ignoring move");
        }
    }

    /// Applies pending controller events to the view state.
    ///
    /// Returns the number of events handled.
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            handled += 1;
            debug!(?event, "Handling game event");
            match event {
                GameEvent::GameEnded(outcome) => {
                    info!(%outcome, "Celebrating");
                    self.last_outcome = Some(outcome);
                    self.dialog_button = DialogButton::Close;
                    if *self.config.confetti() {
                        let (width, height) = self.viewport;
                        self.confetti = Some(Confetti::burst(
                            width,
                            height,
                            *self.config.confetti_particles(),
                            rand::random(),
                        ));
                    }
                }
                GameEvent::Reset => {
                    self.last_outcome = None;
                    self.confetti = None;
                    self.selected = Position::Center;
                }
                GameEvent::StateChanged { cursor, len } => {
                    self.history_selected = cursor.min(len - 1);
                }
                GameEvent::MoveMade { .. }
                | GameEvent::Jumped { .. }
                | GameEvent::DialogDismissed => {}
            }
        }
        handled
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        if let Some(confetti) = &mut self.confetti {
            confetti.tick();
            if confetti.is_done() {
                debug!("Confetti finished");
                self.confetti = None;
            }
        }
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        self.controller.status().to_string()
    }

    /// Outcome shown by the dialog, if it is open.
    pub fn dialog_outcome(&self) -> Option<Outcome> {
        match self.controller.dialog() {
            Dialog::Open(outcome) => Some(outcome),
            Dialog::Closed => None,
        }
    }
}
