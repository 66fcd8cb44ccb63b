//! Application state and logic.

use super::input::{self, Action, Focus};
use crate::session::{GameEvent, Session};
use rand::Rng;
use tracing::{debug, warn};
use xo_core::{GameView, Position};

/// Main application state: the session plus view-only UI state.
pub struct App<R> {
    session: Session<R>,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl<R: Rng> App<R> {
    /// Creates an application around a session.
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// The session.
    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Render input for the current frame.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Feeds one event to the session.
    pub fn dispatch(&mut self, event: GameEvent) {
        match self.session.handle(event) {
            Ok(true) => self.selected = self.session.game().step(),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Event rejected"),
        }
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: crossterm::event::KeyCode) {
        let Some(action) = input::map_key(key) else {
            return;
        };
        debug!(?action, focus = ?self.focus, "Key action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.dispatch(GameEvent::Restart),
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::Play(pos) => {
                self.cursor = pos;
                self.dispatch(GameEvent::CellClicked(pos.to_index()));
            }
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::Moves => {
                    let len = self.session.game().history().len();
                    self.selected = input::move_selection(self.selected, len, key);
                }
            },
            Action::Activate => match self.focus {
                Focus::Board => self.dispatch(GameEvent::CellClicked(self.cursor.to_index())),
                Focus::Moves => self.dispatch(GameEvent::JumpTo(self.selected)),
            },
        }
    }
}
