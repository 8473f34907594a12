//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop redraws only when something changed: an input event arrived, the
//! store revision moved, or the notice expired. Otherwise it sleeps in
//! `poll` for up to 250ms, short enough for the notice timer to feel exact.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ListEvent, ProductListState, RegistrationFormState};
use crate::tui::event::{TuiEvent, drain_pending, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: RegistrationFormState,
    pub list: ProductListState,
    /// When the current notice was first drawn.
    pub notice_since: Option<Instant>,
    /// Store revision at the last draw.
    pub seen_revision: u64,
    /// `App::notice_serial` the timer was last started for.
    pub seen_notice_serial: u64,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: RegistrationFormState::new(),
            list: ProductListState::new(),
            notice_since: None,
            seen_revision: 0,
            seen_notice_serial: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Route one terminal event to the core. Global keys first, then whatever
/// the active screen does with it.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::ShowStatistics => return update(app, Action::ViewStatistics),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    match app.screen() {
        Screen::Registration => match tui.form.handle_event(event) {
            Some(FormEvent::Submit(input)) => {
                let effect = update(app, Action::RegisterProduct(input));
                if let Effect::Registered(_) = effect {
                    tui.form.clear();
                    tui.list.select_last(app.store.len());
                }
                effect
            }
            Some(FormEvent::Cancel) => update(app, Action::GoBack),
            None => Effect::None,
        },
        Screen::Listing => match tui.list.handle_event(event, &app.store) {
            Some(ListEvent::OpenDetails(name)) => update(app, Action::ViewDetails(name)),
            Some(ListEvent::Back) => update(app, Action::GoBack),
            None => Effect::None,
        },
        Screen::Detail(_) | Screen::Statistics => match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                update(app, Action::GoBack)
            }
            _ => Effect::None,
        },
    }
}

/// Clears the notice once it has been visible for `duration`. Returns `true`
/// if it was cleared.
fn expire_notice(app: &mut App, tui: &mut TuiState, duration: Duration, now: Instant) -> bool {
    if app.notice.is_none() {
        tui.notice_since = None;
        return false;
    }
    let since = *tui.notice_since.get_or_insert(now);
    if now.duration_since(since) >= duration {
        update(app, Action::DismissNotice);
        tui.notice_since = None;
        return true;
    }
    false
}

/// Restarts the notice timer when a notice was raised since the last call,
/// even if its text matches the one already showing.
fn track_notice(app: &App, tui: &mut TuiState) {
    if app.notice_serial != tui.seen_notice_serial {
        tui.seen_notice_serial = app.notice_serial;
        tui.notice_since = None;
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    let notice_duration = Duration::from_millis(config.notice_duration_ms);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if expire_notice(&mut app, &mut tui, notice_duration, Instant::now()) {
            needs_redraw = true;
        }
        if app.store.revision() != tui.seen_revision {
            tui.seen_revision = app.store.revision();
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let events = match poll_event_timeout(IDLE_POLL)
            .and_then(|first| drain_pending(first, poll_event_immediate))
        {
            Ok(events) => events,
            Err(e) => break Err(e),
        };

        let mut should_quit = false;
        for event in events {
            needs_redraw = true;
            if handle_event(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
                break;
            }
            track_notice(&app, &mut tui);
        }

        if should_quit {
            break Ok(());
        }
    };

    info!(
        "Stockroom exiting: {} products, total value {}",
        app.store.len(),
        app.money(app.store.total_value())
    );
    ratatui::restore();
    result
}
