//! # Registration Form Component
//!
//! Four single-line text inputs (name, category, price, quantity). The text
//! is kept raw; parsing and range checks belong to the core on submit.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RegistrationFormState` lives in `TuiState`
//! - `RegistrationForm` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::error::Field;
use crate::core::validation::RegistrationInput;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Height of one labelled input: border + text + border.
const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(RegistrationInput),
    Cancel,
}

#[derive(Debug, Default)]
pub struct RegistrationFormState {
    pub input: RegistrationInput,
    focus: usize,
}

impl RegistrationFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    /// Empty every field and put focus back on the name.
    pub fn clear(&mut self) {
        self.input = RegistrationInput::default();
        self.focus = 0;
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    fn push_text(&mut self, text: &str) {
        let field = self.focused();
        // Single-line inputs: pasted newlines and tabs become spaces.
        let cleaned = text.replace(['\n', '\r', '\t'], " ");
        self.input.field_mut(field).push_str(&cleaned);
    }
}

impl EventHandler for RegistrationFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let field = self.focused();
                self.input.field_mut(field).push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.push_text(text);
                None
            }
            TuiEvent::Backspace => {
                let field = self.focused();
                self.input.field_mut(field).pop();
                None
            }
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus_next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus_prev();
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit(self.input.clone())),
            TuiEvent::Escape => Some(FormEvent::Cancel),
            _ => None,
        }
    }
}

/// Transient render wrapper for the form.
pub struct RegistrationForm<'a> {
    state: &'a RegistrationFormState,
}

impl<'a> RegistrationForm<'a> {
    pub fn new(state: &'a RegistrationFormState) -> Self {
        Self { state }
    }
}

impl Component for RegistrationForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(FIELD_HEIGHT); 4]).split(area);
        let focused = self.state.focused();

        for (field, row) in Field::ALL.into_iter().zip(rows.iter()) {
            let is_focused = field == focused;
            let border_style = if is_focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let text = self.state.input.field(field);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", field.label()));
            frame.render_widget(Paragraph::new(text).block(block), *row);

            if is_focused {
                let max_x = row.x + row.width.saturating_sub(2);
                let columns = u16::try_from(text.width()).unwrap_or(u16::MAX);
                let x = (row.x + 1).saturating_add(columns).min(max_x);
                frame.set_cursor_position(Position::new(x, row.y + 1));
            }
        }
    }
}
