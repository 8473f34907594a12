//! # Notice Component
//!
//! Short-lived message drawn over the bottom of the main area, the way a
//! toast would be. The run loop decides when it expires; this only draws.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct Notice<'a> {
    pub text: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Rect for the notice: centered horizontally, sitting on the bottom edge of
/// `outer`, sized to the text.
pub fn notice_rect(text: &str, outer: Rect) -> Rect {
    let columns = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let width = columns.saturating_add(4).min(outer.width);
    let height = 3.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + outer.height - height,
        width,
        height,
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = notice_rect(self.text, area);
        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(self.text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(paragraph, rect);
    }
}
