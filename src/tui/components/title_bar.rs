//! # TitleBar Component
//!
//! Top status bar: app name, the active screen, how deep the back stack is,
//! and how many products are stored.
//!
//! ## Conditional Formatting
//!
//! 1. **Nested**: `"Stockroom | Product Details (depth 3) | 2 products"`
//! 2. **Root**: `"Stockroom | Register Product | 2 products"`
//!
//! Purely presentational: every field is a prop, no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the active screen (e.g., "Products")
    pub screen_title: String,
    /// Navigation stack depth; 1 at the root
    pub depth: usize,
    /// Number of stored products
    pub product_count: usize,
}

impl TitleBar {
    pub fn new(screen_title: impl Into<String>, depth: usize, product_count: usize) -> Self {
        Self {
            screen_title: screen_title.into(),
            depth,
            product_count,
        }
    }

    fn text(&self) -> String {
        let noun = if self.product_count == 1 { "product" } else { "products" };
        if self.depth > 1 {
            format!(
                " | {} (depth {}) | {} {}",
                self.screen_title, self.depth, self.product_count, noun
            )
        } else {
            format!(" | {} | {} {}", self.screen_title, self.product_count, noun)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Stockroom",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.text()),
        ]);
        frame.render_widget(line, area);
    }
}
