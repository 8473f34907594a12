//! # Statistics Component
//!
//! Inventory-wide aggregates, recomputed from the store on every draw.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::inventory::InventoryStore;
use crate::core::product::format_money;
use crate::tui::component::Component;

pub struct StatisticsView<'a> {
    pub store: &'a InventoryStore,
    pub currency_symbol: &'a str,
}

impl<'a> StatisticsView<'a> {
    pub fn new(store: &'a InventoryStore, currency_symbol: &'a str) -> Self {
        Self {
            store,
            currency_symbol,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![
                Span::styled("Total stock value: ", label),
                Span::styled(format_money(self.currency_symbol, self.store.total_value()), value),
            ]),
            Line::from(vec![
                Span::styled("Total units in stock: ", label),
                Span::styled(self.store.total_quantity().to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Products registered: ", label),
                Span::styled(self.store.len().to_string(), value),
            ]),
        ]
    }
}

impl Component for StatisticsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
