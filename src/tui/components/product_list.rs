//! # Product List Component
//!
//! One row per stored product, in registration order:
//!
//! ```text
//!   #1  Widget (3 units)                        Tools
//!   #2  Gadget (2 units)                  Electronics
//! ```
//!
//! Up/Down move the selection, Enter opens details, Esc or `b` goes back.
//! Details are requested by name, so of two products sharing a name the
//! second row still opens the first one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::inventory::InventoryStore;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Events emitted by the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    OpenDetails(String),
    Back,
}

/// Persistent selection state for the list.
#[derive(Debug, Default)]
pub struct ProductListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Move the selection onto the newest row.
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
        self.clamp(len);
    }

    pub fn handle_event(&mut self, event: &TuiEvent, store: &InventoryStore) -> Option<ListEvent> {
        self.clamp(store.len());
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('b') => Some(ListEvent::Back),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp(store.len());
                None
            }
            TuiEvent::CursorDown => {
                self.selected += 1;
                self.clamp(store.len());
                None
            }
            TuiEvent::Submit => store
                .iter()
                .nth(self.selected)
                .map(|(_, product)| ListEvent::OpenDetails(product.name().to_string())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the list.
pub struct ProductList<'a> {
    state: &'a mut ProductListState,
    store: &'a InventoryStore,
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a mut ProductListState, store: &'a InventoryStore) -> Self {
        Self { state, store }
    }
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.store.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} products ", self.store.len()))
            .padding(Padding::horizontal(1));

        if self.store.is_empty() {
            let empty = Paragraph::new("No products registered yet.\nPress Esc to go back to registration.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .store
            .iter()
            .enumerate()
            .map(|(i, (id, product))| {
                let id_tag = format!("{:<4}", id.to_string());
                let summary = format!("{} ({} units)", product.name(), product.quantity());
                let category = product.category();

                let fixed_width = id_tag.width() + 2 + category.width();
                let summary_width = inner_width.saturating_sub(fixed_width);
                let summary = truncate_str(&summary, summary_width);
                let padded = pad_to_width(&summary, summary_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let dim = if i == self.state.selected {
                    style
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(id_tag, dim),
                    Span::styled(padded, style),
                    Span::styled("  ", style),
                    Span::styled(category.to_string(), dim),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::Product;
    use crate::test_support::{gadget, render_lines, widget};

    fn store_with(products: Vec<Product>) -> InventoryStore {
        let mut store = InventoryStore::new();
        for p in products {
            store.add(p);
        }
        store
    }

    #[test]
    fn test_enter_opens_selected() {
        let store = store_with(vec![widget(), gadget()]);
        let mut state = ProductListState::new();

        state.handle_event(&TuiEvent::CursorDown, &store);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &store),
            Some(ListEvent::OpenDetails("Gadget".to_string()))
        );
    }

    #[test]
    fn test_selection_clamped() {
        let store = store_with(vec![widget(), gadget()]);
        let mut state = ProductListState::new();
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown, &store);
        }
        assert_eq!(state.selected, 1);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorUp, &store);
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_submit_on_empty_list_does_nothing() {
        let store = InventoryStore::new();
        let mut state = ProductListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &store), None);
    }

    #[test]
    fn test_back_keys() {
        let store = InventoryStore::new();
        let mut state = ProductListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape, &store), Some(ListEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('b'), &store), Some(ListEvent::Back));
    }

    #[test]
    fn test_select_last() {
        let mut state = ProductListState::new();
        state.select_last(3);
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_render_rows() {
        let store = store_with(vec![widget(), gadget()]);
        let mut state = ProductListState::new();
        let lines = render_lines(60, 6, |f| {
            let area = f.area();
            ProductList::new(&mut state, &store).render(f, area);
        });
        assert!(lines[0].contains("2 products"));
        assert!(lines[1].contains("#1"));
        assert!(lines[1].contains("Widget (3 units)"));
        assert!(lines[1].contains("Tools"));
        assert!(lines[2].contains("Gadget (2 units)"));
        assert!(lines[2].contains("Electronics"));
    }

    #[test]
    fn test_render_empty() {
        let store = InventoryStore::new();
        let mut state = ProductListState::new();
        let lines = render_lines(60, 6, |f| {
            let area = f.area();
            ProductList::new(&mut state, &store).render(f, area);
        });
        assert!(lines.join("\n").contains("No products registered yet."));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Widget", 10), "Widget");
        assert_eq!(truncate_str("Industrial Widget", 10), "Industr...");
        assert_eq!(truncate_str("Widget", 2), "..");
        // Wide characters count as two columns.
        assert_eq!(truncate_str("工具箱工具箱", 7), "工具...");
    }
}
