//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::product::Product;
use crate::core::state::App;

/// Creates a test App: empty store, on Registration, `$` currency.
pub fn test_app() -> App {
    App::new()
}

pub fn widget() -> Product {
    Product::new("Widget", "Tools", 9.99, 3)
}

pub fn gadget() -> Product {
    Product::new("Gadget", "Electronics", 25.0, 2)
}

/// Draws with `draw` into an in-memory terminal and returns the buffer text,
/// one string per row.
pub fn render_lines<F>(width: u16, height: u16, draw: F) -> Vec<String>
where
    F: FnOnce(&mut ratatui::Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
