//! # Product Detail Component
//!
//! Every field of one product. Receives `Option<&Product>`: when the name the
//! Detail screen carries doesn't resolve, the panel renders empty apart from
//! a hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::product::{Product, format_money};
use crate::tui::component::Component;

pub struct ProductDetail<'a> {
    pub product: Option<&'a Product>,
    pub currency_symbol: &'a str,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: Option<&'a Product>, currency_symbol: &'a str) -> Self {
        Self {
            product,
            currency_symbol,
        }
    }
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<20}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

impl Component for ProductDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::uniform(1));

        let Some(product) = self.product else {
            let hint = Paragraph::new("Product not found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                product.name().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            row("Name:", product.name().to_string()),
            row("Category:", product.category().to_string()),
            row("Price:", format_money(self.currency_symbol, product.price())),
            row("Quantity in stock:", product.quantity().to_string()),
            row("Stock value:", format_money(self.currency_symbol, product.stock_value())),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_lines, widget};

    #[test]
    fn test_render_all_fields() {
        let product = widget();
        let lines = render_lines(60, 12, |f| {
            let area = f.area();
            ProductDetail::new(Some(&product), "R$").render(f, area);
        });
        let text = lines.join("\n");
        assert!(text.contains("Name:"));
        assert!(text.contains("Widget"));
        assert!(text.contains("Tools"));
        assert!(text.contains("R$ 9.99"));
        assert!(text.contains("Quantity in stock:"));
        assert!(text.contains("R$ 29.97"));
    }

    #[test]
    fn test_missing_product_renders_hint_only() {
        let lines = render_lines(60, 12, |f| {
            let area = f.area();
            ProductDetail::new(None, "$").render(f, area);
        });
        let text = lines.join("\n");
        assert!(text.contains("Product not found."));
        assert!(!text.contains("Category:"));
    }
}
