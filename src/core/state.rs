//! # Application State
//!
//! One `App` per session. It owns the store and the navigator, and every
//! screen borrows from it when drawing.
//!
//! ```text
//! App
//! ├── store: InventoryStore      // products, insertion order
//! ├── navigator: Navigator       // screen stack
//! ├── notice: Option<String>     // transient message (validation, not found)
//! ├── notice_serial: u64         // bumped on every raised notice
//! └── currency_symbol: String    // prefix for money values
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::inventory::InventoryStore;
use crate::core::navigation::{Navigator, Screen};
use crate::core::product::{Product, format_money};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub struct App {
    pub store: InventoryStore,
    pub navigator: Navigator,
    pub notice: Option<String>,
    /// Counts raised notices, so repeating the same message is still news.
    pub notice_serial: u64,
    pub currency_symbol: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            store: InventoryStore::new(),
            navigator: Navigator::new(),
            notice: None,
            notice_serial: 0,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            navigator: Navigator::starting_at(config.start_screen.clone()),
            currency_symbol: config.currency_symbol.clone(),
            ..Self::new()
        }
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    /// The product the Detail screen is showing, resolved by name against the
    /// current store. `None` off the Detail screen, or when the name no
    /// longer resolves.
    pub fn detail_product(&self) -> Option<&Product> {
        match self.screen() {
            Screen::Detail(name) => self.store.find_by_name(name),
            _ => None,
        }
    }

    pub fn raise_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.notice_serial += 1;
    }

    pub fn money(&self, amount: f64) -> String {
        format_money(&self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, widget};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.store.is_empty());
        assert_eq!(app.screen(), &Screen::Registration);
        assert!(app.notice.is_none());
        assert_eq!(app.currency_symbol, "$");
    }

    #[test]
    fn test_detail_product_resolves_by_name() {
        let mut app = test_app();
        app.store.add(widget());
        app.navigator.navigate(Screen::Detail("Widget".to_string()));
        assert_eq!(app.detail_product().map(Product::name), Some("Widget"));
    }

    #[test]
    fn test_stale_detail_resolves_to_nothing() {
        let mut app = test_app();
        app.navigator.navigate(Screen::Detail("Ghost".to_string()));
        assert!(app.detail_product().is_none());
    }

    #[test]
    fn test_repeated_notice_bumps_serial() {
        let mut app = test_app();
        app.raise_notice("Product not found: Gizmo");
        app.raise_notice("Product not found: Gizmo");
        assert_eq!(app.notice.as_deref(), Some("Product not found: Gizmo"));
        assert_eq!(app.notice_serial, 2);
    }

    #[test]
    fn test_from_config_uses_start_screen_and_currency() {
        let config = ResolvedConfig {
            currency_symbol: "R$".to_string(),
            start_screen: Screen::Statistics,
            ..ResolvedConfig::default()
        };
        let app = App::from_config(&config);
        assert_eq!(app.screen(), &Screen::Statistics);
        assert_eq!(app.money(1.5), "R$ 1.50");
    }
}
