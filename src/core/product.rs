//! # Products
//!
//! A `Product` is a plain value: once built it never changes. Identity lives
//! in the store (see [`ProductId`]), not in the record.

use std::fmt;

/// Sequence number handed out by `InventoryStore::add`, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One stocked item.
///
/// Construct through `RegistrationInput::validate` in normal use; `new` does
/// no checking of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of this line of stock: `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Format an amount with a currency symbol and two decimals, e.g. `$ 29.97`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    if symbol.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{symbol} {amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_value() {
        let p = Product::new("Bolt", "Hardware", 0.25, 8);
        assert_eq!(p.stock_value(), 2.0);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(7).to_string(), "#7");
        assert_eq!(ProductId::new(7).value(), 7);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("R$", 29.97), "R$ 29.97");
        assert_eq!(format_money("$", 0.0), "$ 0.00");
        assert_eq!(format_money("", 3.5), "3.50");
    }
}
