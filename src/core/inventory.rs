//! # Inventory Store
//!
//! Ordered, append-only collection of products plus the aggregates the
//! statistics screen shows.
//!
//! ```text
//! InventoryStore
//! ├── entries: Vec<Entry>   // insertion order, never reordered
//! ├── next_id: u64          // next ProductId to hand out
//! └── revision: u64         // bumped on every add
//! ```
//!
//! The store does no validation. Callers gate input through
//! `RegistrationInput::validate` first.
//!
//! Names are not unique. `find_by_name` returns the first match, so a second
//! "Widget" is stored but can't be reached by name. Use `ProductId` when the
//! exact record matters.

use crate::core::error::InventoryError;
use crate::core::product::{Product, ProductId};

#[derive(Debug, Clone)]
struct Entry {
    id: ProductId,
    product: Product,
}

#[derive(Debug, Clone)]
pub struct InventoryStore {
    entries: Vec<Entry>,
    next_id: u64,
    revision: u64,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Append a product and return the id it was stored under.
    pub fn add(&mut self, product: Product) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        self.revision += 1;
        self.entries.push(Entry { id, product });
        id
    }

    /// Sum of `price * quantity`, accumulated in insertion order.
    pub fn total_value(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, entry| acc + entry.product.stock_value())
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.product.quantity()))
            .sum()
    }

    /// First product with exactly this name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.entries
            .iter()
            .find(|entry| entry.product.name() == name)
            .map(|entry| &entry.product)
    }

    /// Like `find_by_name`, but absence is an error.
    pub fn lookup(&self, name: &str) -> Result<&Product, InventoryError> {
        self.find_by_name(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.product)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.entries.iter().map(|entry| (entry.id, &entry.product))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Changes whenever the contents change. Views compare it to decide
    /// whether to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
