//! # Error Types
//!
//! Every way the core can refuse a request. None of these are fatal: the
//! update loop turns them into a notice and carries on.
//!
//! ```text
//! ValidationError   raw form text rejected before it reaches the store
//! InventoryError    name lookup against the store came back empty
//! RouteError        a textual route (e.g. `--start`) didn't parse
//! ```

use std::fmt;
use thiserror::Error;

/// The four registration form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Price,
    Quantity,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Category, Field::Price, Field::Quantity];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Product name",
            Field::Category => "Category",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
            Field::Quantity => "quantity",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    InvalidNumber,
}

/// Rejection of registration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field was empty or whitespace only.
    #[error("All fields are required ({field} is empty)")]
    MissingField { field: Field },

    /// Price or quantity didn't parse, or parsed outside its range
    /// (`price >= 0`, `quantity > 0`).
    #[error("Price must be >= 0 and quantity > 0 ({field} is invalid)")]
    InvalidNumber { field: Field },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingField { .. } => ValidationErrorKind::MissingField,
            ValidationError::InvalidNumber { .. } => ValidationErrorKind::InvalidNumber,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField { field } | ValidationError::InvalidNumber { field } => {
                *field
            }
        }
    }
}

/// Store lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),
}

/// Route parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0:?}")]
    Unknown(String),

    #[error("route {0:?} needs a product name")]
    MissingName(String),
}
