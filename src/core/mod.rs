//! # Core Application Logic
//!
//! This module contains Stockroom's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • InventoryStore       │
//!                    │  • Navigator (screens)  │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴─────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`inventory`]: The product store and its aggregates
//! - [`navigation`]: Screens, routes, and the back stack
//! - [`validation`]: Raw form text → `Product`
//! - [`config`]: Layered settings (the one place that touches the filesystem)

pub mod action;
pub mod config;
pub mod error;
pub mod inventory;
pub mod navigation;
pub mod product;
pub mod state;
pub mod validation;

pub use action::{Action, Effect, update};
pub use inventory::InventoryStore;
pub use navigation::{Navigator, Screen};
pub use product::{Product, ProductId};
pub use state::App;
pub use validation::RegistrationInput;
