//! # Actions
//!
//! Everything that can happen in Stockroom becomes an `Action`.
//! User fills the form and presses Enter? That's `Action::RegisterProduct`.
//! Picks a row on the list? That's `Action::ViewDetails(name)`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` telling the adapter whether anything outside the core
//! needs to happen. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::navigation::Screen;
use crate::core::product::ProductId;
use crate::core::state::App;
use crate::core::validation::RegistrationInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Validate the form text, store the product, show the list.
    RegisterProduct(RegistrationInput),
    /// Open the detail view for the first product with this name.
    ViewDetails(String),
    ViewStatistics,
    /// Pop one screen. At the root, asks the host to exit.
    GoBack,
    DismissNotice,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// A product was stored; the form that produced it can be cleared.
    Registered(ProductId),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::RegisterProduct(input) => match input.validate() {
            Ok(product) => {
                info!(
                    "Registered {:?} ({}, {} x {})",
                    product.name(),
                    product.category(),
                    product.quantity(),
                    product.price()
                );
                let id = app.store.add(product);
                app.notice = None;
                navigate(app, Screen::Listing);
                Effect::Registered(id)
            }
            Err(e) => {
                debug!("Registration rejected: {e}");
                app.raise_notice(e.to_string());
                Effect::None
            }
        },
        Action::ViewDetails(name) => {
            let found = app.store.lookup(&name).map(|_| ());
            match found {
                Ok(()) => navigate(app, Screen::Detail(name)),
                Err(e) => {
                    debug!("Detail lookup failed: {e}");
                    app.raise_notice(e.to_string());
                }
            }
            Effect::None
        }
        Action::ViewStatistics => {
            navigate(app, Screen::Statistics);
            Effect::None
        }
        Action::GoBack => {
            if app.navigator.go_back() {
                info!("Back to {}", app.screen());
                Effect::None
            } else {
                info!("Back pressed at root, exiting");
                Effect::Quit
            }
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigate(app: &mut App, screen: Screen) {
    if app.navigator.navigate(screen) {
        info!("Navigated to {} (depth {})", app.screen(), app.navigator.depth());
    }
}
