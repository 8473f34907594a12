//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: Top status bar with the active screen and stack depth
//! - `ProductDetail`: One product, or an empty panel if it didn't resolve
//! - `StatisticsView`: Store-wide totals
//! - `Notice`: Transient error message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `RegistrationForm`: Four text inputs, emits `FormEvent::Submit`
//! - `ProductList`: Selectable rows, emits `ListEvent::OpenDetails`
//!
//! ### Props-Based Data Flow
//!
//! Components receive store data as props, never by reaching into a global:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatisticsView::new(&app.store, &app.currency_symbol).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── registration_form.rs  (Registration screen)
//! ├── product_list.rs       (Listing screen)
//! ├── product_detail.rs     (Detail screen)
//! ├── statistics.rs         (Statistics screen)
//! └── notice.rs             (Toast-style message)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod notice;
pub mod product_detail;
pub mod product_list;
pub mod registration_form;
pub mod statistics;

pub use notice::Notice;
pub use product_detail::ProductDetail;
pub use product_list::{ListEvent, ProductList, ProductListState};
pub use registration_form::{FormEvent, RegistrationForm, RegistrationFormState};
pub use statistics::StatisticsView;
