//! Cart panel state: line items, totals, quantity edits, guarded removal and
//! the feed loader, independent of any UI toolkit.

pub mod checkout;
pub mod config;
mod controller;
pub mod currency;
pub mod error;
pub mod loader;
pub mod quantity;
pub mod removal;
pub mod store;
pub mod totals;
pub mod view;

pub use config::{finalize_settings, load_layered_settings, CartSettings};
pub use controller::{CartController, LoadState, Notice};
pub use error::{ConfigError, LoadError, QuantityError};
pub use loader::{CartFeedSource, HttpFeedSource};
pub use store::{CartStore, LineItem};
pub use totals::{compute_totals, Totals};
pub use view::{CartView, RowView};
