//! UI layer: the cart window.

pub mod app;

pub use app::CartApp;
