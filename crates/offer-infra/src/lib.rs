//! Infrastructure layer - file-backed data providers
//!
//! Loaders for the options catalog (JSON), the price book (JSON or CSV),
//! and order documents (TOML). Each loader produces the in-memory provider
//! types from `offer-domain`.

pub mod catalog_loader;
pub mod order_file;
pub mod price_book_loader;

pub use catalog_loader::load_catalog_file;
pub use order_file::{load_order_file, parse_order_str};
pub use price_book_loader::{load_price_book_csv, load_price_book_json};
