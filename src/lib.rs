//! Catalog Browser Library
//!
//! Joins users, categories and products into one catalog and narrows it
//! down by owner, name and category for display.

pub mod browse;
pub mod catalog;
pub mod config;

// Re-export commonly used types for convenience
pub use browse::{apply, BrowserState, FilterAction, FilterConfig, SortField, UserSelection};
pub use catalog::{load_catalog, Catalog, EnrichedProduct, SeedSource};
