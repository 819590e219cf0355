//! Alembic Catalog - in-memory potion catalog with filtering, paging and detail views.
//!
//! The pipeline is linear: a fetched `Vec<Item>` is narrowed by
//! [`FilterCriteria`], sliced into pages of [`PAGE_SIZE`], and a selected row is
//! shown through [`DetailView`]. [`Browser`] bundles all of it as one session
//! state value.
//!
//! # Example
//!
//! ```
//! use alembic_catalog::{Browser, FieldFilter, Item};
//!
//! let mut browser = Browser::new();
//! browser.set_items(vec![
//!     Item::named("potion-1", "Polyjuice Potion"),
//!     Item::named("potion-2", "Draught of Peace"),
//! ]);
//!
//! browser.set_search("juice");
//! assert_eq!(browser.filtered().len(), 1);
//!
//! browser.set_difficulty(FieldFilter::Only("Advanced".to_string()));
//! assert!(browser.filtered().is_empty());
//! ```

pub mod browser;
pub mod detail;
pub mod filter;
pub mod item;
pub mod paging;

pub use browser::Browser;
pub use detail::{DetailField, DetailView, NOT_SPECIFIED};
pub use filter::{
    characteristic_options, difficulty_options, filter_items, FieldFilter, FilterCriteria,
    CHARACTERISTIC_PRESETS, DIFFICULTY_PRESETS,
};
pub use item::{Item, ItemId, EMPTY_CELL};
pub use paging::{page_buttons, page_slice, total_pages, PageButton, Pager, PAGE_SIZE};
