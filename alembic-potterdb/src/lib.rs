//! PotterDB API client for the alembic catalog.
//!
//! Fetches the potion list once and flattens the JSON:API style
//! `{ data: [{ id, attributes }] }` envelope into [`alembic_catalog::Item`]s.
//!
//! # Example
//!
//! ```ignore
//! use alembic_potterdb::{load_potions, PotterDbClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PotterDbClient::new();
//!
//!     // Empty on any failure; the error is logged
//!     let potions = load_potions(&client).await;
//!     println!("{} potions", potions.len());
//! }
//! ```

mod client;
mod error;
mod normalize;

pub use client::{load_potions, PotterDbClient, DEFAULT_BASE_URL};
pub use error::PotterDbError;
pub use normalize::normalize_potions;
