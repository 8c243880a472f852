//! # etsi-deliverables
//!
//! Lists the published ETSI deliverables matching a standards-search query.
//!
//! The pipeline:
//! - fetches every page of the public catalog search ([`fetcher`])
//! - derives identifier, publication month, short title and file links per record ([`record`], [`titles`])
//! - keeps only the most recently published version of each document ([`supersession`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use etsi_deliverables::{Config, deliverables};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     for d in deliverables(&Config::default()).await? {
//!         println!("{}: {}", d.doc_id, d.title);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Catalog search client and pagination
pub mod fetcher;
/// Raw search records and their normalization
pub mod record;
/// Superseded-version removal
pub mod supersession;
/// Curated and normalized short titles
pub mod titles;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{Config, SearchConfig};
pub use error::{Error, ErrorCategory, Result};
pub use fetcher::CatalogClient;
pub use record::RawRecord;
pub use types::{Deliverable, Item};

/// Fetch all deliverables for the configured search, one per document identifier
///
/// Any transport or decode failure aborts the whole operation.
pub async fn deliverables(config: &Config) -> Result<Vec<Deliverable>> {
    CatalogClient::new(config)?.deliverables().await
}

/// Render deliverables as the pretty-printed JSON listing
pub fn render_listing(deliverables: Vec<Deliverable>) -> Result<String> {
    let items: Vec<Item> = deliverables.into_iter().map(Item::from).collect();
    Ok(serde_json::to_string_pretty(&items)?)
}
