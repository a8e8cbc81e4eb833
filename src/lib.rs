//! # catalog-pager
//!
//! Client for browsing a public character/planet catalog through its
//! paginated REST API.
//!
//! ## Features
//!
//! - **Incremental Pagination**: `PaginatedCollection` accumulates pages and
//!   exposes loading/error/has-more state with `load_more` and `refresh`
//! - **Race-free Refresh**: ticketed requests, so a stale page never lands
//!   after a refresh
//! - **Robust Transport**: retries, backoff and rate limiting over reqwest
//! - **Typed Catalog**: characters, planets and transformations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_pager::{catalog::CatalogClient, config::CatalogConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let catalog = CatalogClient::from_config(&CatalogConfig::default())?;
//!
//!     let characters = catalog.character_collection();
//!     characters.initialize().await;
//!     characters.load_more().await;
//!
//!     let state = characters.state().await;
//!     println!("{} characters, more: {}", state.items.len(), state.has_more);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 PaginatedCollection<T>                       │
//! │  initialize() / load_more() / refresh() → CollectionState<T> │
//! └──────────────────────────────────────────────────────────────┘
//!                               │ ListApi<T>
//! ┌──────────────┬──────────────┴───────────┬───────────────────┐
//! │   Catalog    │         Api              │       HTTP        │
//! ├──────────────┼──────────────────────────┼───────────────────┤
//! │ Characters   │ HttpListApi<T>           │ Retry / Backoff   │
//! │ Planets      │ ?page=n&limit=m          │ Rate Limit        │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common wire types
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// The list capability and its HTTP implementation
pub mod api;

/// Incremental pagination core
pub mod pagination;

/// Catalog models and services
pub mod catalog;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Page, PageLinks, PageMeta};

pub use api::{DetailApi, HttpListApi, ListApi};
pub use pagination::{CollectionState, FetchOutcome, PaginatedCollection};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
