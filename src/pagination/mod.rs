//! Pagination module
//!
//! Incremental loading of a paginated list resource.
//!
//! # Overview
//!
//! [`PaginatedCollection`] accumulates pages fetched through a
//! [`ListApi`](crate::api::ListApi) and exposes a [`CollectionState`]
//! snapshot (`items`, `page`, `loading`, `error`, `has_more`) plus three
//! actions: `initialize`, `load_more` and `refresh`.
//!
//! - `load_more` appends page `page + 1`; it is a no-op while loading or once
//!   the server reported the last page.
//! - `refresh` resets to page 1 and replaces the items wholesale.
//! - Failures never escape: they become a single opaque
//!   [`CollectionError::FetchFailed`] in the state, prior items untouched.

mod collection;
mod release;
mod types;

pub use collection::PaginatedCollection;
pub use release::ReleaseHandle;
pub use types::{
    CollectionError, CollectionState, FetchKind, FetchOutcome, DEFAULT_PAGE_SIZE, FIRST_PAGE,
};
