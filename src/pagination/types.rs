//! Pagination state types
//!
//! Defines the state record a collection exposes to its consumer and the
//! outcome reported by each operation.

use thiserror::Error;

/// Page size used when the consumer does not configure one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// First page of every list resource
pub const FIRST_PAGE: u32 = 1;

/// The only failure a collection surfaces to its consumer
///
/// Transport and decode failures are logged with their cause and collapsed
/// into this opaque, human-readable message. A consumer cannot tell a 404
/// from a timeout; retrying is always an explicit `load_more`/`refresh`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("{0}")]
    FetchFailed(String),
}

impl CollectionError {
    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed(message) => message,
        }
    }
}

/// Snapshot of a collection's state
///
/// `items` is in arrival order. Items are not deduplicated across pages: if
/// the server's ordering shifts between requests, the same id can show up
/// twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    /// Accumulated items
    pub items: Vec<T>,
    /// Last requested page (1-based)
    pub page: u32,
    /// A fetch is in flight
    pub loading: bool,
    /// Failure of the most recent applied fetch
    pub error: Option<CollectionError>,
    /// Whether the last applied page reported more pages after it
    pub has_more: bool,
}

impl<T> CollectionState<T> {
    /// State of a collection that has not fetched anything yet
    pub fn new(start_page: u32) -> Self {
        Self {
            items: Vec::new(),
            page: start_page,
            loading: true,
            error: None,
            has_more: true,
        }
    }

    /// The error message, if the last applied fetch failed
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(CollectionError::message)
    }

    /// Nothing loaded yet and nothing loading: the first fetch failed
    pub fn is_failed_empty(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error.is_some()
    }

    /// Whether `load_more` would issue a request right now
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.has_more
    }
}

/// Which operation issued a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First fetch after construction
    Initial,
    /// Next page, appended
    More,
    /// Page one again, replacing everything
    Refresh,
}

impl FetchKind {
    /// Message stored in the state when this fetch fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Initial => "failed to load items",
            Self::More => "failed to load more items",
            Self::Refresh => "failed to refresh items",
        }
    }
}

/// What happened to a collection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Preconditions not met; no request was issued
    Skipped,
    /// The response was applied to the state
    Applied,
    /// The request failed; the error was recorded in the state
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Discarded,
    /// The collection was released before the response landed
    Cancelled,
}

impl FetchOutcome {
    /// Whether this operation changed the state's items or error
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied | Self::Failed)
    }
}
