//! Incremental pager over a remote list resource

use super::release::ReleaseHandle;
use super::types::{
    CollectionError, CollectionState, FetchKind, FetchOutcome, DEFAULT_PAGE_SIZE, FIRST_PAGE,
};
use crate::api::ListApi;
use crate::types::Page;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Mutable state guarded by the collection's lock
struct Inner<T> {
    state: CollectionState<T>,
    /// Ticket of the most recently issued fetch
    latest_ticket: u64,
    initialized: bool,
}

impl<T> Inner<T> {
    fn issue(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }
}

/// Client-side read-through pager over a paginated list resource
///
/// Accumulates pages from a [`ListApi`] and exposes a [`CollectionState`]
/// snapshot. Construction does no I/O; the consumer calls
/// [`initialize`](Self::initialize) once, then drives
/// [`load_more`](Self::load_more) and [`refresh`](Self::refresh).
///
/// Every fetch carries a ticket. A response is applied only if no newer
/// fetch was issued after it, so a `refresh` racing an in-flight `load_more`
/// always wins and the stale page is never appended.
///
/// ```rust,ignore
/// let characters = PaginatedCollection::new(service.list());
/// characters.initialize().await;
/// while characters.state().await.has_more {
///     characters.load_more().await;
/// }
/// ```
pub struct PaginatedCollection<T> {
    api: Arc<dyn ListApi<T>>,
    page_size: u32,
    start_page: u32,
    inner: RwLock<Inner<T>>,
    release: ReleaseHandle,
}

impl<T: Send + Sync + 'static> PaginatedCollection<T> {
    /// Create an uninitialized collection starting at page 1
    pub fn new(api: impl ListApi<T> + 'static) -> Self {
        Self::from_arc(Arc::new(api))
    }

    /// Create an uninitialized collection over a shared api
    pub fn from_arc(api: Arc<dyn ListApi<T>>) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
            start_page: FIRST_PAGE,
            inner: RwLock::new(Inner {
                state: CollectionState::new(FIRST_PAGE),
                latest_ticket: 0,
                initialized: false,
            }),
            release: ReleaseHandle::new(),
        }
    }

    /// Set the page size sent with every request (minimum 1)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Start from a page other than 1 (minimum 1)
    #[must_use]
    pub fn starting_at(mut self, page: u32) -> Self {
        self.start_page = page.max(FIRST_PAGE);
        self.inner.get_mut().state.page = self.start_page;
        self
    }
}

impl<T> PaginatedCollection<T> {
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn start_page(&self) -> u32 {
        self.start_page
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> CollectionState<T>
    where
        T: Clone,
    {
        self.inner.read().await.state.clone()
    }

    /// Handle that releases this collection from elsewhere
    pub fn release_handle(&self) -> ReleaseHandle {
        self.release.clone()
    }

    /// End the consumer's lifetime: drop in-flight fetches, skip later calls
    pub fn release(&self) {
        debug!("collection released");
        self.release.release();
    }

    /// Fetch the start page; only the first call does anything
    pub async fn initialize(&self) -> FetchOutcome {
        let (ticket, page) = {
            let mut inner = self.inner.write().await;
            if inner.initialized || self.release.is_released() {
                return FetchOutcome::Skipped;
            }
            inner.initialized = true;
            inner.state = CollectionState::new(self.start_page);
            (inner.issue(), self.start_page)
        };

        self.fetch(ticket, FetchKind::Initial, page).await
    }

    /// Fetch and append the next page
    ///
    /// No-op while a fetch is in flight or once the last page was reached.
    pub async fn load_more(&self) -> FetchOutcome {
        let (ticket, page) = {
            let mut inner = self.inner.write().await;
            if self.release.is_released() || !inner.state.can_load_more() {
                debug!(
                    loading = inner.state.loading,
                    has_more = inner.state.has_more,
                    "load_more skipped"
                );
                return FetchOutcome::Skipped;
            }
            let Some(page) = inner.state.page.checked_add(1) else {
                debug!(page = inner.state.page, "no page number left, load_more skipped");
                inner.state.has_more = false;
                return FetchOutcome::Skipped;
            };
            inner.state.loading = true;
            (inner.issue(), page)
        };

        self.fetch(ticket, FetchKind::More, page).await
    }

    /// Reset to page 1 and replace every item
    ///
    /// Unconditional: supersedes whatever fetch is in flight. On failure the
    /// old items stay while `page` remains 1, so the next `load_more` asks
    /// for page 2 again and appends it to them.
    pub async fn refresh(&self) -> FetchOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            if self.release.is_released() {
                return FetchOutcome::Skipped;
            }
            inner.initialized = true;
            inner.state.page = FIRST_PAGE;
            inner.state.loading = true;
            inner.state.has_more = true;
            inner.issue()
        };

        self.fetch(ticket, FetchKind::Refresh, FIRST_PAGE).await
    }

    async fn fetch(&self, ticket: u64, kind: FetchKind, page: u32) -> FetchOutcome {
        debug!(ticket, ?kind, page, page_size = self.page_size, "fetch issued");

        let result = tokio::select! {
            biased;
            () = self.release.released() => {
                debug!(ticket, "collection released, dropping fetch");
                return FetchOutcome::Cancelled;
            }
            result = self.api.fetch_page(page, self.page_size) => result,
        };

        let mut inner = self.inner.write().await;
        if self.release.is_released() {
            return FetchOutcome::Cancelled;
        }
        if ticket != inner.latest_ticket {
            debug!(
                ticket,
                latest = inner.latest_ticket,
                "discarding response of superseded fetch"
            );
            return FetchOutcome::Discarded;
        }

        let state = &mut inner.state;
        state.loading = false;
        match result {
            Ok(received) => {
                apply_page(state, kind, page, received);
                debug!(
                    ?kind,
                    page = state.page,
                    items = state.items.len(),
                    has_more = state.has_more,
                    "page applied"
                );
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!(?kind, page, error = %e, "fetch failed");
                state.error = Some(CollectionError::FetchFailed(
                    kind.failure_message().to_string(),
                ));
                FetchOutcome::Failed
            }
        }
    }
}

fn apply_page<T>(state: &mut CollectionState<T>, kind: FetchKind, page: u32, received: Page<T>) {
    state.has_more = received.meta.has_more();
    state.error = None;
    match kind {
        FetchKind::Initial | FetchKind::Refresh => state.items = received.items,
        FetchKind::More => {
            state.items.extend(received.items);
            state.page = page;
        }
    }
}

impl<T> Drop for PaginatedCollection<T> {
    fn drop(&mut self) {
        self.release.release();
    }
}

impl<T> std::fmt::Debug for PaginatedCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedCollection")
            .field("page_size", &self.page_size)
            .field("start_page", &self.start_page)
            .field("released", &self.release.is_released())
            .finish_non_exhaustive()
    }
}
