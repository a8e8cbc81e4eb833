//! Remote list capability
//!
//! The pagination core only ever talks to a [`ListApi`]. [`HttpListApi`] is
//! the implementation over the catalog's REST endpoints:
//!
//! - `fetch_page(n, m)` → `GET <base>/<resource>?page=n&limit=m`
//! - `fetch_one(id)` → `GET <base>/<resource>/<id>`

mod resource;

pub use resource::HttpListApi;

use crate::error::Result;
use crate::types::Page;
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches one page of a paginated list resource
///
/// Fails with a transport error (`Error::Http`, `Error::HttpStatus`,
/// `Error::Timeout`, ...) when the network or HTTP layer fails, and with
/// `Error::Decode` when the body cannot be parsed into a [`Page`].
#[async_trait]
pub trait ListApi<T>: Send + Sync {
    /// Fetch page `page` (1-based) holding up to `page_size` items
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<T>>;
}

/// Fetches a single item of a resource by identifier
#[async_trait]
pub trait DetailApi<T>: Send + Sync {
    /// Fetch the item with the given id
    async fn fetch_one(&self, id: u64) -> Result<T>;
}

#[async_trait]
impl<T, A> ListApi<T> for Arc<A>
where
    A: ListApi<T> + ?Sized,
{
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<T>> {
        (**self).fetch_page(page, page_size).await
    }
}

#[async_trait]
impl<T, A> DetailApi<T> for Arc<A>
where
    A: DetailApi<T> + ?Sized,
{
    async fn fetch_one(&self, id: u64) -> Result<T> {
        (**self).fetch_one(id).await
    }
}

#[cfg(test)]
mod tests;
