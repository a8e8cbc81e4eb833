//! HTTP-backed list resource

use super::{DetailApi, ListApi};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::Page;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// A paginated REST resource such as `/characters`
pub struct HttpListApi<T> {
    client: HttpClient,
    resource: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpListApi<T> {
    /// Bind a resource path (e.g. `"characters"`) to a client
    pub fn new(client: HttpClient, resource: impl Into<String>) -> Self {
        let resource = resource.into().trim_matches('/').to_string();
        Self {
            client,
            resource,
            _item: PhantomData,
        }
    }

    /// Resource path without slashes
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl<T> Clone for HttpListApi<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: self.resource.clone(),
            _item: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for HttpListApi<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpListApi")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T> ListApi<T> for HttpListApi<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<T>> {
        if page == 0 {
            return Err(Error::invalid_argument("page", "must be at least 1"));
        }
        if page_size == 0 {
            return Err(Error::invalid_argument("page_size", "must be at least 1"));
        }

        debug!(resource = %self.resource, page, page_size, "fetching page");
        let query = [("page", page.to_string()), ("limit", page_size.to_string())];
        self.client.get_json(&self.resource, &query).await
    }
}

#[async_trait]
impl<T> DetailApi<T> for HttpListApi<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_one(&self, id: u64) -> Result<T> {
        debug!(resource = %self.resource, id, "fetching item");
        let path = format!("{}/{id}", self.resource);
        match self.client.get_json(&path, &[]).await {
            Err(Error::HttpStatus { status: 404, .. }) => {
                Err(Error::not_found(self.resource.clone(), id))
            }
            other => other,
        }
    }
}
