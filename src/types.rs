//! Common types used throughout catalog-pager
//!
//! Wire types shared by every paginated resource, plus small utility types
//! used by the HTTP layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Page Types
// ============================================================================

/// One bounded response from a list endpoint
///
/// ```json
/// {
///   "items": [ ... ],
///   "meta": { "currentPage": 1, "totalPages": 6, "totalItems": 58, ... },
///   "links": { "first": "...", "previous": "", "next": "...", "last": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Pagination metadata
    pub meta: PageMeta,
    /// Navigation links, when the server sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl<T> Page<T> {
    /// Create a page without links
    pub fn new(items: Vec<T>, current_page: u32, total_pages: u32) -> Self {
        Self {
            items,
            meta: PageMeta::new(current_page, total_pages),
            links: None,
        }
    }

    /// Whether the server reports pages after this one
    pub fn has_more(&self) -> bool {
        self.meta.has_more()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pagination metadata computed server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based index of this page
    pub current_page: u32,
    /// Total number of pages for the requested page size
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
}

impl PageMeta {
    /// Create metadata with only the page counters set
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            total_items: None,
            item_count: None,
            items_per_page: None,
        }
    }

    /// `current_page < total_pages`
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Navigation links; the API sends empty strings for absent links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

impl PageLinks {
    /// URL of the next page, if any
    pub fn next_url(&self) -> Option<String> {
        self.next.clone().none_if_empty()
    }

    /// URL of the previous page, if any
    pub fn previous_url(&self) -> Option<String> {
        self.previous.clone().none_if_empty()
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
