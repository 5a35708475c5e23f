use serde::Serialize;

/// Capability exposed by a paginated collection: position within the larger
/// result set plus URL generation for arbitrary page numbers.
pub trait Paginated {
    fn current_page(&self) -> u64;
    fn last_page(&self) -> u64;
    fn per_page(&self) -> u64;
    fn total(&self) -> u64;
    /// URL for the given page number.
    fn page_url(&self, page: u64) -> String;
    /// URL of the previous page, or None on the first page.
    fn previous_page_url(&self) -> Option<String>;
    /// URL of the next page, or None on the last page.
    fn next_page_url(&self) -> Option<String>;
}

/// Navigation links attached to pagination metadata. `first` and `last` are
/// always present; `prev` and `next` serialize as null when there is no such
/// page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata merged into success envelopes under the `meta` key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub links: PageLinks,
}

impl PaginationMeta {
    /// Read metadata off a paginator. Recomputed on every call, never cached.
    pub fn from_paginator(paginator: &dyn Paginated) -> Self {
        Self {
            current_page: paginator.current_page(),
            last_page: paginator.last_page(),
            per_page: paginator.per_page(),
            total: paginator.total(),
            links: PageLinks {
                first: paginator.page_url(1),
                last: paginator.page_url(paginator.last_page()),
                prev: paginator.previous_page_url(),
                next: paginator.next_page_url(),
            },
        }
    }
}

/// Length-aware page over an already-fetched slice of items.
///
/// Page URLs are generated as `{base_url}?page={n}`; the base URL is expected
/// to be the request path without a query string.
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    current_page: u64,
    per_page: u64,
    total: u64,
    base_url: String,
}

impl<T> Page<T> {
    pub fn new(
        items: Vec<T>,
        current_page: u64,
        per_page: u64,
        total: u64,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            items,
            current_page,
            per_page,
            total,
            base_url: base_url.into(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Paginated for Page<T> {
    fn current_page(&self) -> u64 {
        self.current_page
    }

    fn last_page(&self) -> u64 {
        // A zero per-page count would divide by zero; treat it as one page.
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn page_url(&self, page: u64) -> String {
        format!("{}?page={}", self.base_url, page)
    }

    fn previous_page_url(&self) -> Option<String> {
        if self.current_page > 1 {
            Some(self.page_url(self.current_page - 1))
        } else {
            None
        }
    }

    fn next_page_url(&self) -> Option<String> {
        if self.current_page < self.last_page() {
            Some(self.page_url(self.current_page + 1))
        } else {
            None
        }
    }
}
