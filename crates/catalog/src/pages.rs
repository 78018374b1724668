//! Sequential walk over every page of the catalog.
//!
//! The catalog only reports its `total` inside a page, so the first page
//! has to be fetched before the number of pages is known. [`Pages`] fetches
//! offset 0 first, remembers the total it reports, then advances by
//! [`PAGE_SIZE`] until the offset reaches that total. Pages are fetched one
//! at a time, on demand.
//!
//! The sequence is finite and cannot be rewound. After the last page or
//! the first error it yields `None` forever.

use crate::client::{CatalogError, CatalogSource};
use crate::models::CatalogPage;
use crate::PAGE_SIZE;

pub struct Pages<'a, S: ?Sized> {
    source: &'a S,
    next_offset: i64,
    total: Option<i64>,
    finished: bool,
}

impl<'a, S: CatalogSource + ?Sized> Pages<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            next_offset: 0,
            total: None,
            finished: false,
        }
    }

    /// Total reported by the first page, once it has been fetched.
    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Fetch the next page, or `None` once the walk is over.
    pub async fn next_page(&mut self) -> Option<Result<CatalogPage, CatalogError>> {
        if self.finished {
            return None;
        }
        if let Some(total) = self.total {
            if self.next_offset >= total {
                self.finished = true;
                return None;
            }
        }

        match self.source.fetch_page(self.next_offset).await {
            Ok(page) => {
                if self.total.is_none() {
                    self.total = Some(page.total);
                }
                self.next_offset += PAGE_SIZE;
                Some(Ok(page))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
