use super::{PageBatch, PageRequest};
use crate::error::AppError;
use std::iter::FusedIterator;

/// Lazy stream over every item of a paginated endpoint.
///
/// Created by [`paginate`]. Holds at most one page in memory.
pub struct Paginator<T, F> {
    fetch: F,
    page_size_override: Option<u32>,
    buffer: std::vec::IntoIter<T>,
    upcoming: Option<PageRequest>,
    pages_fetched: u32,
}

/// Streams the items of a paginated endpoint.
///
/// `fetch` performs one request for the given [`PageRequest`]. With
/// `page_size_override` set, a single page of that size is fetched and
/// `has_more` is ignored; otherwise pages are fetched one after another,
/// each only once the previous one has been consumed, until the endpoint
/// reports `has_more = false`.
pub fn paginate<T, F>(fetch: F, page_size_override: Option<u32>) -> Paginator<T, F>
where
    F: FnMut(PageRequest) -> Result<PageBatch<T>, AppError>,
{
    Paginator {
        fetch,
        page_size_override,
        buffer: Vec::new().into_iter(),
        upcoming: Some(PageRequest {
            start_cursor: None,
            page_size: page_size_override,
        }),
        pages_fetched: 0,
    }
}

impl<T, F> Paginator<T, F>
where
    F: FnMut(PageRequest) -> Result<PageBatch<T>, AppError>,
{
    /// Number of fetch calls made so far.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    fn follow_up(&self, has_more: bool, next_cursor: Option<String>) -> Option<PageRequest> {
        if self.page_size_override.is_some() || !has_more {
            return None;
        }
        match next_cursor {
            Some(cursor) => Some(PageRequest {
                start_cursor: Some(cursor),
                page_size: None,
            }),
            None => {
                log::warn!(
                    "Endpoint reported more results without a cursor after page {}; stopping",
                    self.pages_fetched
                );
                None
            }
        }
    }
}

impl<T, F> Iterator for Paginator<T, F>
where
    F: FnMut(PageRequest) -> Result<PageBatch<T>, AppError>,
{
    type Item = Result<T, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }

            let request = self.upcoming.take()?;
            match (self.fetch)(request) {
                Ok(batch) => {
                    self.pages_fetched += 1;
                    log::trace!(
                        "Page {}: {} items, has_more={}",
                        self.pages_fetched,
                        batch.results.len(),
                        batch.has_more
                    );
                    self.upcoming = self.follow_up(batch.has_more, batch.next_cursor);
                    self.buffer = batch.results.into_iter();
                }
                Err(err) => {
                    log::debug!("Page fetch failed after {} pages: {}", self.pages_fetched, err);
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T, F> FusedIterator for Paginator<T, F> where
    F: FnMut(PageRequest) -> Result<PageBatch<T>, AppError>
{
}
