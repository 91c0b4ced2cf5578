// src/api/cache.rs
//! In-memory memoization of single-object lookups.
//!
//! Pages and blocks are cached in an LRU map with a per-entry TTL. List
//! endpoints pass straight through: cursors are single-use, so a cached page
//! of results could never be continued.

use super::NotionRepository;
use crate::constants::CACHE_CAPACITY;
use crate::error::AppError;
use crate::model::{Block, Comment, Page};
use crate::pagination::{PageBatch, PageRequest};
use crate::types::NotionId;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

/// LRU map whose entries expire `ttl` after insertion.
struct TtlCache<T> {
    entries: Mutex<LruCache<NotionId, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    fn get(&self, id: &NotionId) -> Option<T> {
        let mut entries = self.entries.lock();
        let fresh = entries
            .get(id)
            .map(|entry| entry.stored_at.elapsed() < self.ttl)?;
        if fresh {
            entries.get(id).map(|entry| entry.value.clone())
        } else {
            entries.pop(id);
            None
        }
    }

    fn insert(&self, id: NotionId, value: T) {
        self.entries.lock().put(
            id,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    fn remove(&self, id: &NotionId) {
        self.entries.lock().pop(id);
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// A [`NotionRepository`] that memoizes `retrieve_page` and
/// `retrieve_block` of the repository it wraps.
pub struct CachedNotionClient<R> {
    inner: R,
    pages: TtlCache<Page>,
    blocks: TtlCache<Block>,
}

impl<R: NotionRepository> CachedNotionClient<R> {
    /// Wraps `inner` with a cache of the default capacity.
    pub fn new(inner: R, ttl: Duration) -> Self {
        // CACHE_CAPACITY is a non-zero constant
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(inner, ttl, capacity)
    }

    pub fn with_capacity(inner: R, ttl: Duration, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            pages: TtlCache::new(capacity, ttl),
            blocks: TtlCache::new(capacity, ttl),
        }
    }

    /// Number of pages and blocks currently held.
    pub fn cached_objects(&self) -> usize {
        self.pages.len() + self.blocks.len()
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: NotionRepository> NotionRepository for CachedNotionClient<R> {
    fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        if let Some(page) = self.pages.get(id) {
            log::debug!("Cache hit for page {}", id);
            return Ok(page);
        }
        let page = self.inner.retrieve_page(id)?;
        self.pages.insert(id.clone(), page.clone());
        Ok(page)
    }

    fn retrieve_block(&self, id: &NotionId) -> Result<Block, AppError> {
        if let Some(block) = self.blocks.get(id) {
            log::debug!("Cache hit for block {}", id);
            return Ok(block);
        }
        let block = self.inner.retrieve_block(id)?;
        self.blocks.insert(id.clone(), block.clone());
        Ok(block)
    }

    fn list_block_children(
        &self,
        parent: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Block>, AppError> {
        self.inner.list_block_children(parent, request)
    }

    fn query_database(
        &self,
        database: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Page>, AppError> {
        self.inner.query_database(database, request)
    }

    fn list_comments(
        &self,
        block: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Comment>, AppError> {
        self.inner.list_comments(block, request)
    }

    fn create_page(
        &self,
        database: &NotionId,
        properties: serde_json::Value,
    ) -> Result<Page, AppError> {
        self.inner.create_page(database, properties)
    }

    fn append_children(
        &self,
        parent: &NotionId,
        children: Vec<serde_json::Value>,
    ) -> Result<PageBatch<Block>, AppError> {
        // The parent now has children it may not have had when cached.
        self.blocks.remove(parent);
        self.inner.append_children(parent, children)
    }
}
