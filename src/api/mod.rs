// src/api/mod.rs
//! Notion API interaction.
//!
//! [`NotionRepository`] is the seam between the retrieval logic and HTTP:
//! it exposes one call per Notion endpoint, each returning at most one page
//! of results. Everything that follows cursors or walks trees lives in
//! [`retrieval`] and is written against the trait, so it runs unchanged over
//! the live client, the memoizing wrapper or an in-memory fake.

pub mod cache;
pub mod client;
pub mod parser;
pub mod retrieval;

pub use cache::CachedNotionClient;
pub use client::NotionHttpClient;
pub use retrieval::{
    append_text, create_database_page, retrieve_block_children,
    retrieve_block_children_recursive, retrieve_comments, retrieve_comments_recursive,
    retrieve_database_pages, retrieve_general_info, retrieve_page,
};

use crate::error::AppError;
use crate::model::{Block, Comment, Page};
use crate::pagination::{PageBatch, PageRequest};
use crate::types::NotionId;

/// One call per Notion endpoint used by this crate.
pub trait NotionRepository {
    fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError>;

    fn retrieve_block(&self, id: &NotionId) -> Result<Block, AppError>;

    /// One page of the direct children of a block or page.
    fn list_block_children(
        &self,
        parent: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Block>, AppError>;

    /// One page of the rows of a database.
    fn query_database(
        &self,
        database: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Page>, AppError>;

    /// One page of the unresolved comments on a block or page.
    fn list_comments(
        &self,
        block: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Comment>, AppError>;

    /// Creates a row in `database` with the given property values.
    fn create_page(
        &self,
        database: &NotionId,
        properties: serde_json::Value,
    ) -> Result<Page, AppError>;

    /// Appends `children` (block request objects) under `parent`.
    fn append_children(
        &self,
        parent: &NotionId,
        children: Vec<serde_json::Value>,
    ) -> Result<PageBatch<Block>, AppError>;
}

impl<R: NotionRepository + ?Sized> NotionRepository for Box<R> {
    fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        (**self).retrieve_page(id)
    }

    fn retrieve_block(&self, id: &NotionId) -> Result<Block, AppError> {
        (**self).retrieve_block(id)
    }

    fn list_block_children(
        &self,
        parent: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Block>, AppError> {
        (**self).list_block_children(parent, request)
    }

    fn query_database(
        &self,
        database: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Page>, AppError> {
        (**self).query_database(database, request)
    }

    fn list_comments(
        &self,
        block: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Comment>, AppError> {
        (**self).list_comments(block, request)
    }

    fn create_page(
        &self,
        database: &NotionId,
        properties: serde_json::Value,
    ) -> Result<Page, AppError> {
        (**self).create_page(database, properties)
    }

    fn append_children(
        &self,
        parent: &NotionId,
        children: Vec<serde_json::Value>,
    ) -> Result<PageBatch<Block>, AppError> {
        (**self).append_children(parent, children)
    }
}
