// src/lib.rs
//! notionkit: a small Notion workspace client.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Pagination**: `paginate`, `walk`, `Budget`, `PageBatch`, `PageRequest`
//! - **Rendering**: `render`, `RenderTarget`, `chunk_plain_text`, plain-text helpers
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `CachedNotionClient`,
//!   and the retrieval functions built on them
//! - **Domain model**: `Block`, `Page`, `Comment`, `RichTextItem`, `PropertyValue`
//! - **Error handling**: `AppError`, `ValidationError`, `NotionErrorCode`
//! - **Configuration**: `ClientConfig`, `CommandLineInput`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod pagination;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, CommandLineInput};

// --- Pagination ---
pub use crate::pagination::{
    paginate, walk, Budget, PageBatch, PageRequest, Paginator, TreeNode, TreeWalker,
};

// --- Domain Model ---
pub use crate::model::{Block, BlockContent, Comment, Page, Parent};

// --- Domain Types ---
pub use crate::types::{
    url_to_id, Annotations, ApiKey, Color, ListOptions, Mention, NotionId, PartialUser,
    PropertyTypeValue, PropertyValue, RichTextItem, RichTextKind,
};

// --- API Client ---
pub use crate::api::{
    append_text, create_database_page, retrieve_block_children,
    retrieve_block_children_recursive, retrieve_comments, retrieve_comments_recursive,
    retrieve_database_pages, retrieve_general_info, retrieve_page, CachedNotionClient,
    NotionHttpClient, NotionRepository,
};

// --- Formatting ---
pub use crate::formatting::{
    chunk_plain_text, property_to_plain_text, render, rich_text_property, rich_text_to_html,
    rich_text_to_markdown, rich_text_to_plain_text, RenderTarget,
};
