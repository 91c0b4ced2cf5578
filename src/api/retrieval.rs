// src/api/retrieval.rs
//! Workspace retrieval built on [`NotionRepository`].
//!
//! List operations return lazy iterators: nothing is fetched until the first
//! item is pulled, and each further page is fetched only once the previous
//! one has been consumed. A failed fetch is yielded as an `Err` item after
//! the results that preceded it, and ends the iteration.

use super::NotionRepository;
use crate::error::AppError;
use crate::formatting::chunk_plain_text;
use crate::model::{Block, Comment, Page};
use crate::pagination::{paginate, walk, Budget};
use crate::types::{ListOptions, NotionId};

/// What kind of object an id refers to, as seen through its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Page,
    Database,
    Block,
}

impl ObjectKind {
    pub fn of(block: &Block) -> Self {
        if block.is_child_page() {
            ObjectKind::Page
        } else if block.is_child_database() {
            ObjectKind::Database
        } else {
            ObjectKind::Block
        }
    }
}

/// Retrieves the block for any id; pages and databases are blocks too.
pub fn retrieve_general_info<R>(repo: &R, id: &NotionId) -> Result<Block, AppError>
where
    R: NotionRepository + ?Sized,
{
    let block = repo.retrieve_block(id)?;
    log::debug!("{} is a {:?} ({})", id, ObjectKind::of(&block), block.block_type());
    Ok(block)
}

pub fn retrieve_page<R>(repo: &R, id: &NotionId) -> Result<Page, AppError>
where
    R: NotionRepository + ?Sized,
{
    repo.retrieve_page(id)
}

/// Streams the rows of a database.
pub fn retrieve_database_pages<'a, R>(
    repo: &'a R,
    database: &NotionId,
    options: ListOptions,
) -> impl Iterator<Item = Result<Page, AppError>> + 'a
where
    R: NotionRepository + ?Sized,
{
    let database = database.clone();
    paginate(
        move |request| repo.query_database(&database, request),
        options.page_size,
    )
}

/// Streams the direct children of a block or page.
pub fn retrieve_block_children<'a, R>(
    repo: &'a R,
    parent: &NotionId,
    options: ListOptions,
) -> impl Iterator<Item = Result<Block, AppError>> + 'a
where
    R: NotionRepository + ?Sized,
{
    let parent = parent.clone();
    paginate(
        move |request| repo.list_block_children(&parent, request),
        options.page_size,
    )
}

/// Streams every descendant block of `root` breadth first.
///
/// `limit` caps the number of blocks yielded across the whole tree; each
/// node's children are otherwise listed in full.
pub fn retrieve_block_children_recursive<'a, R>(
    repo: &'a R,
    root: &NotionId,
    limit: Option<u32>,
) -> impl Iterator<Item = Result<Block, AppError>> + 'a
where
    R: NotionRepository + ?Sized,
{
    walk(
        root.clone(),
        move |parent: &NotionId| retrieve_block_children(repo, parent, ListOptions::all()),
        Budget::from_limit(limit),
    )
}

/// Streams the comments on a block or page.
pub fn retrieve_comments<'a, R>(
    repo: &'a R,
    block: &NotionId,
    options: ListOptions,
) -> impl Iterator<Item = Result<Comment, AppError>> + 'a
where
    R: NotionRepository + ?Sized,
{
    let block = block.clone();
    paginate(
        move |request| repo.list_comments(&block, request),
        options.page_size,
    )
}

/// Streams the comments on `root` itself, then those on each descendant
/// block in walk order.
///
/// `limit` bounds the block walk, `options` applies to every comment
/// listing.
pub fn retrieve_comments_recursive<'a, R>(
    repo: &'a R,
    root: &NotionId,
    limit: Option<u32>,
    options: ListOptions,
) -> impl Iterator<Item = Result<Comment, AppError>> + 'a
where
    R: NotionRepository + ?Sized,
{
    let descendants = retrieve_block_children_recursive(repo, root, limit).flat_map(
        move |block| -> Box<dyn Iterator<Item = Result<Comment, AppError>> + 'a> {
            match block {
                Ok(block) => Box::new(retrieve_comments(repo, &block.id, options)),
                Err(err) => Box::new(std::iter::once(Err(err))),
            }
        },
    );

    retrieve_comments(repo, root, options)
        .chain(descendants)
        .scan(false, |failed, item| {
            if *failed {
                return None;
            }
            *failed = item.is_err();
            Some(item)
        })
}

/// Creates a row in `database`.
///
/// `properties` maps property names to Notion property values, for example
/// built with [`rich_text_property`](crate::formatting::rich_text_property).
pub fn create_database_page<R>(
    repo: &R,
    database: &NotionId,
    properties: serde_json::Value,
) -> Result<Page, AppError>
where
    R: NotionRepository + ?Sized,
{
    let page = repo.create_page(database, properties)?;
    log::debug!("Created page {} in database {}", page.id, database);
    Ok(page)
}

/// Appends `text` under `block` as one paragraph, split into spans of at
/// most 2000 characters. Returns the blocks Notion created.
pub fn append_text<R>(repo: &R, block: &NotionId, text: &str) -> Result<Vec<Block>, AppError>
where
    R: NotionRepository + ?Sized,
{
    let spans = chunk_plain_text(text);
    log::debug!(
        "Appending {} characters as {} spans to {}",
        text.chars().count(),
        spans.len(),
        block
    );
    let batch = repo.append_children(block, vec![Block::paragraph_request(spans)])?;
    Ok(batch.results)
}
