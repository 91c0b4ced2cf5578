// tests/common/mod.rs
//! In-memory Notion workspace for integration tests.
#![allow(dead_code)]

use notionkit::{
    AppError, Block, Comment, NotionErrorCode, NotionId, NotionRepository, Page, PageBatch,
    PageRequest,
};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub fn id(n: u32) -> NotionId {
    NotionId::parse(&format!("{:032x}", n)).unwrap()
}

pub fn paragraph(block_id: &NotionId, text: &str, has_children: bool) -> Block {
    serde_json::from_value(json!({
        "object": "block",
        "id": block_id.to_hyphenated(),
        "type": "paragraph",
        "has_children": has_children,
        "paragraph": {
            "rich_text": [{
                "type": "text",
                "text": {"content": text, "link": null},
                "annotations": {},
                "plain_text": text,
                "href": null
            }]
        }
    }))
    .unwrap()
}

pub fn comment(comment_id: &NotionId, on: &NotionId, text: &str) -> Comment {
    serde_json::from_value(json!({
        "object": "comment",
        "id": comment_id.to_hyphenated(),
        "discussion_id": comment_id.to_hyphenated(),
        "parent": {"type": "block_id", "block_id": on.to_hyphenated()},
        "created_time": "2024-05-03T08:00:00.000Z",
        "created_by": {"object": "user", "id": "u-1", "name": "Ada"},
        "rich_text": [{
            "type": "text",
            "text": {"content": text, "link": null},
            "annotations": {},
            "plain_text": text,
            "href": null
        }]
    }))
    .unwrap()
}

pub fn row(page_id: &NotionId, title: &str) -> Page {
    serde_json::from_value(json!({
        "object": "page",
        "id": page_id.to_hyphenated(),
        "created_time": "2024-05-02T09:14:00.000Z",
        "last_edited_time": "2024-05-02T09:14:00.000Z",
        "url": page_id.to_url(),
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{
                    "type": "text",
                    "text": {"content": title, "link": null},
                    "annotations": {},
                    "plain_text": title,
                    "href": null
                }]
            }
        }
    }))
    .unwrap()
}

/// Serves stored objects, paging list results `page_size` at a time and
/// recording every list call.
pub struct FakeWorkspace {
    pub page_size: usize,
    pub children: HashMap<NotionId, Vec<Block>>,
    pub rows: HashMap<NotionId, Vec<Page>>,
    pub comments: HashMap<NotionId, Vec<Comment>>,
    /// Parents whose child listing fails with `object_not_found`.
    pub broken: Vec<NotionId>,
    pub list_calls: RefCell<Vec<(String, NotionId, PageRequest)>>,
    pub lookups: Cell<usize>,
    pub appended: RefCell<Vec<(NotionId, Vec<Value>)>>,
    pub created: RefCell<Vec<(NotionId, Value)>>,
}

impl FakeWorkspace {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            children: HashMap::new(),
            rows: HashMap::new(),
            comments: HashMap::new(),
            broken: Vec::new(),
            list_calls: RefCell::new(Vec::new()),
            lookups: Cell::new(0),
            appended: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }

    /// A complete tree of paragraphs, `branching` children per node down to
    /// `depth`, ids assigned breadth first with the root as 0.
    pub fn tree(depth: u32, branching: u32, page_size: usize) -> Self {
        let mut workspace = Self::new(page_size);
        let mut frontier = vec![0u32];
        let mut next_id = 1u32;
        for level in 1..=depth {
            let mut next_frontier = Vec::new();
            for parent in frontier {
                let kids = (0..branching)
                    .map(|_| {
                        let block = paragraph(&id(next_id), &format!("block {}", next_id), level < depth);
                        next_frontier.push(next_id);
                        next_id += 1;
                        block
                    })
                    .collect();
                workspace.children.insert(id(parent), kids);
            }
            frontier = next_frontier;
        }
        workspace
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.list_calls
            .borrow()
            .iter()
            .filter(|(name, _, _)| name == endpoint)
            .count()
    }

    fn page_of<T: Clone>(
        &self,
        endpoint: &str,
        owner: &NotionId,
        items: Option<&Vec<T>>,
        request: PageRequest,
    ) -> PageBatch<T> {
        self.list_calls
            .borrow_mut()
            .push((endpoint.to_string(), owner.clone(), request.clone()));

        let items = items.cloned().unwrap_or_default();
        let start = request
            .start_cursor
            .as_deref()
            .map(|c| c.parse::<usize>().unwrap())
            .unwrap_or(0);
        let size = request.page_size.map_or(self.page_size, |s| s as usize);
        let end = (start + size).min(items.len());
        let results = items[start..end].to_vec();
        if end < items.len() {
            PageBatch::more(results, end.to_string())
        } else {
            PageBatch::last(results)
        }
    }
}

fn not_found(what: &NotionId) -> AppError {
    AppError::NotionService {
        code: NotionErrorCode::ObjectNotFound,
        message: format!("Could not find {}", what),
        status: 404,
    }
}

impl NotionRepository for FakeWorkspace {
    fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        self.lookups.set(self.lookups.get() + 1);
        self.rows
            .values()
            .flatten()
            .find(|page| &page.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn retrieve_block(&self, id: &NotionId) -> Result<Block, AppError> {
        self.lookups.set(self.lookups.get() + 1);
        self.children
            .values()
            .flatten()
            .find(|block| &block.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn list_block_children(
        &self,
        parent: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Block>, AppError> {
        if self.broken.contains(parent) {
            return Err(not_found(parent));
        }
        Ok(self.page_of("children", parent, self.children.get(parent), request))
    }

    fn query_database(
        &self,
        database: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Page>, AppError> {
        Ok(self.page_of("query", database, self.rows.get(database), request))
    }

    fn list_comments(
        &self,
        block: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Comment>, AppError> {
        Ok(self.page_of("comments", block, self.comments.get(block), request))
    }

    fn create_page(&self, database: &NotionId, properties: Value) -> Result<Page, AppError> {
        self.created
            .borrow_mut()
            .push((database.clone(), properties));
        Ok(row(&id(9000), "created"))
    }

    fn append_children(
        &self,
        parent: &NotionId,
        children: Vec<Value>,
    ) -> Result<PageBatch<Block>, AppError> {
        let created = children
            .iter()
            .enumerate()
            .map(|(i, _)| paragraph(&id(8000 + i as u32), "", false))
            .collect();
        self.appended.borrow_mut().push((parent.clone(), children));
        Ok(PageBatch::last(created))
    }
}
