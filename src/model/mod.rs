//! Typed Notion objects: blocks, database pages and comments.
//!
//! Each object is validated when it is deserialized from an API response;
//! everything downstream works with these types, never with raw JSON.

mod block;

pub use block::{Block, BlockContent, CodeBlock, TextBlock, TitledBlock, ToDoBlock};

use crate::types::{NotionId, PartialUser, PropertyTypeValue, PropertyValue, RichTextItem};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion page, either standalone or a row of a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: NotionId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// Plain text of the title property, or an empty string when the page has none.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find(|p| p.id == "title")
            .and_then(|p| match &p.value {
                PropertyTypeValue::Title { title } => {
                    Some(crate::formatting::rich_text_to_plain_text(title))
                }
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Looks up a property by its display name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Where an object lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: NotionId },
    PageId { page_id: NotionId },
    BlockId { block_id: NotionId },
    Workspace {
        #[serde(default)]
        workspace: bool,
    },
}

/// A comment attached to a page or block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: NotionId,
    pub discussion_id: NotionId,
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    pub created_by: PartialUser,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> serde_json::Value {
        json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T20:25:00.000Z",
            "archived": false,
            "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5",
            "parent": { "type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce" },
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        { "type": "text", "text": { "content": "Tuscan " }, "plain_text": "Tuscan " },
                        { "type": "text", "text": { "content": "kale" }, "plain_text": "kale" }
                    ]
                },
                "Done": { "id": "Aw%3D", "type": "checkbox", "checkbox": true }
            }
        })
    }

    #[test]
    fn page_title_concatenates_plain_text() {
        let page: Page = serde_json::from_value(sample_page()).unwrap();
        assert_eq!(page.title(), "Tuscan kale");
        assert!(matches!(page.parent, Some(Parent::DatabaseId { .. })));
        assert_eq!(
            page.properties.keys().collect::<Vec<_>>(),
            vec!["Name", "Done"]
        );
    }

    #[test]
    fn page_without_title_property_has_empty_title() {
        let mut value = sample_page();
        value["properties"] = json!({});
        let page: Page = serde_json::from_value(value).unwrap();
        assert_eq!(page.title(), "");
    }

    #[test]
    fn deserializes_comment() {
        let comment: Comment = serde_json::from_value(json!({
            "object": "comment",
            "id": "94cc56ab-9f02-409d-9f99-1037e9fe502f",
            "parent": { "type": "page_id", "page_id": "5c6a2821-6bb1-4a7e-b6e1-c50111515c3d" },
            "discussion_id": "f1407351-36f5-4c49-a13c-49f8ba11776d",
            "created_time": "2022-07-15T16:52:00.000Z",
            "last_edited_time": "2022-07-15T19:16:00.000Z",
            "created_by": { "object": "user", "id": "9b15170a-9941-4297-8ee6-83fa7649a87a" },
            "rich_text": [
                { "type": "text", "text": { "content": "Single comment" }, "plain_text": "Single comment" }
            ]
        }))
        .unwrap();
        assert_eq!(comment.rich_text.len(), 1);
        assert!(matches!(comment.parent, Some(Parent::PageId { .. })));
    }
}
