use crate::pagination::TreeNode;
use crate::types::{Color, EquationData, NotionId, RichTextItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Notion block: one node of a page's content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: NotionId,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub content: BlockContent,
}

/// Type-specific block payload, tagged by Notion's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextBlock,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    ToDo {
        to_do: ToDoBlock,
    },
    Toggle {
        toggle: TextBlock,
    },
    Quote {
        quote: TextBlock,
    },
    Callout {
        callout: TextBlock,
    },
    Code {
        code: CodeBlock,
    },
    Equation {
        equation: EquationData,
    },
    Divider {
        #[serde(default)]
        divider: serde_json::Value,
    },
    ChildPage {
        child_page: TitledBlock,
    },
    ChildDatabase {
        child_database: TitledBlock,
    },
    /// Block types this client does not model (media, embeds, tables, ...).
    #[serde(other)]
    Unsupported,
}

/// Payload shared by every block whose body is a run of rich text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitledBlock {
    pub title: String,
}

impl Block {
    /// Notion's wire name for the block type.
    pub fn block_type(&self) -> &'static str {
        match &self.content {
            BlockContent::Paragraph { .. } => "paragraph",
            BlockContent::Heading1 { .. } => "heading_1",
            BlockContent::Heading2 { .. } => "heading_2",
            BlockContent::Heading3 { .. } => "heading_3",
            BlockContent::BulletedListItem { .. } => "bulleted_list_item",
            BlockContent::NumberedListItem { .. } => "numbered_list_item",
            BlockContent::ToDo { .. } => "to_do",
            BlockContent::Toggle { .. } => "toggle",
            BlockContent::Quote { .. } => "quote",
            BlockContent::Callout { .. } => "callout",
            BlockContent::Code { .. } => "code",
            BlockContent::Equation { .. } => "equation",
            BlockContent::Divider { .. } => "divider",
            BlockContent::ChildPage { .. } => "child_page",
            BlockContent::ChildDatabase { .. } => "child_database",
            BlockContent::Unsupported => "unsupported",
        }
    }

    /// The block's rich text body, for block types that have one.
    pub fn rich_text(&self) -> Option<&[RichTextItem]> {
        match &self.content {
            BlockContent::Paragraph { paragraph: b }
            | BlockContent::Heading1 { heading_1: b }
            | BlockContent::Heading2 { heading_2: b }
            | BlockContent::Heading3 { heading_3: b }
            | BlockContent::BulletedListItem {
                bulleted_list_item: b,
            }
            | BlockContent::NumberedListItem {
                numbered_list_item: b,
            }
            | BlockContent::Toggle { toggle: b }
            | BlockContent::Quote { quote: b }
            | BlockContent::Callout { callout: b } => Some(&b.rich_text),
            BlockContent::ToDo { to_do } => Some(&to_do.rich_text),
            BlockContent::Code { code } => Some(&code.rich_text),
            BlockContent::Equation { .. }
            | BlockContent::Divider { .. }
            | BlockContent::ChildPage { .. }
            | BlockContent::ChildDatabase { .. }
            | BlockContent::Unsupported => None,
        }
    }

    /// Whether this block is a page in its own right.
    pub fn is_child_page(&self) -> bool {
        matches!(self.content, BlockContent::ChildPage { .. })
    }

    /// Whether this block is an inline database.
    pub fn is_child_database(&self) -> bool {
        matches!(self.content, BlockContent::ChildDatabase { .. })
    }

    /// A paragraph block carrying the given rich text, ready to be appended.
    pub fn paragraph_request(rich_text: Vec<RichTextItem>) -> serde_json::Value {
        serde_json::json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": rich_text },
        })
    }
}

impl TreeNode for Block {
    fn node_id(&self) -> &NotionId {
        &self.id
    }

    fn has_children(&self) -> bool {
        self.has_children
    }
}
