//! Database page property values.

use super::{Color, ObjectRef, PartialUser, RichTextItem};
use serde::{Deserialize, Serialize};

/// A property value on a database page, with its property id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub id: String,
    #[serde(flatten)]
    pub value: PropertyTypeValue,
}

/// The typed value of a property, tagged by Notion's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyTypeValue {
    Title {
        title: Vec<RichTextItem>,
    },
    RichText {
        rich_text: Vec<RichTextItem>,
    },
    Number {
        number: Option<serde_json::Number>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Date {
        date: Option<DateRange>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    Relation {
        relation: Vec<ObjectRef>,
    },
    CreatedTime {
        created_time: String,
    },
    CreatedBy {
        created_by: PartialUser,
    },
    LastEditedTime {
        last_edited_time: String,
    },
    LastEditedBy {
        last_edited_by: PartialUser,
    },
    UniqueId {
        unique_id: UniqueIdData,
    },
    Verification {
        verification: Option<VerificationData>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    People {
        people: serde_json::Value,
    },
    Files {
        files: serde_json::Value,
    },
    Formula {
        formula: serde_json::Value,
    },
    Rollup {
        rollup: serde_json::Value,
    },
    /// Any property type newer than this client.
    #[serde(other)]
    Unsupported,
}

impl PropertyTypeValue {
    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::RichText { .. } => "rich_text",
            Self::Number { .. } => "number",
            Self::Select { .. } => "select",
            Self::MultiSelect { .. } => "multi_select",
            Self::Status { .. } => "status",
            Self::Date { .. } => "date",
            Self::Checkbox { .. } => "checkbox",
            Self::Url { .. } => "url",
            Self::Email { .. } => "email",
            Self::Relation { .. } => "relation",
            Self::CreatedTime { .. } => "created_time",
            Self::CreatedBy { .. } => "created_by",
            Self::LastEditedTime { .. } => "last_edited_time",
            Self::LastEditedBy { .. } => "last_edited_by",
            Self::UniqueId { .. } => "unique_id",
            Self::Verification { .. } => "verification",
            Self::PhoneNumber { .. } => "phone_number",
            Self::People { .. } => "people",
            Self::Files { .. } => "files",
            Self::Formula { .. } => "formula",
            Self::Rollup { .. } => "rollup",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Select, multi-select and status option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

/// Date property value; `start` and `end` keep Notion's ISO 8601 text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueIdData {
    pub number: i64,
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationData {
    pub state: String,
}
