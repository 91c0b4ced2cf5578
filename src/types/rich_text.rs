//! Rich text spans as Notion serves them.
//!
//! A span is one contiguous run of annotated text. The kind of span is a
//! closed set decided at the deserialization boundary; a `type` this crate
//! does not know is kept as [`RichTextKind::Unrecognized`] so the renderer
//! can refuse it explicitly instead of silently dropping content.

use super::{Color, NotionId};
use serde::{Deserialize, Serialize};

/// The kind of rich text content, carrying the data specific to that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextKind {
    Text { content: String, link: Option<Link> },
    Equation(EquationData),
    Mention(Mention),
    /// A span `type` outside the known set, kept by name.
    Unrecognized(String),
}

impl RichTextKind {
    /// Notion's wire name for this kind.
    pub fn type_name(&self) -> &str {
        match self {
            RichTextKind::Text { .. } => "text",
            RichTextKind::Equation(_) => "equation",
            RichTextKind::Mention(_) => "mention",
            RichTextKind::Unrecognized(name) => name,
        }
    }
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRichText", into = "RawRichText")]
pub struct RichTextItem {
    pub kind: RichTextKind,
    pub annotations: Annotations,
    /// Notion's own unstyled rendering of the span.
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// An unstyled text span.
    pub fn plain_text(text: &str) -> Self {
        Self {
            kind: RichTextKind::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// An inline equation span.
    pub fn equation(expression: &str) -> Self {
        Self {
            kind: RichTextKind::Equation(EquationData {
                expression: expression.to_string(),
            }),
            annotations: Annotations::default(),
            plain_text: expression.to_string(),
            href: None,
        }
    }

    /// A mention span; `display` is the referenced entity's display text.
    pub fn mention(mention: Mention, display: &str) -> Self {
        Self {
            kind: RichTextKind::Mention(mention),
            annotations: Annotations::default(),
            plain_text: display.to_string(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// What a mention span points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    User { user: PartialUser },
    Page { page: ObjectRef },
    Database { database: ObjectRef },
    Date { date: DateMention },
    LinkPreview { link_preview: UrlRef },
    LinkMention { link_mention: LinkMentionRef },
    TemplateMention { template_mention: serde_json::Value },
    #[serde(other)]
    Unknown,
}

/// Partial user representation (used in mentions, comments and audit fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: NotionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMention {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMentionRef {
    pub href: String,
}

/// Wire shape of a span, as the API sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRichText {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    equation: Option<EquationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mention: Option<Mention>,
    #[serde(default)]
    annotations: Annotations,
    #[serde(default)]
    plain_text: String,
    #[serde(default)]
    href: Option<String>,
}

impl TryFrom<RawRichText> for RichTextItem {
    type Error = String;

    fn try_from(raw: RawRichText) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_str() {
            "text" => {
                let body = raw
                    .text
                    .ok_or_else(|| "rich text of type 'text' has no 'text' body".to_string())?;
                RichTextKind::Text {
                    content: body.content,
                    link: body.link,
                }
            }
            "equation" => RichTextKind::Equation(raw.equation.ok_or_else(|| {
                "rich text of type 'equation' has no 'equation' body".to_string()
            })?),
            "mention" => RichTextKind::Mention(raw.mention.ok_or_else(|| {
                "rich text of type 'mention' has no 'mention' body".to_string()
            })?),
            other => RichTextKind::Unrecognized(other.to_string()),
        };

        Ok(Self {
            kind,
            annotations: raw.annotations,
            plain_text: raw.plain_text,
            href: raw.href,
        })
    }
}

impl From<RichTextItem> for RawRichText {
    fn from(item: RichTextItem) -> Self {
        let mut raw = RawRichText {
            kind: item.kind.type_name().to_string(),
            text: None,
            equation: None,
            mention: None,
            annotations: item.annotations,
            plain_text: item.plain_text,
            href: item.href,
        };
        match item.kind {
            RichTextKind::Text { content, link } => raw.text = Some(TextContent { content, link }),
            RichTextKind::Equation(equation) => raw.equation = Some(equation),
            RichTextKind::Mention(mention) => raw.mention = Some(mention),
            RichTextKind::Unrecognized(_) => {}
        }
        raw
    }
}
