// src/formatting/rich_text/types.rs
//! Intermediate representation between Notion spans and rendered text.
//!
//! A span is first resolved into a [`TextSegment`]: its base content plus the
//! style that applies to it. Renderers only ever see segments.

use crate::types::Color;

/// Output format for rendered rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Html,
    Markdown,
}

impl std::str::FromStr for RenderTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(RenderTarget::Html),
            "markdown" | "md" => Ok(RenderTarget::Markdown),
            other => Err(format!("unknown render target: {}", other)),
        }
    }
}

/// A single span resolved to content plus styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub content: SegmentContent,
    pub style: TextStyle,
}

/// Base content of a segment, before any escaping or wrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Verbatim text.
    Plain(String),
    /// Equation expression, already padded as ` $expr$ `.
    Equation(String),
    /// Display text of the mentioned entity, without the leading `@`.
    Mention(String),
}

impl SegmentContent {
    pub fn is_mention(&self) -> bool {
        matches!(self, SegmentContent::Mention(_))
    }
}

/// Text styling options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
    pub link: Option<String>,
}

impl TextStyle {
    /// Checks if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.strikethrough
            || self.underline
            || self.code
            || !self.color.is_default()
            || self.link.is_some()
    }
}
