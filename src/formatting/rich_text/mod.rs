// src/formatting/rich_text/mod.rs
//! Renders sequences of Notion rich text spans to HTML or Markdown.
//!
//! Rendering happens in two passes: every span is first resolved into a
//! [`TextSegment`], then the segments are rendered and concatenated. A span
//! of unrecognized kind fails the first pass, so a failed render never
//! produces partial output.

mod annotations;
mod handlers;
mod types;

pub use annotations::html_escape;
pub use handlers::mention_display;
pub use types::{RenderTarget, SegmentContent, TextSegment, TextStyle};

use crate::error::AppError;
use crate::types::{RichTextItem, RichTextKind};
use annotations::{annotations_to_style, HtmlStyleRenderer, MarkdownStyleRenderer};

/// Renders `items` for `target`, concatenating spans in order.
pub fn render(items: &[RichTextItem], target: RenderTarget) -> Result<String, AppError> {
    let segments = format_rich_text_items(items)?;
    log::trace!("Rendering {} segments as {:?}", segments.len(), target);

    let rendered = segments
        .iter()
        .map(|segment| match target {
            RenderTarget::Html => HtmlStyleRenderer::render_segment(segment),
            RenderTarget::Markdown => MarkdownStyleRenderer::render_segment(segment),
        })
        .collect();
    Ok(rendered)
}

pub fn rich_text_to_html(items: &[RichTextItem]) -> Result<String, AppError> {
    render(items, RenderTarget::Html)
}

pub fn rich_text_to_markdown(items: &[RichTextItem]) -> Result<String, AppError> {
    render(items, RenderTarget::Markdown)
}

/// Resolves every span into a segment, failing on the first unknown kind.
pub fn format_rich_text_items(items: &[RichTextItem]) -> Result<Vec<TextSegment>, AppError> {
    items.iter().map(format_single_item).collect()
}

fn format_single_item(item: &RichTextItem) -> Result<TextSegment, AppError> {
    let mut style = annotations_to_style(&item.annotations);

    let content = match &item.kind {
        RichTextKind::Text { content, link } => {
            style.link = item
                .href
                .clone()
                .or_else(|| link.as_ref().map(|l| l.url.clone()));
            SegmentContent::Plain(content.clone())
        }
        RichTextKind::Equation(equation) => {
            style.link = item.href.clone();
            SegmentContent::Equation(format!(" ${}$ ", equation.expression))
        }
        RichTextKind::Mention(mention) => {
            style.link = item.href.clone();
            SegmentContent::Mention(mention_display(mention, &item.plain_text))
        }
        RichTextKind::Unrecognized(kind) => {
            log::warn!("Refusing to render rich text of type '{}'", kind);
            return Err(AppError::UnrecognizedSpanKind(kind.clone()));
        }
    };

    Ok(TextSegment { content, style })
}
