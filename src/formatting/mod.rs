// src/formatting/mod.rs
//! Conversions between Notion rich text and text formats.
//!
//! Rich text renders to HTML or Markdown, properties and spans flatten to
//! plain text, and plain text chunks back into spans for write-back.

pub mod block_renderer;
mod chunk;
mod plain_text;
mod rich_text;

pub use block_renderer::{render_block, render_blocks};
pub use chunk::{chunk_plain_text, rich_text_property};
pub use plain_text::{property_to_plain_text, rich_text_to_plain_text};
pub use rich_text::{
    format_rich_text_items, html_escape, mention_display, render, rich_text_to_html,
    rich_text_to_markdown, RenderTarget, SegmentContent, TextSegment, TextStyle,
};
