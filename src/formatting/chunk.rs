// src/formatting/chunk.rs
//! Plain text to rich text, for writing long text back to Notion.

use crate::constants::RICH_TEXT_MAX_CHARS;
use crate::types::RichTextItem;
use serde_json::{json, Value};

/// Splits `text` into unstyled spans of at most [`RICH_TEXT_MAX_CHARS`]
/// characters each, in order. The empty string yields no spans.
pub fn chunk_plain_text(text: &str) -> Vec<RichTextItem> {
    split_chars(text)
        .map(|chunk| RichTextItem::plain_text(&chunk))
        .collect()
}

/// A `rich_text` property value holding `text`, for page creation.
pub fn rich_text_property(text: &str) -> Value {
    let spans: Vec<Value> = split_chars(text)
        .map(|content| json!({ "text": { "content": content } }))
        .collect();
    json!({ "rich_text": spans })
}

fn split_chars(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let split = rest
            .char_indices()
            .nth(RICH_TEXT_MAX_CHARS)
            .map_or(rest.len(), |(index, _)| index);
        let (head, tail) = rest.split_at(split);
        rest = tail;
        Some(head.to_string())
    })
}
