// src/formatting/plain_text.rs
//! Plain-text views of rich text and page properties.

use crate::error::AppError;
use crate::types::{PropertyTypeValue, PropertyValue, RichTextItem};

/// Concatenates the `plain_text` of every span.
pub fn rich_text_to_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// Renders a property value as plain text.
///
/// Fails with [`AppError::UnsupportedProperty`] for property types that have
/// no single-string form (files, formula, people, phone number, rollup) and
/// for types this client does not know.
pub fn property_to_plain_text(property: &PropertyValue) -> Result<String, AppError> {
    use PropertyTypeValue::*;

    let text = match &property.value {
        // Lowercase "true"/"false"; an unchecked box is "false", never empty.
        Checkbox { checkbox } => checkbox.to_string(),
        CreatedTime { created_time } => created_time.clone(),
        LastEditedTime { last_edited_time } => last_edited_time.clone(),
        Email { email } => email.clone().unwrap_or_default(),
        Url { url } => url.clone().unwrap_or_default(),
        Number { number } => number.as_ref().map(|n| n.to_string()).unwrap_or_default(),
        CreatedBy { created_by } => created_by.id.clone(),
        LastEditedBy { last_edited_by } => last_edited_by.id.clone(),
        Date { date } => match date {
            Some(range) => match &range.end {
                Some(end) => format!("{} - {}", range.start, end),
                None => range.start.clone(),
            },
            None => String::new(),
        },
        MultiSelect { multi_select } => multi_select
            .iter()
            .map(|option| option.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        Relation { relation } => relation
            .iter()
            .map(|target| target.id.to_hyphenated())
            .collect::<Vec<_>>()
            .join(", "),
        Title { title: spans } | RichText { rich_text: spans } => rich_text_to_plain_text(spans),
        Select { select: option } | Status { status: option } => option
            .as_ref()
            .map(|o| o.name.clone())
            .unwrap_or_default(),
        UniqueId { unique_id } => format!(
            "{}{}",
            unique_id.prefix.as_deref().unwrap_or(""),
            unique_id.number
        ),
        Verification { verification } => verification
            .as_ref()
            .map(|v| v.state.clone())
            .unwrap_or_default(),
        Files { .. } | Formula { .. } | People { .. } | PhoneNumber { .. } | Rollup { .. }
        | Unsupported => {
            return Err(AppError::UnsupportedProperty(
                property.value.type_name().to_string(),
            ))
        }
    };

    Ok(text)
}
