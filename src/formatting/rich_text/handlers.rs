// src/formatting/rich_text/handlers.rs
//! Resolution of mention spans to display text.

use crate::types::Mention;

/// Display text for a mention.
///
/// Notion already puts the entity's display text in `plain_text`, with a
/// leading `@` for users and pages that is dropped here since renderers add
/// their own. The typed payload is only consulted when `plain_text` is empty.
pub fn mention_display(mention: &Mention, plain_text: &str) -> String {
    if !plain_text.is_empty() {
        return plain_text
            .strip_prefix('@')
            .unwrap_or(plain_text)
            .to_string();
    }

    match mention {
        Mention::User { user } => user.name.clone().unwrap_or_else(|| user.id.clone()),
        Mention::Page { page } => page.id.to_string(),
        Mention::Database { database } => database.id.to_string(),
        Mention::Date { date } => match &date.end {
            Some(end) => format!("{} → {}", date.start, end),
            None => date.start.clone(),
        },
        Mention::LinkPreview { link_preview } => link_preview.url.clone(),
        Mention::LinkMention { link_mention } => link_mention.href.clone(),
        Mention::TemplateMention { .. } | Mention::Unknown => {
            log::debug!("Mention without display text: {:?}", mention);
            String::new()
        }
    }
}
