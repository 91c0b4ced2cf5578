// src/formatting/block_renderer.rs
//! Renders single blocks as one line of Markdown or HTML.
//!
//! Only the block's own rich text is rendered; children are separate items
//! of a walk and get their own line.

use super::rich_text::{html_escape, render, RenderTarget};
use crate::error::AppError;
use crate::model::{Block, BlockContent};
use std::fmt::Write;

/// Renders `block` for `target`.
pub fn render_block(block: &Block, target: RenderTarget) -> Result<String, AppError> {
    match target {
        RenderTarget::Markdown => render_markdown(block),
        RenderTarget::Html => render_html(block),
    }
}

/// Renders `blocks` one per line.
pub fn render_blocks(blocks: &[Block], target: RenderTarget) -> Result<String, AppError> {
    let mut output = String::new();
    for block in blocks {
        let line = render_block(block, target)?;
        // Writing to a String cannot fail
        let _ = writeln!(output, "{}", line);
    }
    log::debug!("Rendered {} blocks as {:?}", blocks.len(), target);
    Ok(output)
}

fn render_markdown(block: &Block) -> Result<String, AppError> {
    let text = match block.rich_text() {
        Some(spans) => render(spans, RenderTarget::Markdown)?,
        None => String::new(),
    };

    Ok(match &block.content {
        BlockContent::Heading1 { .. } => format!("# {}", text),
        BlockContent::Heading2 { .. } => format!("## {}", text),
        BlockContent::Heading3 { .. } => format!("### {}", text),
        BlockContent::BulletedListItem { .. } => format!("- {}", text),
        BlockContent::NumberedListItem { .. } => format!("1. {}", text),
        BlockContent::ToDo { to_do } => {
            format!("- [{}] {}", if to_do.checked { "x" } else { " " }, text)
        }
        BlockContent::Quote { .. } | BlockContent::Callout { .. } => format!("> {}", text),
        BlockContent::Code { code } => format!("```{}\n{}\n```", code.language, text),
        BlockContent::Equation { equation } => format!("$${}$$", equation.expression),
        BlockContent::Divider { .. } => "---".to_string(),
        BlockContent::ChildPage { child_page } => {
            format!("[{}]({})", child_page.title, block.id.to_url())
        }
        BlockContent::ChildDatabase { child_database } => {
            format!("[{}]({})", child_database.title, block.id.to_url())
        }
        BlockContent::Paragraph { .. } | BlockContent::Toggle { .. } => text,
        BlockContent::Unsupported => format!("<!-- unsupported block {} -->", block.id),
    })
}

fn render_html(block: &Block) -> Result<String, AppError> {
    let text = match block.rich_text() {
        Some(spans) => render(spans, RenderTarget::Html)?,
        None => String::new(),
    };

    Ok(match &block.content {
        BlockContent::Heading1 { .. } => format!("<h1>{}</h1>", text),
        BlockContent::Heading2 { .. } => format!("<h2>{}</h2>", text),
        BlockContent::Heading3 { .. } => format!("<h3>{}</h3>", text),
        BlockContent::BulletedListItem { .. } | BlockContent::NumberedListItem { .. } => {
            format!("<li>{}</li>", text)
        }
        BlockContent::ToDo { to_do } => format!(
            "<p><input type=\"checkbox\" disabled{}> {}</p>",
            if to_do.checked { " checked" } else { "" },
            text
        ),
        BlockContent::Quote { .. } | BlockContent::Callout { .. } => {
            format!("<blockquote>{}</blockquote>", text)
        }
        BlockContent::Code { .. } => format!("<pre><code>{}</code></pre>", text),
        BlockContent::Equation { equation } => {
            format!("<p>$${}$$</p>", html_escape(&equation.expression))
        }
        BlockContent::Divider { .. } => "<hr>".to_string(),
        BlockContent::ChildPage { child_page } => format!(
            "<p><a href=\"{}\">{}</a></p>",
            block.id.to_url(),
            html_escape(&child_page.title)
        ),
        BlockContent::ChildDatabase { child_database } => format!(
            "<p><a href=\"{}\">{}</a></p>",
            block.id.to_url(),
            html_escape(&child_database.title)
        ),
        BlockContent::Paragraph { .. } | BlockContent::Toggle { .. } => {
            format!("<p>{}</p>", text)
        }
        BlockContent::Unsupported => format!("<!-- unsupported block {} -->", block.id),
    })
}
