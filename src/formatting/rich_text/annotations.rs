// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.
//!
//! Each renderer takes a resolved [`TextSegment`] and layers escaping, the
//! link and the style wraps on top of its content. Wraps are applied from
//! the inside out, so the innermost layer is written first.

use super::types::{SegmentContent, TextSegment, TextStyle};
use crate::types::Annotations;

/// Converts model annotations to text style.
pub fn annotations_to_style(annotations: &Annotations) -> TextStyle {
    TextStyle {
        bold: annotations.bold,
        italic: annotations.italic,
        strikethrough: annotations.strikethrough,
        underline: annotations.underline,
        code: annotations.code,
        color: annotations.color.clone(),
        link: None,
    }
}

/// Renderer for text styles to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Renders one segment. Markdown has no escaping and no colour.
    pub fn render_segment(segment: &TextSegment) -> String {
        let style = &segment.style;
        let content = match &segment.content {
            SegmentContent::Plain(text) | SegmentContent::Equation(text) => {
                text.replace('\n', "  \n")
            }
            SegmentContent::Mention(name) => format!("`@{}`", name),
        };

        let linked = match &style.link {
            Some(url) => format!("[{}]({})", content, url),
            None => content,
        };

        // Mentions already carry their own back-tick quoting.
        if segment.content.is_mention() {
            return linked;
        }
        Self::apply_styles(linked, style)
    }

    /// Wraps `content` in the style markers, bold outermost.
    pub fn apply_styles(content: String, style: &TextStyle) -> String {
        let mut result = content;

        if style.code {
            result = format!("`{}`", result);
        }
        if style.underline {
            // Markdown has no native underline
            result = format!("<u>{}</u>", result);
        }
        if style.strikethrough {
            result = format!("~~{}~~", result);
        }
        if style.italic {
            result = format!("*{}*", result);
        }
        if style.bold {
            result = format!("**{}**", result);
        }

        result
    }
}

/// Renderer for text styles to HTML.
pub struct HtmlStyleRenderer;

impl HtmlStyleRenderer {
    /// Renders one segment, colour span outermost.
    pub fn render_segment(segment: &TextSegment) -> String {
        let mut style = segment.style.clone();
        let content = match &segment.content {
            SegmentContent::Plain(text) | SegmentContent::Equation(text) => html_escape(text),
            SegmentContent::Mention(name) => {
                style.code = true;
                format!(" @{} ", name)
            }
        }
        .replace('\n', "<br>");

        let linked = match &style.link {
            Some(url) => format!("<a href=\"{}\">{}</a>", html_escape(url), content),
            None => content,
        };

        let styled = Self::apply_styles(linked, &style);
        Self::apply_color(styled, &style)
    }

    /// Wraps `content` in the style tags, `<b>` outermost.
    pub fn apply_styles(content: String, style: &TextStyle) -> String {
        let mut result = content;

        if style.code {
            result = format!("<code>{}</code>", result);
        }
        if style.underline {
            result = format!("<u>{}</u>", result);
        }
        if style.strikethrough {
            result = format!("<s>{}</s>", result);
        }
        if style.italic {
            result = format!("<i>{}</i>", result);
        }
        if style.bold {
            result = format!("<b>{}</b>", result);
        }

        result
    }

    fn apply_color(content: String, style: &TextStyle) -> String {
        if style.color.is_default() {
            return content;
        }
        let property = if style.color.is_background() {
            "background-color"
        } else {
            "color"
        };
        format!(
            "<span style=\"{}: {};\">{}</span>",
            property,
            html_escape(style.color.css_value()),
            content
        )
    }
}

/// Escapes the five HTML-reserved characters.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
