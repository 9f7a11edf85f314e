//! Markdown-subset renderer for answer text.
//!
//! Answers arrive as plain text with a small amount of Markdown-like
//! markup: `**bold**` spans, `### ` headings, and `* ` bullet lists.
//! [`render`] converts one answer into sanitized HTML. Escaping runs over
//! the whole input before any markup recognition, so raw `<`, `>`, and `&`
//! in answer text can never become live markup.
//!
//! This is deliberately not a Markdown implementation. The subset covers
//! what the answer service actually emits for short factual replies.

mod inline;
mod node;

use node::RenderNode;

/// Convert one answer's text into sanitized HTML.
///
/// Pure and deterministic, with no failure path: any input string renders
/// to some HTML string, and empty input renders to an empty string.
pub fn render(text: &str) -> String {
    let escaped = escape_html(text);
    let marked = inline::bold_spans(&escaped);
    to_html(&node::block_nodes(&marked))
}

/// Render a bot message's source URLs as a `<small>` block of links.
///
/// URLs are escaped exactly once, here; callers pass raw values. Empty
/// input produces an empty string.
pub fn render_sources(sources: &[String]) -> String {
    if sources.is_empty() {
        return String::new();
    }
    let links: Vec<String> = sources
        .iter()
        .map(|url| {
            let href = escape_html(url);
            format!("<a href=\"{href}\">{href}</a>")
        })
        .collect();
    format!("<small>Sources: {}</small>", links.join(", "))
}

/// Escape the four HTML-significant characters.
///
/// Runs before markup recognition; `&` must be first or it would re-escape
/// the other replacements.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn to_html(nodes: &[RenderNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            RenderNode::Paragraph(text) => {
                html.push_str("<p>");
                html.push_str(text);
                html.push_str("</p>");
            }
            RenderNode::Heading(level, text) => {
                html.push_str(&format!("<h{level}>{text}</h{level}>"));
            }
            RenderNode::ListStart => html.push_str("<ul>"),
            RenderNode::ListItem(text) => {
                html.push_str("<li>");
                html.push_str(text);
                html.push_str("</li>");
            }
            RenderNode::ListEnd => html.push_str("</ul>"),
        }
    }
    html
}
