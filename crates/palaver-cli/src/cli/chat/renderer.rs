//! Terminal rendering of answer HTML.
//!
//! The markup renderer produces HTML over a small fixed tag set. This
//! translates that HTML into styled terminal text: headings cyan, bold
//! runs bright, list items bulleted, source lines dim.

use console::style;

/// Translates answer HTML into ANSI-styled terminal text.
#[derive(Default)]
pub struct AnswerRenderer;

impl AnswerRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render one message's HTML to terminal text.
    ///
    /// Tags outside the fixed set are dropped rather than echoed, so
    /// unexpected markup degrades to plain text.
    pub fn render(&self, html: &str) -> String {
        let mut out = String::new();
        let mut strong = false;
        let mut heading = false;
        let mut dim = false;
        let mut rest = html;

        while let Some(open) = rest.find('<') {
            push_styled(&mut out, &rest[..open], strong, heading, dim);
            let Some(end) = rest[open..].find('>') else {
                // Unterminated tag: keep the remainder as text.
                push_styled(&mut out, &rest[open..], strong, heading, dim);
                return out;
            };
            let tag = &rest[open + 1..open + end];
            match tag {
                "p" | "ul" | "/ul" => {}
                "/p" | "/li" => out.push('\n'),
                "h4" => heading = true,
                "/h4" => {
                    heading = false;
                    out.push('\n');
                }
                "strong" => strong = true,
                "/strong" => strong = false,
                "li" => out.push_str("\u{2022} "),
                "small" => dim = true,
                "/small" => {
                    dim = false;
                    out.push('\n');
                }
                // <a> tags carry the URL as their text, so dropping the
                // tag keeps the link visible.
                _ => {}
            }
            rest = &rest[open + end + 1..];
        }
        push_styled(&mut out, rest, strong, heading, dim);
        out
    }
}

fn push_styled(out: &mut String, text: &str, strong: bool, heading: bool, dim: bool) {
    if text.is_empty() {
        return;
    }
    let text = unescape(text);
    if heading {
        out.push_str(&style(text).cyan().bold().to_string());
    } else if strong {
        out.push_str(&style(text).bold().to_string());
    } else if dim {
        out.push_str(&style(text).dim().to_string());
    } else {
        out.push_str(&text);
    }
}

/// Reverse the markup renderer's four entity escapes. `&amp;` goes last
/// so already-unescaped ampersands are not expanded twice.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
