//! Transcript export as a standalone HTML document.
//!
//! Produces a self-contained page: inline styles, one block per turn, bot
//! text through the markup renderer, sources as links. Used by the
//! `export` command and the `/export` chat command.

use palaver_types::message::{Sender, TranscriptSnapshot};

use crate::markup;

const EXPORT_STYLES: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem;background:#fafafa;color:#1a1a1a;}\
h1{font-size:1.3rem;border-bottom:1px solid #ddd;padding-bottom:0.5rem;}\
.turn{margin:1rem 0;padding:0.75rem 1rem;border-radius:8px;}\
.turn.user{background:#e8f0fe;}\
.turn.bot{background:#fff;border:1px solid #e0e0e0;}\
.turn .who{font-weight:bold;margin-bottom:0.25rem;}\
.turn small{display:block;margin-top:0.5rem;color:#666;}\
.turn .confidence{margin-top:0.25rem;font-size:0.8rem;color:#999;}\
footer{margin-top:2rem;font-size:0.8rem;color:#999;}";

/// Build a standalone HTML document for a transcript.
///
/// Bot text is rendered through [`markup::render`]; user text and the
/// assistant name are escaped verbatim.
pub fn transcript_html(snapshot: &TranscriptSnapshot, assistant_name: &str) -> String {
    let mut body = String::new();
    for message in &snapshot.messages {
        match message.sender {
            Sender::User => {
                body.push_str("<div class=\"turn user\"><div class=\"who\">You</div><p>");
                body.push_str(&markup::escape_html(&message.text));
                body.push_str("</p></div>\n");
            }
            Sender::Bot => {
                body.push_str("<div class=\"turn bot\"><div class=\"who\">");
                body.push_str(&markup::escape_html(assistant_name));
                body.push_str("</div>");
                body.push_str(&markup::render(&message.text));
                body.push_str(&markup::render_sources(&message.sources));
                if let Some(confidence) = message.confidence {
                    body.push_str(&format!(
                        "<div class=\"confidence\">Confidence: {:.0}%</div>",
                        confidence * 100.0
                    ));
                }
                body.push_str("</div>\n");
            }
        }
    }

    let title = format!("{} transcript", markup::escape_html(assistant_name));
    let saved = snapshot.saved_at.format("%Y-%m-%d %H:%M UTC");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{EXPORT_STYLES}</style>
</head>
<body>
<h1>{title}</h1>
{body}<footer>Saved {saved}</footer>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use palaver_types::message::Message;

    fn snapshot_of(messages: Vec<Message>) -> TranscriptSnapshot {
        TranscriptSnapshot {
            messages,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_transcript_is_still_a_document() {
        let html = transcript_html(&snapshot_of(Vec::new()), "Assistant");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Assistant transcript</title>"));
        assert!(!html.contains("class=\"turn"));
    }

    #[test]
    fn test_turns_render_in_order_with_markup() {
        let html = transcript_html(
            &snapshot_of(vec![
                Message::user("what about fees?"),
                Message::bot(
                    "### Fees\n* **Tuition:** posted online",
                    vec!["https://example.edu/fees".to_string()],
                    Some(0.87),
                ),
            ]),
            "Campus Guide",
        );

        let user_at = html.find("what about fees?").unwrap();
        let bot_at = html.find("<h4>Fees</h4>").unwrap();
        assert!(user_at < bot_at);
        assert!(html.contains("<li><strong>Tuition:</strong> posted online</li>"));
        assert!(html.contains("<a href=\"https://example.edu/fees\">"));
        assert!(html.contains("Confidence: 87%"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = transcript_html(
            &snapshot_of(vec![Message::user("<script>alert(1)</script>")]),
            "Assistant",
        );
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_assistant_name_is_escaped() {
        let html = transcript_html(
            &snapshot_of(vec![Message::bot("hi", Vec::new(), None)]),
            "R&D Desk",
        );
        assert!(html.contains("R&amp;D Desk"));
    }

    #[test]
    fn test_confidence_omitted_when_absent() {
        let html = transcript_html(
            &snapshot_of(vec![Message::bot("hi", Vec::new(), None)]),
            "Assistant",
        );
        assert!(!html.contains("confidence\""));
    }
}
