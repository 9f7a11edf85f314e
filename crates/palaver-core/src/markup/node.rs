//! Block-level parsing: input lines to an intermediate node sequence.

/// One logical block of rendered output.
///
/// Produced line by line before HTML assembly. Every `ListStart` is
/// matched by a `ListEnd` before the sequence ends, and lists never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenderNode {
    Paragraph(String),
    Heading(u8, String),
    ListStart,
    ListItem(String),
    ListEnd,
}

/// Fold input lines into block nodes.
///
/// The machine has one piece of state: whether a list is open. Blank
/// lines, headings, and plain lines all close it. Markers are recognized
/// only as a prefix of the trimmed line, never mid-line; the heading
/// marker renders one level deeper than its hash count, matching the
/// answer service's house style.
pub(crate) fn block_nodes(text: &str) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    let mut in_list = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            close_list(&mut nodes, &mut in_list);
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            close_list(&mut nodes, &mut in_list);
            nodes.push(RenderNode::Heading(4, rest.to_string()));
        } else if let Some(rest) = trimmed.strip_prefix("* ") {
            if !in_list {
                nodes.push(RenderNode::ListStart);
                in_list = true;
            }
            nodes.push(RenderNode::ListItem(rest.to_string()));
        } else {
            close_list(&mut nodes, &mut in_list);
            nodes.push(RenderNode::Paragraph(line.to_string()));
        }
    }
    close_list(&mut nodes, &mut in_list);

    nodes
}

fn close_list(nodes: &mut Vec<RenderNode>, in_list: &mut bool) {
    if *in_list {
        nodes.push(RenderNode::ListEnd);
        *in_list = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_nodes() {
        assert!(block_nodes("").is_empty());
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        assert!(block_nodes("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_plain_line_is_paragraph() {
        assert_eq!(
            block_nodes("just text"),
            vec![RenderNode::Paragraph("just text".to_string())]
        );
    }

    #[test]
    fn test_heading_marker_is_level_four() {
        assert_eq!(
            block_nodes("### Fees"),
            vec![RenderNode::Heading(4, "Fees".to_string())]
        );
    }

    #[test]
    fn test_consecutive_bullets_open_one_list() {
        assert_eq!(
            block_nodes("* a\n* b"),
            vec![
                RenderNode::ListStart,
                RenderNode::ListItem("a".to_string()),
                RenderNode::ListItem("b".to_string()),
                RenderNode::ListEnd,
            ]
        );
    }

    #[test]
    fn test_open_list_closed_at_end_of_input() {
        let nodes = block_nodes("* only");
        assert_eq!(nodes.last(), Some(&RenderNode::ListEnd));
    }

    #[test]
    fn test_blank_line_closes_list() {
        assert_eq!(
            block_nodes("* a\n\n* b"),
            vec![
                RenderNode::ListStart,
                RenderNode::ListItem("a".to_string()),
                RenderNode::ListEnd,
                RenderNode::ListStart,
                RenderNode::ListItem("b".to_string()),
                RenderNode::ListEnd,
            ]
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        assert_eq!(
            block_nodes("* a\nplain"),
            vec![
                RenderNode::ListStart,
                RenderNode::ListItem("a".to_string()),
                RenderNode::ListEnd,
                RenderNode::Paragraph("plain".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_closes_list() {
        let nodes = block_nodes("* a\n### Next");
        assert_eq!(
            nodes,
            vec![
                RenderNode::ListStart,
                RenderNode::ListItem("a".to_string()),
                RenderNode::ListEnd,
                RenderNode::Heading(4, "Next".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_never_produces_list() {
        let nodes = block_nodes("### Title\ntext");
        assert!(!nodes.contains(&RenderNode::ListStart));
        assert_eq!(
            nodes,
            vec![
                RenderNode::Heading(4, "Title".to_string()),
                RenderNode::Paragraph("text".to_string()),
            ]
        );
    }

    #[test]
    fn test_markers_recognized_after_leading_whitespace() {
        assert_eq!(
            block_nodes("  * indented"),
            vec![
                RenderNode::ListStart,
                RenderNode::ListItem("indented".to_string()),
                RenderNode::ListEnd,
            ]
        );
    }

    #[test]
    fn test_mid_line_markers_not_recognized() {
        assert_eq!(
            block_nodes("see ### this and * that"),
            vec![RenderNode::Paragraph("see ### this and * that".to_string())]
        );
    }

    #[test]
    fn test_marker_without_trailing_space_is_plain_text() {
        assert_eq!(
            block_nodes("###Title\n*item"),
            vec![
                RenderNode::Paragraph("###Title".to_string()),
                RenderNode::Paragraph("*item".to_string()),
            ]
        );
    }

    #[test]
    fn test_lists_never_nest() {
        // A bullet inside a bullet's text stays inside the item.
        let nodes = block_nodes("* outer * inner");
        let starts = nodes
            .iter()
            .filter(|n| matches!(n, RenderNode::ListStart))
            .count();
        assert_eq!(starts, 1);
        assert_eq!(nodes[1], RenderNode::ListItem("outer * inner".to_string()));
    }

    #[test]
    fn test_every_list_start_has_matching_end() {
        let text = "* a\n* b\n\n### H\n* c\nplain\n* d";
        let nodes = block_nodes(text);
        let mut depth = 0i32;
        for node in &nodes {
            match node {
                RenderNode::ListStart => {
                    depth += 1;
                    assert_eq!(depth, 1);
                }
                RenderNode::ListEnd => {
                    depth -= 1;
                    assert_eq!(depth, 0);
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_paragraph_keeps_full_line() {
        // Marker detection trims, paragraph content does not.
        assert_eq!(
            block_nodes("  padded  "),
            vec![RenderNode::Paragraph("  padded  ".to_string())]
        );
    }
}
