//! Inline markup: the bold substitution pass.

/// Replace paired `**...**` spans with `<strong>` tags.
///
/// Pairing is non-greedy, first match, left to right: an opener takes the
/// nearest closer that leaves at least one character of content on the
/// same line. Markers with no such closer stay literal asterisks. Runs on
/// already-escaped text, before line splitting.
pub(crate) fn bold_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        match closer_offset(after) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str("<strong>");
                out.push_str(&after[..close]);
                out.push_str("</strong>");
                rest = &after[close + 2..];
            }
            None => {
                out.push_str(&rest[..open + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset in `content` of the first `**` that closes a non-empty,
/// single-line span.
fn closer_offset(content: &str) -> Option<usize> {
    let first = content.chars().next()?;
    if first == '\n' {
        return None;
    }
    let start = first.len_utf8();
    let offset = content[start..].find("**").map(|i| i + start)?;
    if content[..offset].contains('\n') {
        return None;
    }
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_markers_become_strong() {
        assert_eq!(bold_spans("**bold** word"), "<strong>bold</strong> word");
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(
            bold_spans("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_unpaired_marker_stays_literal() {
        assert_eq!(bold_spans("a ** b"), "a ** b");
    }

    #[test]
    fn test_trailing_marker_stays_literal() {
        assert_eq!(bold_spans("**a** tail**"), "<strong>a</strong> tail**");
    }

    #[test]
    fn test_four_asterisks_stay_literal() {
        assert_eq!(bold_spans("****"), "****");
    }

    #[test]
    fn test_three_asterisks_stay_literal() {
        assert_eq!(bold_spans("***"), "***");
    }

    #[test]
    fn test_pairing_is_non_greedy() {
        // The first closer wins; the third marker is left over.
        assert_eq!(
            bold_spans("**a** b **c"),
            "<strong>a</strong> b **c"
        );
    }

    #[test]
    fn test_span_may_contain_single_asterisks() {
        assert_eq!(bold_spans("**a * b**"), "<strong>a * b</strong>");
    }

    #[test]
    fn test_span_does_not_cross_lines() {
        assert_eq!(bold_spans("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_pairing_resumes_after_line_break() {
        assert_eq!(
            bold_spans("**a\nb** c **d**"),
            "**a\nb<strong> c </strong>d**"
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(bold_spans("**café**"), "<strong>café</strong>");
    }

    #[test]
    fn test_multibyte_single_char_content() {
        assert_eq!(bold_spans("**é**"), "<strong>é</strong>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(bold_spans(""), "");
    }

    #[test]
    fn test_no_markers_passes_through() {
        assert_eq!(bold_spans("plain text"), "plain text");
    }
}
