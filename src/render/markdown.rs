//! Abstract and biography text conversion.
//!
//! Abstracts arrive as pretalx rich text: HTML fragments mixed with raw
//! `\r\n` line breaks. The page body gets a full HTML to Markdown
//! conversion, while single-line front-matter fields only get their line
//! breaks turned into `<br/>`.

/// Convert an HTML fragment into Markdown for the page body
pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html)
}

/// Replace `\r\n` sequences with `<br/>` so the text fits on one line
pub fn line_breaks_to_br(text: &str) -> String {
    text.replace("\r\n", "<br/>")
}

/// Empty every line that holds nothing but spaces or tabs.
///
/// Applied to the whole rendered document. Line endings are left as they
/// are, so a whitespace line ending in `\r` is kept untouched.
pub fn normalize_blank_lines(document: &str) -> String {
    document
        .split('\n')
        .map(|line| {
            if !line.is_empty() && line.chars().all(|c| c == ' ' || c == '\t') {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_to_br() {
        assert_eq!(line_breaks_to_br("Line1\r\nLine2"), "Line1<br/>Line2");
        // A bare \n is not a pretalx line break
        assert_eq!(line_breaks_to_br("a\nb"), "a\nb");
        assert_eq!(line_breaks_to_br(""), "");
    }

    #[test]
    fn test_html_to_markdown_emphasis_and_links() {
        let md = html_to_markdown(
            r#"<p>Hello <strong>world</strong>, see <a href="https://docs.rs">docs</a></p>"#,
        );
        assert!(md.contains("**world**"), "got: {md}");
        assert!(md.contains("[docs](https://docs.rs)"), "got: {md}");
        assert!(!md.contains("<p>"));
    }

    #[test]
    fn test_plain_text_survives_conversion() {
        let md = html_to_markdown("Line1\r\nLine2");
        assert!(md.contains("Line1"));
        assert!(md.contains("Line2"));
    }

    #[test]
    fn test_normalize_blank_lines() {
        assert_eq!(normalize_blank_lines("a\n   \nb\n\t\n"), "a\n\nb\n\n");
        assert_eq!(normalize_blank_lines("  indented\n"), "  indented\n");
        assert_eq!(normalize_blank_lines(" \r\n"), " \r\n");
    }
}
