//! HTML escaping for text spliced into markup

/// Replace the five HTML-significant characters with entities.
///
/// Single pass, so an existing `&amp;` becomes `&amp;amp;` exactly once and
/// nothing is escaped twice.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;");
    }

    #[test]
    fn ampersand_not_double_escaped() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn script_tags_lose_angle_brackets() {
        let inputs = [
            "<script>alert(1)</script>",
            "before <script src='x'></script> after",
            "<<script>>",
        ];
        for input in inputs {
            let out = escape_html(input);
            assert!(!out.contains('<'), "{out}");
            assert!(!out.contains('>'), "{out}");
        }
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape_html("Scroll to Top"), "Scroll to Top");
        assert_eq!(escape_html(""), "");
    }
}
