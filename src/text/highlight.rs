//! Display-only syntax highlighting for snippet previews
//!
//! A single forward scan splits the source into tokens, so text inside a
//! string literal or a comment is never re-classified as a keyword or a
//! number. Each token is escaped before it is wrapped.

use super::escape::escape_html;
use super::href::strip_scheme;

const KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while", "in", "of",
    "new", "this", "true", "false", "null", "undefined", "document", "window", "console",
    "try", "catch", "alert", "prompt",
];

/// Bytes after which a `/` opens a regex literal rather than a division
const REGEX_LEADERS: &[u8] = b"(,=:[!&|?{};";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Comment,
    /// String, template or regex literal
    String,
    Keyword,
    Number,
}

impl TokenKind {
    fn class(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Comment => Some("token comment"),
            Self::String => Some("token string"),
            Self::Keyword => Some("token keyword"),
            Self::Number => Some("token number"),
        }
    }
}

/// Preview markup for a snippet body.
pub fn syntax_highlight(code: &str) -> String {
    let display = dedent(strip_iife(strip_scheme(code)));
    let mut out = String::with_capacity(display.len() * 2);
    for (kind, text) in tokenize(&display) {
        match kind.class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&escape_html(text));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_html(text)),
        }
    }
    out
}

/// Split `src` into classified slices that concatenate back to `src`.
pub fn tokenize(src: &str) -> Vec<(TokenKind, &str)> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut prev: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        let token = match b {
            b'/' if next == Some(b'/') => Some((TokenKind::Comment, line_end(bytes, i))),
            b'/' if next == Some(b'*') => Some((TokenKind::Comment, block_comment_end(bytes, i))),
            b'/' if prev.is_none_or(|p| REGEX_LEADERS.contains(&p)) => {
                regex_end(bytes, i).map(|end| (TokenKind::String, end))
            }
            b'\'' | b'"' | b'`' => Some((TokenKind::String, string_end(bytes, i, b))),
            _ if is_ident_byte(b) => {
                let end = ident_end(bytes, i);
                let word = &src[i..end];
                if word.bytes().all(|c| c.is_ascii_digit()) {
                    Some((TokenKind::Number, end))
                } else if KEYWORDS.contains(&word) {
                    Some((TokenKind::Keyword, end))
                } else {
                    prev = Some(bytes[end - 1]);
                    i = end;
                    continue;
                }
            }
            _ => None,
        };

        match token {
            Some((kind, end)) => {
                if plain_start < i {
                    tokens.push((TokenKind::Plain, &src[plain_start..i]));
                }
                tokens.push((kind, &src[i..end]));
                prev = Some(bytes[end - 1]);
                i = end;
                plain_start = end;
            }
            None => {
                if !b.is_ascii_whitespace() {
                    prev = Some(b);
                }
                i += 1;
            }
        }
    }

    if plain_start < bytes.len() {
        tokens.push((TokenKind::Plain, &src[plain_start..]));
    }
    tokens
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn ident_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    i
}

fn line_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |p| start + p)
}

fn block_comment_end(bytes: &[u8], start: usize) -> usize {
    let body = start + 2;
    bytes
        .get(body..)
        .and_then(|rest| rest.windows(2).position(|w| w == b"*/"))
        .map_or(bytes.len(), |p| body + p + 2)
}

/// End of a quoted literal; unterminated literals run to the end of input.
fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            // only template literals may span lines
            b'\n' if quote != b'`' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// End of a regex literal including flags, or `None` when no closing slash
/// appears on the same line.
fn regex_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return None,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                let mut end = i + 1;
                while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
                    end += 1;
                }
                return Some(end);
            }
            _ => i += 1,
        }
    }
    None
}

/// Remove one `(() => { ... })()` or `(function (...) { ... })()` wrapper.
fn strip_iife(code: &str) -> &str {
    let trimmed = code.trim();
    let Some(head) = iife_head_len(trimmed) else {
        return trimmed;
    };
    let tail = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
    match tail.strip_suffix("})()") {
        Some(inner) if inner.len() >= head => inner[head..].trim(),
        _ => trimmed,
    }
}

fn iife_head_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('(')?.trim_start();
    let after = if let Some(r) = rest.strip_prefix("()") {
        r.trim_start().strip_prefix("=>")?
    } else {
        let r = rest.strip_prefix("function")?.trim_start();
        let open = r.find('(')?;
        if !r[..open].trim_end().bytes().all(is_ident_byte) {
            return None;
        }
        let close = open + r[open..].find(')')?;
        &r[close + 1..]
    };
    let body = after.trim_start().strip_prefix('{')?;
    Some(s.len() - body.len())
}

/// Remove the indentation shared by every line after the first.
fn dedent(code: &str) -> String {
    let mut lines = code.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };
    let rest: Vec<&str> = lines.collect();
    let indent = rest
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(code.len());
    out.push_str(first);
    for line in rest {
        out.push('\n');
        out.push_str(line.get(indent..).unwrap_or_else(|| line.trim_start()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        tokenize(src).into_iter().filter(|(k, _)| *k != TokenKind::Plain).collect()
    }

    #[test]
    fn tokens_cover_input() {
        let src = "const a = 'if'; // for\nreturn 42;";
        let joined: String = tokenize(src).iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, src);
    }

    #[test]
    fn keyword_inside_string_stays_string() {
        assert_eq!(
            kinds("alert('return this');"),
            vec![(TokenKind::Keyword, "alert"), (TokenKind::String, "'return this'")]
        );
    }

    #[test]
    fn comments_swallow_keywords() {
        assert_eq!(kinds("// const x = 1"), vec![(TokenKind::Comment, "// const x = 1")]);
        assert_eq!(
            kinds("/* let */ let"),
            vec![(TokenKind::Comment, "/* let */"), (TokenKind::Keyword, "let")]
        );
    }

    #[test]
    fn numbers_need_word_boundaries() {
        assert_eq!(
            kinds("top: 0, w: 2px, h1"),
            vec![(TokenKind::Number, "0")]
        );
    }

    #[test]
    fn regex_literal_not_read_as_comment_or_string() {
        let src = "t.replace(/\"/g, 'x') / 2";
        assert_eq!(
            kinds(src),
            vec![
                (TokenKind::String, "/\"/g"),
                (TokenKind::String, "'x'"),
                (TokenKind::Number, "2"),
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        assert_eq!(kinds(r"'it\'s'"), vec![(TokenKind::String, r"'it\'s'")]);
    }

    #[test]
    fn strips_arrow_iife_and_prefix() {
        let html = syntax_highlight("javascript:(() => {\n    window.scrollTo({ top: 0 });\n})();");
        assert_eq!(
            html,
            "<span class=\"token keyword\">window</span>.scrollTo({ top: <span class=\"token number\">0</span> });"
        );
    }

    #[test]
    fn strips_function_iife() {
        let html = syntax_highlight("javascript:(function () { go(); })()");
        assert_eq!(html, "go();");
    }

    #[test]
    fn leaves_non_iife_code() {
        assert_eq!(syntax_highlight("javascript:go();"), "go();");
    }

    #[test]
    fn dedents_body() {
        let html = syntax_highlight("(() => {\n    a();\n    if (b) {\n        c();\n    }\n})();");
        assert_eq!(
            html,
            "a();\n<span class=\"token keyword\">if</span> (b) {\n    c();\n}"
        );
    }

    #[test]
    fn output_is_html_safe() {
        let html = syntax_highlight("document.body.innerHTML = '<b>x</b>';");
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn plain_runs_escaped_after_mixed_case_prefix() {
        assert_eq!(syntax_highlight("JavaScript:a < b && c"), "a &lt; b &amp;&amp; c");
    }
}
