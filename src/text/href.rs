//! Bookmarklet href normalization
//!
//! The body is kept verbatim: stripping comments or whitespace from
//! arbitrary scripts can change what they do (string contents, regex
//! literals, automatic semicolon insertion), so only the prefix and the
//! outer whitespace are normalized.

/// Scheme marker every bookmarklet starts with
pub const SCHEME: &str = "javascript:";

/// Drop every leading scheme marker (and the whitespace around them).
///
/// Schemes are case-insensitive, so `JavaScript:` is a marker too.
pub fn strip_scheme(code: &str) -> &str {
    let mut rest = code.trim_start();
    while rest.get(..SCHEME.len()).is_some_and(|p| p.eq_ignore_ascii_case(SCHEME)) {
        rest = rest[SCHEME.len()..].trim_start();
    }
    rest
}

/// Deployable `javascript:` URI for a snippet body.
///
/// Always starts with exactly one scheme marker, however many the input had.
pub fn minify_for_href(code: &str) -> String {
    let body = strip_scheme(code).trim_end();
    let mut out = String::with_capacity(SCHEME.len() + body.len());
    out.push_str(SCHEME);
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_count(s: &str) -> usize {
        s.to_ascii_lowercase().matches(SCHEME).count()
    }

    #[test]
    fn adds_missing_prefix() {
        assert_eq!(minify_for_href("alert(1);"), "javascript:alert(1);");
    }

    #[test]
    fn keeps_single_prefix() {
        let code = "javascript:(()=>{window.scrollTo({top:0});})();";
        assert_eq!(minify_for_href(code), code);
    }

    #[test]
    fn collapses_repeated_prefixes() {
        let out = minify_for_href("javascript:javascript: javascript:void(0)");
        assert_eq!(out, "javascript:void(0)");
        assert_eq!(prefix_count(&out), 1);
    }

    #[test]
    fn trims_outer_whitespace_only() {
        let out = minify_for_href("\n  javascript:(() => {\n    a = 'x  y';\n})();\n");
        assert_eq!(out, "javascript:(() => {\n    a = 'x  y';\n})();");
    }

    #[test]
    fn mixed_case_prefixes_collapse() {
        let out = minify_for_href("JavaScript:alert(1)");
        assert_eq!(out, "javascript:alert(1)");
        assert_eq!(prefix_count(&out), 1);

        let out = minify_for_href(" JAVASCRIPT: javascript:void(0)");
        assert_eq!(out, "javascript:void(0)");
    }

    #[test]
    fn strip_scheme_handles_short_multibyte_input() {
        assert_eq!(strip_scheme("é"), "é");
        assert_eq!(strip_scheme("javascript:'é'"), "'é'");
    }

    #[test]
    fn strip_scheme_leaves_body() {
        assert_eq!(strip_scheme("javascript:alert(1)"), "alert(1)");
        assert_eq!(strip_scheme("alert(1)"), "alert(1)");
    }
}
