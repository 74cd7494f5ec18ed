//! SnippetEntry - one bookmarklet in the catalog

use crate::text;

/// A single bookmarklet
///
/// `code` is the browser-executable body, conventionally already carrying
/// the `javascript:` prefix. The copy/drag payload is always derived from it
/// through [`text::minify_for_href`], never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetEntry {
    /// Unique key, also used in the usage storage key
    pub slug: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl SnippetEntry {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            code: code.into(),
            category: None,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// What gets written to the clipboard or the drag payload
    pub fn payload(&self) -> String {
        text::minify_for_href(&self.code)
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() { "Bookmarklet" } else { &self.title }
    }

    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description available."
        } else {
            &self.description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_prefixed_once() {
        let entry = SnippetEntry::new("x", "X", "", "alert(1)");
        assert_eq!(entry.payload(), "javascript:alert(1)");
    }

    #[test]
    fn blank_fields_fall_back() {
        let entry = SnippetEntry::new("x", " ", "", "alert(1)");
        assert_eq!(entry.display_title(), "Bookmarklet");
        assert_eq!(entry.display_description(), "No description available.");
    }

    #[test]
    fn builder_sets_category_and_tags() {
        let entry = SnippetEntry::new("x", "X", "d", "c")
            .with_category("page")
            .with_tags(["a", "b"]);
        assert_eq!(entry.category.as_deref(), Some("page"));
        assert_eq!(entry.tags, vec!["a".to_string(), "b".to_string()]);
    }
}
