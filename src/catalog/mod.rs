//! Snippet catalog - the static set of bookmarklets the gallery renders
//!
//! Loaded once at startup and never written to afterwards.
//! Insertion order is render order.

pub mod builtins;
pub mod entry;

pub use entry::SnippetEntry;

/// Ordered mapping of slug to entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetCatalog {
    entries: Vec<SnippetEntry>,
}

impl SnippetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the built-in bookmarklets
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for entry in builtins::builtin_snippets() {
            catalog.add(entry);
        }
        catalog
    }

    /// Insert an entry; an entry with the same slug is replaced in place.
    pub fn add(&mut self, entry: SnippetEntry) {
        match self.entries.iter_mut().find(|e| e.slug == entry.slug) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&SnippetEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnippetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::href::SCHEME;

    #[test]
    fn builtins_have_unique_slugs() {
        let catalog = SnippetCatalog::with_builtins();
        assert_eq!(catalog.len(), builtins::builtin_snippets().len());
    }

    #[test]
    fn every_payload_has_one_prefix() {
        for entry in SnippetCatalog::with_builtins().iter() {
            let payload = entry.payload();
            assert!(payload.starts_with(SCHEME), "{}", entry.slug);
            assert!(!payload[SCHEME.len()..].starts_with(SCHEME), "{}", entry.slug);
        }
    }

    #[test]
    fn add_replaces_same_slug_in_place() {
        let mut catalog = SnippetCatalog::new();
        catalog.add(SnippetEntry::new("a", "A", "", "1"));
        catalog.add(SnippetEntry::new("b", "B", "", "2"));
        catalog.add(SnippetEntry::new("a", "A2", "", "3"));
        let titles: Vec<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A2", "B"]);
    }

    #[test]
    fn get_by_slug() {
        let catalog = SnippetCatalog::with_builtins();
        assert_eq!(catalog.get("scroll-to-top").map(|e| e.title.as_str()), Some("Scroll to Top"));
        assert!(catalog.get("missing").is_none());
    }
}
