//! Normalized import model
//!
//! Every reader fills the same three mappings. Keys are unique within a
//! mapping and the first value written for a key is kept.

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Parametrization marker used by browsers in search URLs
pub const SEARCH_MARKER: &str = "%s";

/// Placeholder qutebrowser substitutes the search term into
pub const SEARCH_PLACEHOLDER: &str = "{}";

/// Insertion-ordered mapping where the first write for a key wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries(IndexMap<String, String>);

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.0.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything one read pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imported {
    /// URL -> title (possibly empty)
    pub bookmarks: Entries,
    /// Keyword -> URL without search marker
    pub keywords: Entries,
    /// Keyword -> URL template with a single `{}` placeholder
    pub search_engines: Entries,
}

impl Imported {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain bookmark. A missing title is stored as an empty string.
    pub fn add_bookmark(&mut self, url: &str, title: Option<&str>) -> bool {
        let added = self.bookmarks.insert(url, title.unwrap_or_default());
        if !added {
            log::debug!("Skipping duplicate bookmark: {}", url);
        }
        added
    }

    /// Add an entry bound to a keyword.
    ///
    /// URLs containing the search marker become search engines, anything
    /// else becomes a keyword.
    pub fn add_shortcut(&mut self, keyword: &str, url: &str) -> bool {
        let added = if url.contains(SEARCH_MARKER) {
            self.search_engines.insert(keyword, search_template(url))
        } else {
            self.keywords.insert(keyword, url)
        };
        if !added {
            log::debug!("Skipping duplicate keyword '{}': {}", keyword, url);
        }
        added
    }

    /// Classify an entry by its optional shortcut
    pub fn add_entry(&mut self, url: &str, shortcut: Option<&str>, title: Option<&str>) -> bool {
        match shortcut {
            Some(keyword) => self.add_shortcut(keyword, url),
            None => self.add_bookmark(url, title),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty() && self.keywords.is_empty() && self.search_engines.is_empty()
    }
}

/// Double literal braces so they survive qutebrowser's format substitution
pub fn search_escape(url: &str) -> String {
    url.replace('{', "{{").replace('}', "}}")
}

/// Turn a `%s` search URL into a qutebrowser search engine template
pub fn search_template(url: &str) -> String {
    search_escape(url).replace(SEARCH_MARKER, SEARCH_PLACEHOLDER)
}
