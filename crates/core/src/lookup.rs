//! Business lookup interface used by the wizard's search step.
//!
//! A lookup maps a free-text query (business name or phone number) to at
//! most one [`BusinessMatch`]. Implementations live where their data lives:
//! [`StaticDirectory`] here for demos and tests, the Postgres-backed lookup in
//! the db crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Base URL of the placeholder image service used for listing thumbnails.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/600x400/e2e8f0/475569";

/// Snapshot of a business shown on the verification step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessMatch {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: String,
}

impl BusinessMatch {
    /// Build a match whose image is the placeholder thumbnail for `name`.
    pub fn with_placeholder_image(
        name: impl Into<String>,
        address: Option<String>,
        phone: Option<String>,
    ) -> Self {
        let name = name.into();
        let image_url = placeholder_image_url(&name);
        Self {
            name,
            address,
            phone,
            image_url,
        }
    }
}

/// Placeholder thumbnail URL with the business name as caption.
///
/// Whitespace runs in the caption become `+`.
pub fn placeholder_image_url(name: &str) -> String {
    let caption = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("{PLACEHOLDER_IMAGE_BASE}?text={caption}")
}

/// Asynchronous search for an existing business.
///
/// `Ok(None)` means the query was well formed but nothing matched.
#[async_trait]
pub trait BusinessLookup: Send + Sync {
    async fn find_match(&self, query: &str) -> Result<Option<BusinessMatch>, CoreError>;
}

/// One entry of a [`StaticDirectory`].
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Lowercase keyword; a query containing it selects this entry.
    pub keyword: String,
    pub business: BusinessMatch,
}

/// In-memory lookup over a fixed list of businesses.
///
/// An entry matches when the lowercased query contains its keyword, or when
/// the digits of the query equal the digits of the entry's phone number.
/// Entries are tried in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: Vec<DirectoryEntry>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo directory: a single listing for "The Corner Cafe".
    pub fn demo() -> Self {
        Self::new().with_entry(
            "cafe",
            BusinessMatch::with_placeholder_image(
                "The Corner Cafe",
                Some("123 Main St, Anytown, USA".to_string()),
                Some("(555) 123-4567".to_string()),
            ),
        )
    }

    pub fn with_entry(mut self, keyword: &str, business: BusinessMatch) -> Self {
        self.entries.push(DirectoryEntry {
            keyword: keyword.to_lowercase(),
            business,
        });
        self
    }

    fn lookup(&self, query: &str) -> Option<&BusinessMatch> {
        let lowered = query.to_lowercase();
        let query_digits = digits(query);
        self.entries
            .iter()
            .find(|entry| {
                lowered.contains(&entry.keyword)
                    || (!query_digits.is_empty()
                        && entry
                            .business
                            .phone
                            .as_deref()
                            .is_some_and(|phone| digits(phone) == query_digits))
            })
            .map(|entry| &entry.business)
    }
}

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[async_trait]
impl BusinessLookup for StaticDirectory {
    async fn find_match(&self, query: &str) -> Result<Option<BusinessMatch>, CoreError> {
        Ok(self.lookup(query).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_replaces_spaces() {
        assert_eq!(
            placeholder_image_url("The Corner Cafe"),
            "https://placehold.co/600x400/e2e8f0/475569?text=The+Corner+Cafe"
        );
    }

    #[tokio::test]
    async fn demo_directory_matches_cafe_case_insensitively() {
        let dir = StaticDirectory::demo();
        let found = dir.find_match("corner CAFE downtown").await.unwrap();
        assert_eq!(found.map(|b| b.name), Some("The Corner Cafe".to_string()));
    }

    #[tokio::test]
    async fn demo_directory_matches_by_phone_digits() {
        let dir = StaticDirectory::demo();
        let found = dir.find_match("555.123.4567").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn unknown_query_is_not_found() {
        let dir = StaticDirectory::demo();
        assert_eq!(dir.find_match("Mike's Auto Repair").await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_directory_never_matches() {
        assert_eq!(StaticDirectory::new().find_match("cafe").await.unwrap(), None);
    }
}
