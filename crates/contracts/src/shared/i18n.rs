//! Translation bundle exchanged between backend and frontend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Categories the backend knows how to serve.
pub const TRANSLATION_CATEGORIES: &[&str] = &["title", "ui"];

pub fn is_known_category(category: &str) -> bool {
    TRANSLATION_CATEGORIES.contains(&category)
}

/// Flat key -> text map for one language and category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationBundle {
    pub language: String,
    pub category: String,
    #[serde(default)]
    pub resources: BTreeMap<String, String>,
}

impl TranslationBundle {
    pub fn new(language: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            category: category.into(),
            resources: BTreeMap::new(),
        }
    }
}

/// API path of a translation bundle.
pub fn translations_path(language: &str, category: &str) -> String {
    format!("/api/translations/{}/{}", language, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("title"));
        assert!(is_known_category("ui"));
        assert!(!is_known_category("entity"));
    }

    #[test]
    fn test_translations_path() {
        assert_eq!(translations_path("en", "title"), "/api/translations/en/title");
    }

    #[test]
    fn test_bundle_without_resources_deserializes() {
        let bundle: TranslationBundle =
            serde_json::from_str(r#"{"language":"de","category":"title"}"#).unwrap();
        assert_eq!(bundle, TranslationBundle::new("de", "title"));
    }
}
