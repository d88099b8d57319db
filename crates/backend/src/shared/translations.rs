//! Translation bundles served to the frontend.
//!
//! Files live in `<dir>/<language>/<category>.json` as flat key -> text
//! objects. The default language is always loaded first and the requested
//! language is laid over it, so partially translated languages fall back
//! key by key.

use contracts::shared::i18n::{is_known_category, TranslationBundle};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

const EMBEDDED_EN_TITLE: &str = include_str!("../../translations/en/title.json");
const EMBEDDED_EN_UI: &str = include_str!("../../translations/en/ui.json");

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("unknown translation category: {0}")]
    UnknownCategory(String),

    #[error("invalid language tag: {0}")]
    InvalidLanguage(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `xx` or `xx-YY` / `xx-Hant` style tags. Also keeps path segments safe.
pub fn is_valid_language(tag: &str) -> bool {
    let mut parts = tag.splitn(2, '-');
    let primary = parts.next().unwrap_or_default();
    let primary_ok = primary.len() == 2 && primary.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = match parts.next() {
        None => true,
        Some(region) => {
            (2..=4).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphabetic())
        }
    };
    primary_ok && region_ok
}

#[derive(Debug, Clone)]
pub struct TranslationStore {
    dir: PathBuf,
    default_language: String,
}

impl TranslationStore {
    pub fn new(dir: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            default_language: default_language.into(),
        }
    }

    pub async fn bundle(
        &self,
        language: &str,
        category: &str,
    ) -> Result<TranslationBundle, TranslationError> {
        if !is_valid_language(language) {
            return Err(TranslationError::InvalidLanguage(language.to_string()));
        }
        if !is_known_category(category) {
            return Err(TranslationError::UnknownCategory(category.to_string()));
        }

        let mut resources = match self.load_file(&self.default_language, category).await? {
            Some(resources) => resources,
            None => embedded_defaults(category),
        };

        if language != self.default_language {
            match self.load_file(language, category).await {
                Ok(Some(overlay)) => resources.extend(overlay),
                Ok(None) => tracing::debug!(
                    "no {} translations for '{}', serving {}",
                    category,
                    language,
                    self.default_language
                ),
                Err(e) => tracing::warn!("{}; serving {} texts", e, self.default_language),
            }
        }

        Ok(TranslationBundle {
            language: language.to_string(),
            category: category.to_string(),
            resources,
        })
    }

    /// Ok(None) when the file does not exist.
    async fn load_file(
        &self,
        language: &str,
        category: &str,
    ) -> Result<Option<BTreeMap<String, String>>, TranslationError> {
        let path = self.dir.join(language).join(format!("{}.json", category));
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(TranslationError::Io { path, source }),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| TranslationError::Parse { path, source })
    }
}

fn embedded_defaults(category: &str) -> BTreeMap<String, String> {
    let raw = match category {
        "title" => EMBEDDED_EN_TITLE,
        "ui" => EMBEDDED_EN_UI,
        _ => return BTreeMap::new(),
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::error!("embedded {} translations are invalid: {}", category, e);
        BTreeMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Fresh translations dir under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("translations-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn shipped_store() -> TranslationStore {
        TranslationStore::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("translations"),
            "en",
        )
    }

    #[test]
    fn test_language_validation() {
        assert!(is_valid_language("en"));
        assert!(is_valid_language("pt-BR"));
        assert!(is_valid_language("zh-Hant"));
        assert!(!is_valid_language("EN"));
        assert!(!is_valid_language("eng"));
        assert!(!is_valid_language("en-"));
        assert!(!is_valid_language("../etc"));
        assert!(!is_valid_language(""));
    }

    #[test]
    fn test_embedded_defaults_parse() {
        assert_eq!(
            embedded_defaults("title").get("panel.developer_tools").map(String::as_str),
            Some("Developer tools")
        );
        assert!(!embedded_defaults("ui").is_empty());
        assert!(embedded_defaults("other").is_empty());
    }

    #[tokio::test]
    async fn test_default_language_bundle() {
        let bundle = shipped_store().bundle("en", "ui").await.unwrap();
        assert_eq!(bundle.language, "en");
        assert_eq!(bundle.category, "ui");
        assert_eq!(
            bundle
                .resources
                .get("ui.panel.developer-tools.tabs.states.title")
                .map(String::as_str),
            Some("States")
        );
    }

    #[tokio::test]
    async fn test_partial_language_falls_back_per_key() {
        let bundle = shipped_store().bundle("de", "ui").await.unwrap();
        assert_eq!(
            bundle
                .resources
                .get("ui.panel.developer-tools.tabs.states.title")
                .map(String::as_str),
            Some("Zustände")
        );
        // not translated to German
        assert_eq!(
            bundle
                .resources
                .get("ui.panel.developer-tools.tabs.states.description")
                .map(String::as_str),
            Some("Inspect and temporarily override entity states.")
        );
    }

    #[tokio::test]
    async fn test_missing_language_serves_default() {
        let bundle = shipped_store().bundle("fr", "title").await.unwrap();
        assert_eq!(bundle.language, "fr");
        assert_eq!(
            bundle.resources.get("panel.developer_tools").map(String::as_str),
            Some("Developer tools")
        );
    }

    #[tokio::test]
    async fn test_missing_directory_uses_embedded_defaults() {
        let store = TranslationStore::new("does/not/exist", "en");
        let bundle = store.bundle("en", "title").await.unwrap();
        assert_eq!(
            bundle.resources.get("panel.developer_tools").map(String::as_str),
            Some("Developer tools")
        );
    }

    #[tokio::test]
    async fn test_rejected_requests() {
        let store = shipped_store();
        assert!(matches!(
            store.bundle("en", "entity").await,
            Err(TranslationError::UnknownCategory(_))
        ));
        assert!(matches!(
            store.bundle("..", "ui").await,
            Err(TranslationError::InvalidLanguage(_))
        ));
    }

    #[tokio::test]
    async fn test_broken_overlay_serves_default_language() {
        let dir = scratch_dir("broken-overlay");
        std::fs::create_dir_all(dir.join("en")).unwrap();
        std::fs::create_dir_all(dir.join("de")).unwrap();
        std::fs::write(dir.join("en/title.json"), r#"{"panel.developer_tools":"Developer tools"}"#)
            .unwrap();
        std::fs::write(dir.join("de/title.json"), "{not json").unwrap();

        let bundle = TranslationStore::new(dir.clone(), "en").bundle("de", "title").await.unwrap();
        assert_eq!(bundle.language, "de");
        assert_eq!(
            bundle.resources.get("panel.developer_tools").map(String::as_str),
            Some("Developer tools")
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_broken_default_language_is_error() {
        let dir = scratch_dir("broken-default");
        std::fs::create_dir_all(dir.join("en")).unwrap();
        std::fs::write(dir.join("en/ui.json"), "[1, 2]").unwrap();

        let result = TranslationStore::new(dir.clone(), "en").bundle("en", "ui").await;
        assert!(matches!(result, Err(TranslationError::Parse { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
