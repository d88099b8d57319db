//! Localization: translation table, `Localizer` context and backend loading.
//!
//! English texts are embedded at build time; bundles fetched from the
//! backend are merged on top of them.

use crate::shared::api_utils::api_url;
use contracts::shared::i18n::{translations_path, TranslationBundle, DEFAULT_LANGUAGE};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};

const EMBEDDED_EN: &str = include_str!("../../i18n/en.json");

/// Flat map of dotted keys to texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parse a (possibly nested) JSON object; nested keys are joined with '.'.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), &value);
        Ok(Self { entries })
    }

    pub fn embedded_defaults() -> Self {
        match Self::from_json(EMBEDDED_EN) {
            Ok(table) => table,
            Err(e) => {
                log::error!("embedded translations are invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Merge texts into the table; incoming entries win.
    pub fn merge<I>(&mut self, resources: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(resources);
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(out, key, v);
            }
        }
        serde_json::Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        // numbers, bools and nulls are not texts
        _ => {}
    }
}

/// Primary language subtag, lowercased: "de-AT" -> "de".
pub fn normalize_language(tag: &str) -> String {
    let primary = tag.split(['-', '_']).next().unwrap_or_default().trim();
    if primary.len() == 2 && primary.chars().all(|c| c.is_ascii_alphabetic()) {
        primary.to_ascii_lowercase()
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}

fn browser_language() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|tag| normalize_language(&tag))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Fetch one translation bundle from the backend.
pub async fn fetch_bundle(language: &str, category: &str) -> Result<TranslationBundle, String> {
    let path = translations_path(
        &urlencoding::encode(language),
        &urlencoding::encode(category),
    );
    let response = Request::get(&api_url(&path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<TranslationBundle>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Localization context shared by the whole app.
#[derive(Clone, Copy)]
pub struct Localizer {
    pub language: RwSignal<String>,
    table: RwSignal<TranslationTable>,
    requested: RwSignal<HashSet<String>>,
}

impl Localizer {
    pub fn new() -> Self {
        Self::with_language(browser_language())
    }

    pub fn with_language(language: String) -> Self {
        Self {
            language: RwSignal::new(language),
            table: RwSignal::new(TranslationTable::embedded_defaults()),
            requested: RwSignal::new(HashSet::new()),
        }
    }

    /// Text for `key`; the key itself when no translation is known.
    pub fn localize(&self, key: &str) -> String {
        let text = self.table.with(|t| t.get(key).map(str::to_string));
        text.unwrap_or_else(|| {
            log::debug!("missing translation: {}", key);
            key.to_string()
        })
    }

    /// Load a category from the backend once. Failed loads may be retried.
    pub fn load_backend_translation(&self, category: &str) {
        let category = category.to_string();
        let first_request = self
            .requested
            .try_update(|requested| requested.insert(category.clone()))
            .unwrap_or(false);
        if !first_request {
            return;
        }

        let this = *self;
        let language = self.language.get_untracked();
        spawn_local(async move {
            match fetch_bundle(&language, &category).await {
                Ok(bundle) => {
                    log::info!(
                        "loaded {} translations for {}/{}",
                        bundle.resources.len(),
                        bundle.language,
                        bundle.category
                    );
                    this.table.update(|t| t.merge(bundle.resources));
                }
                Err(e) => {
                    log::warn!(
                        "failed to load translations {}/{}: {}",
                        language,
                        category,
                        e
                    );
                    this.requested.update(|requested| {
                        requested.remove(&category);
                    });
                }
            }
        });
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_localizer() -> Localizer {
    use_context::<Localizer>().expect("Localizer context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_cover_tab_titles() {
        let table = TranslationTable::from_json(EMBEDDED_EN).unwrap();
        for page in contracts::devtools::PAGES {
            assert!(
                table.get(&page.title_key()).is_some(),
                "missing {}",
                page.title_key()
            );
        }
        assert_eq!(table.get("panel.developer_tools"), Some("Developer tools"));
    }

    #[test]
    fn test_nested_keys_are_flattened() {
        let table =
            TranslationTable::from_json(r#"{"a":{"b":{"c":"x"},"d":"y"},"n":1}"#).unwrap();
        assert_eq!(table.get("a.b.c"), Some("x"));
        assert_eq!(table.get("a.d"), Some("y"));
        assert_eq!(table.get("n"), None);
    }

    #[test]
    fn test_merge_overrides_existing() {
        let mut table = TranslationTable::from_json(r#"{"k":"old","keep":"v"}"#).unwrap();
        table.merge(vec![("k".to_string(), "new".to_string())]);
        assert_eq!(table.get("k"), Some("new"));
        assert_eq!(table.get("keep"), Some("v"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(TranslationTable::from_json("{not json").is_err());
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("de-AT"), "de");
        assert_eq!(normalize_language("PT_br"), "pt");
        assert_eq!(normalize_language("en"), "en");
        assert_eq!(normalize_language(""), "en");
        assert_eq!(normalize_language("zzz"), "en");
    }
}
