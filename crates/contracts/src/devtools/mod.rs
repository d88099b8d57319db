//! Developer tools panel catalogue.
//!
//! Tab order is the declaration order in pages.json.

mod pages_gen;

pub use pages_gen::{PAGES, PANEL};

use crate::shared::metadata::PageMetadata;

pub fn find_page(name: &str) -> Option<&'static PageMetadata> {
    PAGES.iter().find(|p| p.name == name)
}

pub fn page_index(name: &str) -> Option<usize> {
    PAGES.iter().position(|p| p.name == name)
}

pub fn page_names() -> impl Iterator<Item = &'static str> {
    PAGES.iter().map(|p| p.name)
}

pub fn panel_path() -> &'static str {
    PANEL.url_path
}

pub fn page_path(name: &str) -> String {
    PANEL.page_path(name)
}

pub fn default_page() -> &'static PageMetadata {
    // build.rs rejects a default_page that is not declared
    find_page(PANEL.default_page).unwrap_or(&PAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_keep_declared_order() {
        let names: Vec<_> = page_names().collect();
        assert_eq!(
            names,
            vec!["yaml", "state", "service", "template", "event", "statistics"]
        );
    }

    #[test]
    fn test_find_page_and_index() {
        assert_eq!(page_index("yaml"), Some(0));
        assert_eq!(page_index("statistics"), Some(5));
        assert_eq!(page_index("logs"), None);
        assert_eq!(find_page("service").map(|p| p.translation_key), Some("services"));
        assert!(find_page("").is_none());
    }

    #[test]
    fn test_paths() {
        assert_eq!(panel_path(), "/developer-tools");
        assert_eq!(page_path("template"), "/developer-tools/template");
        assert_eq!(default_page().name, "state");
    }

    #[test]
    fn test_translation_keys() {
        let state = find_page("state").unwrap();
        assert_eq!(state.title_key(), "ui.panel.developer-tools.tabs.states.title");
        assert_eq!(
            state.description_key(),
            "ui.panel.developer-tools.tabs.states.description"
        );
    }
}
