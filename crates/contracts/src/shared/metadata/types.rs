//! Core metadata types for panels and pages

// ============================================================================
// Panel-level metadata
// ============================================================================

/// Metadata for a tabbed panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMetadata {
    pub panel_name: &'static str,
    /// Absolute URL path of the panel, without trailing '/'
    pub url_path: &'static str,
    pub title_key: &'static str,
    pub icon: Option<&'static str>,
    /// Page shown when the URL names no page or an unknown one
    pub default_page: &'static str,
}

impl PanelMetadata {
    /// URL of one of the panel's pages: `<url_path>/<page>`
    pub fn page_path(&self, page: &str) -> String {
        format!("{}/{}", self.url_path, page)
    }
}

// ============================================================================
// Page-level metadata
// ============================================================================

/// One tab of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    /// URL segment and tab identifier
    pub name: &'static str,
    /// Segment used in translation keys (may differ from `name`)
    pub translation_key: &'static str,
    pub icon: Option<&'static str>,
}

impl PageMetadata {
    pub fn title_key(&self) -> String {
        format!("ui.panel.developer-tools.tabs.{}.title", self.translation_key)
    }

    pub fn description_key(&self) -> String {
        format!(
            "ui.panel.developer-tools.tabs.{}.description",
            self.translation_key
        )
    }
}
