// ============================================================================
// AUTO-GENERATED FROM pages.json - DO NOT EDIT MANUALLY
// Generated: 2026-10-19T09:12:44Z
// ============================================================================

#![allow(dead_code)]

use crate::shared::metadata::{PageMetadata, PanelMetadata};

/// Panel metadata for developer-tools
pub const PANEL: PanelMetadata = PanelMetadata {
    panel_name: "developer-tools",
    url_path: "/developer-tools",
    title_key: "panel.developer_tools",
    icon: Some("hammer"),
    default_page: "state",
};

/// Pages in tab order
pub const PAGES: &[PageMetadata] = &[
    PageMetadata {
        name: "yaml",
        translation_key: "yaml",
        icon: Some("file-code"),
    },
    PageMetadata {
        name: "state",
        translation_key: "states",
        icon: Some("list"),
    },
    PageMetadata {
        name: "service",
        translation_key: "services",
        icon: Some("play"),
    },
    PageMetadata {
        name: "template",
        translation_key: "templates",
        icon: Some("code"),
    },
    PageMetadata {
        name: "event",
        translation_key: "events",
        icon: Some("radio"),
    },
    PageMetadata {
        name: "statistics",
        translation_key: "statistics",
        icon: Some("bar-chart"),
    },
];
