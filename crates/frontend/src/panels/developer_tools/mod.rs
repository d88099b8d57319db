//! Developer tools panel
//!
//! Contains:
//! - `pages` - derivation of the selected tab from the URL and tab neighbours
//! - `panel` - header, toolbar, tab strip and swipe wiring
//! - `tab_strip` - the tab strip itself
//! - `router` - child router rendering the selected page
//! - `page_view` - frame every page is rendered in

pub mod page_view;
pub mod pages;
pub mod panel;
pub mod router;
pub mod tab_strip;

pub use panel::DeveloperToolsPanel;
pub use router::{DefaultPageRedirect, DeveloperToolsRouter};
