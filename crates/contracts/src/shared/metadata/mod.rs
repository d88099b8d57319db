//! Metadata types for describing panels and their pages
//!
//! All types use 'static lifetimes for zero-cost access to compile-time
//! constants generated by build.rs from pages.json.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::devtools::{PAGES, PANEL};
//!
//! println!("Panel: {}", PANEL.url_path);
//! for page in PAGES {
//!     println!("{} -> {}", page.name, page.title_key());
//! }
//! ```

mod types;

pub use types::{PageMetadata, PanelMetadata};
