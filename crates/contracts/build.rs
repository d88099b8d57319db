//! Build script for generating pages_gen.rs from pages.json
//!
//! Every panel directory under src/ that carries a pages.json gets a
//! pages_gen.rs with static Rust constants next to it.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const PANEL_DIRS: &[&str] = &["src/devtools"];

fn main() {
    for dir in PANEL_DIRS {
        let path = Path::new(dir);
        let pages_json = path.join("pages.json");
        if !pages_json.exists() {
            println!(
                "cargo:warning=pages.json not found in {}, skipping generation",
                dir
            );
            continue;
        }

        println!("cargo:rerun-if-changed={}", pages_json.display());

        let output_rs = path.join("pages_gen.rs");
        if let Err(e) = generate_pages(&pages_json, &output_rs) {
            panic!("Failed to generate pages for {}: {}", dir, e);
        }
    }
}

/// pages.json layout this generator understands
const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

// ============================================================================
// JSON Schema Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct PanelJson {
    schema_version: String,
    panel_name: String,
    url_path: String,
    title_key: String,
    icon: Option<String>,
    default_page: String,
    pages: Vec<PageJson>,
}

#[derive(Debug, Deserialize)]
struct PageJson {
    name: String,
    translation_key: String,
    icon: Option<String>,
}

// ============================================================================
// Validation
// ============================================================================

fn validate(panel: &PanelJson) -> Result<(), String> {
    if panel.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version '{}', expected '{}'",
            panel.schema_version, SUPPORTED_SCHEMA_VERSION
        ));
    }
    if panel.pages.is_empty() {
        return Err(format!("panel '{}' declares no pages", panel.panel_name));
    }
    if !panel.url_path.starts_with('/') || panel.url_path.ends_with('/') {
        return Err(format!(
            "url_path '{}' must start with '/' and have no trailing '/'",
            panel.url_path
        ));
    }

    let mut seen = HashSet::new();
    for page in &panel.pages {
        if page.name.is_empty() || page.name.contains('/') {
            return Err(format!("invalid page name '{}'", page.name));
        }
        if !seen.insert(page.name.as_str()) {
            return Err(format!("duplicate page name '{}'", page.name));
        }
    }

    if !seen.contains(panel.default_page.as_str()) {
        return Err(format!(
            "default_page '{}' is not one of the declared pages",
            panel.default_page
        ));
    }
    Ok(())
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_pages(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let panel: PanelJson = serde_json::from_str(&json_content)?;
    validate(&panel)?;

    let code = generate_rust_code(&panel);

    // Skip the write when only the timestamp would change.
    if let Ok(existing) = fs::read_to_string(output_path) {
        if strip_header(&existing) == strip_header(&code) {
            return Ok(());
        }
    }
    fs::write(output_path, code)?;
    println!("cargo:warning=Generated: {}", output_path.display());

    Ok(())
}

fn strip_header(code: &str) -> &str {
    match code.find("#![allow(dead_code)]") {
        Some(pos) => &code[pos..],
        None => code,
    }
}

fn generate_rust_code(panel: &PanelJson) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM pages.json - DO NOT EDIT MANUALLY\n\
         // Generated: {}\n\
         // ============================================================================\n\n",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    ));

    code.push_str(
        "#![allow(dead_code)]\n\n\
         use crate::shared::metadata::{PageMetadata, PanelMetadata};\n\n",
    );

    code.push_str(&generate_panel_metadata(panel));
    code.push_str("\n\n");
    code.push_str(&generate_pages_array(&panel.pages));

    code
}

fn generate_panel_metadata(panel: &PanelJson) -> String {
    format!(
        "/// Panel metadata for {}\n\
         pub const PANEL: PanelMetadata = PanelMetadata {{\n\
         \x20   panel_name: \"{}\",\n\
         \x20   url_path: \"{}\",\n\
         \x20   title_key: \"{}\",\n\
         \x20   icon: {},\n\
         \x20   default_page: \"{}\",\n\
         }};",
        panel.panel_name,
        escape_string(&panel.panel_name),
        escape_string(&panel.url_path),
        escape_string(&panel.title_key),
        option_str(&panel.icon),
        escape_string(&panel.default_page),
    )
}

fn generate_pages_array(pages: &[PageJson]) -> String {
    let mut code =
        String::from("/// Pages in tab order\npub const PAGES: &[PageMetadata] = &[\n");

    for page in pages {
        code.push_str(&format!(
            "    PageMetadata {{\n\
             \x20       name: \"{}\",\n\
             \x20       translation_key: \"{}\",\n\
             \x20       icon: {},\n\
             \x20   }},\n",
            escape_string(&page.name),
            escape_string(&page.translation_key),
            option_str(&page.icon),
        ));
    }

    code.push_str("];\n");
    code
}

// ============================================================================
// Helper functions
// ============================================================================

fn option_str(opt: &Option<String>) -> String {
    match opt {
        Some(s) => format!("Some(\"{}\")", escape_string(s)),
        None => "None".to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
