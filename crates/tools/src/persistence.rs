//! Reading and writing map documents on disk.
//!
//! Documents are written with two-space indentation. Field and block order
//! is preserved end to end.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use blockmap_engine::document::BlockDocument;

/// Load and parse a map document.
pub fn load_document(path: &Path) -> Result<BlockDocument> {
    let start = Instant::now();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    let document = BlockDocument::from_value(value)
        .with_context(|| format!("loading {}", path.display()))?;

    tracing::info!(
        "Loaded {} ({} bytes, {:.2?})",
        path.display(),
        text.len(),
        start.elapsed(),
    );
    Ok(document)
}

/// Write a map document, creating parent directories as needed.
pub fn save_document(document: &BlockDocument, path: &Path) -> Result<()> {
    let start = Instant::now();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let text = serde_json::to_string_pretty(document)
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(
        "Saved {} ({} bytes, {:.2?})",
        path.display(),
        text.len(),
        start.elapsed(),
    );
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────
