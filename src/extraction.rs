use anyhow::{Context, Result};
use std::path::Path;

/// Extract whitespace-normalized text from a PDF, all pages in page order.
///
/// Extraction failures (unreadable or malformed PDFs) are fatal for the
/// run; there is no per-document recovery.
pub fn pdf_to_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = pdf_extract::extract_text(path)
        .with_context(|| format!("failed to extract text from {}", path.display()))?;
    Ok(normalize_whitespace(&raw))
}

/// Collapse every whitespace run (spaces, tabs, line breaks) into a single
/// space and trim the ends. Downstream segmentation assumes this shape.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to allow reuse across documents.
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    // Runs are already collapsed, so at most one space remains at each end.
    if buffer.ends_with(' ') {
        buffer.pop();
    }
    if buffer.starts_with(' ') {
        buffer.remove(0);
    }
}
