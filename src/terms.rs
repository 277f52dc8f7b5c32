use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Load a term file into an ordered list of raw regex patterns.
///
/// One pattern per line, order preserved, empty lines dropped. Patterns
/// are not validated here: a malformed pattern fails when the filter set
/// compiles, not at load.
pub async fn load_terms(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read term file {}", path.display()))?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
