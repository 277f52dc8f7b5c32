use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// A directory entry considered for processing.
///
/// `skip` carries the diagnostic for entries that will not be processed.
/// Skipped entries are reported and counted but never abort the run.
#[derive(Debug, Clone)]
pub struct PdfEntry {
    pub path: PathBuf,
    pub skip: Option<String>,
}

impl PdfEntry {
    pub fn is_candidate(&self) -> bool {
        self.skip.is_none()
    }

    /// File name component for output rows and diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// List the input directory and classify each entry.
///
/// The scan is flat (no recursion) and keeps the directory's own listing
/// order. An entry is a candidate when it is a regular file with a `pdf`
/// extension, compared case-insensitively; everything else gets a skip
/// diagnostic. An unreadable directory is a fatal error.
pub async fn scan_pdf_directory(dir: impl AsRef<Path>) -> Result<Vec<PdfEntry>> {
    let dir = dir.as_ref();
    let mut read_dir = fs::read_dir(dir)
        .await
        .with_context(|| format!("cannot list directory {}", dir.display()))?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .with_context(|| format!("error reading directory {}", dir.display()))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("cannot stat {}", path.display()))?;

        let skip = if !file_type.is_file() {
            Some("not a regular file".to_string())
        } else if !has_pdf_extension(&path) {
            Some("not a PDF".to_string())
        } else {
            None
        };

        match &skip {
            Some(reason) => debug!("Skipping {}: {}", path.display(), reason),
            None => debug!("Found PDF candidate: {}", path.display()),
        }
        entries.push(PdfEntry { path, skip });
    }

    let candidates = entries.iter().filter(|e| e.is_candidate()).count();
    info!(
        "Directory scan complete: {} entries, {} PDF candidates",
        entries.len(),
        candidates
    );

    Ok(entries)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"content").await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_scan_classifies_entries() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "report.pdf").await;
        create_file(temp_dir.path(), "notes.txt").await;
        fs::create_dir(temp_dir.path().join("nested")).await.unwrap();

        let entries = scan_pdf_directory(temp_dir.path()).await.unwrap();
        assert_eq!(entries.len(), 3);

        let candidates: Vec<String> = entries
            .iter()
            .filter(|e| e.is_candidate())
            .map(|e| e.file_name())
            .collect();
        assert_eq!(candidates, vec!["report.pdf"]);

        let skipped: Vec<&PdfEntry> = entries.iter().filter(|e| !e.is_candidate()).collect();
        assert_eq!(skipped.len(), 2);
        for entry in skipped {
            assert!(entry.skip.is_some());
        }
    }

    #[tokio::test]
    async fn test_scan_matches_extension_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "upper.PDF").await;
        create_file(temp_dir.path(), "mixed.Pdf").await;

        let entries = scan_pdf_directory(temp_dir.path()).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.is_candidate()));
    }

    #[tokio::test]
    async fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let entries = scan_pdf_directory(temp_dir.path()).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        let error = format!("{:#}", scan_pdf_directory(&missing).await.unwrap_err());
        assert!(error.contains("cannot list directory"));
    }
}
