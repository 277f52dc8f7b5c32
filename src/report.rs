use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CSV output stream, opened once and held for the whole run.
pub struct CsvReport {
    writer: csv::Writer<std::fs::File>,
    path: PathBuf,
}

impl CsvReport {
    /// Create `<output_base>.csv` and write the header row.
    pub fn create(output_base: &str) -> Result<Self> {
        let path = PathBuf::from(format!("{output_base}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("cannot create output file {}", path.display()))?;
        writer
            .write_record(["Filename", "Full Observation", "Core Sentence"])
            .context("failed to write CSV header")?;
        Ok(Self { writer, path })
    }

    /// Append one row for a matched sentence.
    pub fn write_row(&mut self, filename: &str, window: &str, core_sentence: &str) -> Result<()> {
        self.writer
            .write_record([filename, window, core_sentence])
            .with_context(|| format!("failed to write CSV row for {filename}"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows and close the output.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().context("failed to flush CSV output")
    }
}

/// Per-file processing statistics.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    /// Directory entry name as listed
    pub file: String,
    /// Characters of normalized text processed
    pub chars_processed: u64,
    /// Matched sentences written for this file
    pub observations: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (processed, skipped)
    pub status: String,
    /// Skip diagnostic when status is skipped
    pub skip_reason: Option<String>,
}

impl FileStats {
    pub fn processed(
        file: String,
        chars_processed: u64,
        observations: u64,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            file,
            chars_processed,
            observations,
            processing_time_ms,
            status: "processed".to_string(),
            skip_reason: None,
        }
    }

    pub fn skipped(file: String, reason: String) -> Self {
        Self {
            file,
            chars_processed: 0,
            observations: 0,
            processing_time_ms: 0,
            status: "skipped".to_string(),
            skip_reason: Some(reason),
        }
    }
}

/// Totals for a whole run, written as JSON alongside the CSV.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RunStats {
    pub files_processed: u64,
    pub files_skipped: u64,
    pub observations: u64,
    pub files: Vec<FileStats>,
}

impl RunStats {
    /// Fold one file's stats into the run totals.
    pub fn record(&mut self, stats: FileStats) {
        match stats.status.as_str() {
            "processed" => self.files_processed += 1,
            _ => self.files_skipped += 1,
        }
        self.observations += stats.observations;
        self.files.push(stats);
    }

    /// Write the stats file, creating parent directories as needed.
    pub async fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("cannot write stats file {}", path.display()))
    }
}
