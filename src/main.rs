use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use causal_scan::{discovery, extraction, terms, CsvReport, FileStats, Matcher, RunStats, TermFilters};

#[derive(Parser, Debug)]
#[command(name = "causal-scan")]
#[command(about = "Scans PDF documents for sentences that pair topic and causal-language terms")]
#[command(version)]
struct Args {
    /// Directory containing the PDF documents to process
    path_to_pdfs: PathBuf,

    /// File of causal search terms, one regex pattern per line (case-sensitive)
    path_to_causal_terms: PathBuf,

    /// File of topic search terms, one regex pattern per line (case-insensitive)
    path_to_topic_terms: PathBuf,

    /// Output filename excluding extension; results are written as <name>.csv
    output_filename: String,

    /// File of causal terms whose sentences are excluded from the results
    #[arg(long, visible_alias = "xc")]
    exclude_causal_terms: Option<PathBuf>,

    /// File of topic terms whose sentences are excluded from the results
    #[arg(long, visible_alias = "xt")]
    exclude_topic_terms: Option<PathBuf>,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting causal-scan");
    info!(?args, "Parsed CLI arguments");

    if !args.path_to_pdfs.exists() {
        anyhow::bail!("PDF directory does not exist: {}", args.path_to_pdfs.display());
    }

    if !args.path_to_pdfs.is_dir() {
        anyhow::bail!("PDF path is not a directory: {}", args.path_to_pdfs.display());
    }

    // Term lists load once per run and are shared across all documents.
    let causal_terms = terms::load_terms(&args.path_to_causal_terms).await?;
    let topic_terms = terms::load_terms(&args.path_to_topic_terms).await?;
    let exclude_causal_terms = match &args.exclude_causal_terms {
        Some(path) => Some(terms::load_terms(path).await?),
        None => None,
    };
    let exclude_topic_terms = match &args.exclude_topic_terms {
        Some(path) => Some(terms::load_terms(path).await?),
        None => None,
    };

    info!(
        "Loaded {} causal and {} topic terms ({} causal exclusions, {} topic exclusions)",
        causal_terms.len(),
        topic_terms.len(),
        exclude_causal_terms.as_ref().map_or(0, Vec::len),
        exclude_topic_terms.as_ref().map_or(0, Vec::len),
    );

    // Pattern compilation happens here, at first use, not at term load.
    let filters = TermFilters::compile(
        &topic_terms,
        &causal_terms,
        exclude_topic_terms.as_deref(),
        exclude_causal_terms.as_deref(),
    )?;
    let matcher = Matcher::new(filters);

    let entries = discovery::scan_pdf_directory(&args.path_to_pdfs).await?;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(entries.len() as u64)
    };
    progress.set_style(ProgressStyle::with_template(
        "{msg} [{bar:40}] {pos}/{len}",
    )?);
    progress.set_message("Processing");

    let mut report = CsvReport::create(&args.output_filename)?;
    let mut run_stats = RunStats::default();

    // Strictly sequential: each document is fully extracted, filtered, and
    // written before the next begins. Extraction and internal-consistency
    // errors abort the whole batch.
    for entry in &entries {
        if let Some(reason) = &entry.skip {
            warn!("{} was not processed: {}", entry.file_name(), reason);
            run_stats.record(FileStats::skipped(entry.file_name(), reason.clone()));
            progress.inc(1);
            continue;
        }

        let started = Instant::now();
        let filename = entry.file_name();

        let text = extraction::pdf_to_text(&entry.path)?;
        let observations = matcher.observations(&text)?;

        for observation in &observations {
            report.write_row(&filename, &observation.window, &observation.core_sentence)?;
        }

        info!(
            "Processed {}: {} observations from {} chars",
            filename,
            observations.len(),
            text.len()
        );
        run_stats.record(FileStats::processed(
            filename,
            text.len() as u64,
            observations.len() as u64,
            started.elapsed().as_millis() as u64,
        ));
        progress.inc(1);
    }

    progress.finish_and_clear();

    let output_path = report.path().to_path_buf();
    report.finish()?;
    run_stats.write(&args.stats_out).await?;

    println!("causal-scan v{} - processing complete", env!("CARGO_PKG_VERSION"));
    println!(
        "Processed {} PDFs, skipped {} entries",
        run_stats.files_processed, run_stats.files_skipped
    );
    println!(
        "Wrote {} observations to {}",
        run_stats.observations,
        output_path.display()
    );

    info!(
        "Run complete: {} processed, {} skipped, {} observations",
        run_stats.files_processed, run_stats.files_skipped, run_stats.observations
    );

    Ok(())
}
