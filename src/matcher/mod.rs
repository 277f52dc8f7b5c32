//! Sentence filtering and context-window extraction.
//!
//! The pipeline runs once per document: segment the extracted text into
//! sentences, narrow them through the four filter stages, then rebuild a
//! local context window around each survivor.

use anyhow::Result;

pub mod filters;
pub mod segment;
pub mod window;

pub use filters::TermFilters;
pub use segment::split_sentences;

/// A matched sentence with its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Up to five consecutive sentences (two either side of the match)
    /// joined into one string.
    pub window: String,
    /// The sentence that survived every filter stage.
    pub core_sentence: String,
}

/// Runs document text through segmentation, filtering, and window
/// extraction. One matcher is built per run and shared read-only across
/// all documents.
pub struct Matcher {
    filters: TermFilters,
}

impl Matcher {
    pub fn new(filters: TermFilters) -> Self {
        Self { filters }
    }

    /// Produce one observation per core sentence, in document order.
    pub fn observations(&self, text: &str) -> Result<Vec<Observation>> {
        let all_sentences = segment::split_sentences(text);
        let core_sentences = self.filters.core_sentences(&all_sentences);
        let windows = window::extract_windows(&all_sentences, &core_sentences)?;

        Ok(windows
            .into_iter()
            .zip(core_sentences)
            .map(|(window, core_sentence)| Observation {
                window,
                core_sentence,
            })
            .collect())
    }
}
