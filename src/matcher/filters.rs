use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Compiled inclusion and exclusion vocabularies.
///
/// Topic vocabularies match case-insensitively; causal vocabularies are
/// case-sensitive. The asymmetry is deliberate: causal-language markers
/// are treated as case-significant, subject-matter terms are not.
///
/// Patterns compile here rather than at term load, so an invalid pattern
/// in a term file surfaces at first use as a compile error naming the
/// pattern.
#[derive(Debug)]
pub struct TermFilters {
    topic: Vec<Regex>,
    causal: Vec<Regex>,
    exclude_topic: Option<Vec<Regex>>,
    exclude_causal: Option<Vec<Regex>>,
}

impl TermFilters {
    /// Compile the four vocabularies. The exclusion lists are optional;
    /// `None` disables the corresponding stage entirely.
    pub fn compile(
        topic_terms: &[String],
        causal_terms: &[String],
        exclude_topic_terms: Option<&[String]>,
        exclude_causal_terms: Option<&[String]>,
    ) -> Result<Self> {
        Ok(Self {
            topic: compile_terms(topic_terms, true)?,
            causal: compile_terms(causal_terms, false)?,
            exclude_topic: exclude_topic_terms
                .map(|terms| compile_terms(terms, true))
                .transpose()?,
            exclude_causal: exclude_causal_terms
                .map(|terms| compile_terms(terms, false))
                .transpose()?,
        })
    }

    /// Run the four filter stages over the sentence sequence, returning
    /// the core sentences.
    ///
    /// Each stage is a pure filter: the output is a sub-sequence of its
    /// input with relative order intact. A sentence must survive every
    /// active stage. An empty inclusion vocabulary matches nothing, so
    /// the result is empty; an empty exclusion vocabulary drops nothing.
    pub fn core_sentences(&self, sentences: &[String]) -> Vec<String> {
        let mut kept = keep_matching(sentences.to_vec(), &self.topic);
        kept = keep_matching(kept, &self.causal);
        if let Some(terms) = &self.exclude_topic {
            kept = drop_matching(kept, terms);
        }
        if let Some(terms) = &self.exclude_causal {
            kept = drop_matching(kept, terms);
        }
        kept
    }
}

fn compile_terms(patterns: &[String], case_insensitive: bool) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
                .with_context(|| format!("invalid term pattern: {pattern}"))
        })
        .collect()
}

fn matches_any(terms: &[Regex], sentence: &str) -> bool {
    terms.iter().any(|term| term.is_match(sentence))
}

/// Keep sentences that match at least one term.
fn keep_matching(sentences: Vec<String>, terms: &[Regex]) -> Vec<String> {
    sentences
        .into_iter()
        .filter(|sentence| matches_any(terms, sentence))
        .collect()
}

/// Drop sentences that match any term.
fn drop_matching(sentences: Vec<String>, terms: &[Regex]) -> Vec<String> {
    sentences
        .into_iter()
        .filter(|sentence| !matches_any(terms, sentence))
        .collect()
}
