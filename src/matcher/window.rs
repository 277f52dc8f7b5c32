use anyhow::{bail, Result};

/// Sentences of context kept on each side of a core sentence.
const CONTEXT_SENTENCES: usize = 2;

/// Extract the context window for each core sentence, in pipeline order.
///
/// Positions are resolved with a cursor threaded through the loop: the
/// search for each core sentence starts strictly after the position found
/// for the previous one. Duplicate sentence strings therefore resolve to
/// their first unused occurrence instead of re-matching an earlier one.
/// The window spans up to two sentences before and two after the match,
/// clamped at the sequence boundaries, joined with single spaces and
/// trimmed.
pub fn extract_windows(all_sentences: &[String], core_sentences: &[String]) -> Result<Vec<String>> {
    let mut windows = Vec::with_capacity(core_sentences.len());
    let mut cursor = 0usize;

    for core in core_sentences {
        let position = match all_sentences[cursor..].iter().position(|s| s == core) {
            Some(offset) => cursor + offset,
            None => bail!(
                "internal consistency error: core sentence not found at or after position {cursor}: {core:?}"
            ),
        };

        let start = position.saturating_sub(CONTEXT_SENTENCES);
        let end = (position + CONTEXT_SENTENCES + 1).min(all_sentences.len());
        windows.push(all_sentences[start..end].join(" ").trim().to_string());

        cursor = position + 1;
    }

    Ok(windows)
}
