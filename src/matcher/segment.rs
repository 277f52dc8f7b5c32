/// Split document text into the sentence sequence used for matching.
///
/// Splits on the literal two-character delimiter `". "`, drops empty
/// fragments, trims each fragment, and appends a terminating period. The
/// input is expected to be whitespace-normalized (no line breaks, no runs
/// of spaces).
///
/// This is a heuristic splitter, not a grammar-aware one: abbreviations,
/// decimal numbers, and periods without a trailing space all mis-segment.
/// A fragment that already ends in a period (typically the last sentence
/// of a document) still receives the appended period.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(". ")
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{}.", fragment.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "First sentence. Second sentence. Third";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second sentence.", "Third."]
        );
    }

    #[test]
    fn test_split_appends_period_to_final_fragment() {
        // The final fragment keeps its own period and gains the appended one.
        let sentences = split_sentences("One. Two.");
        assert_eq!(sentences, vec!["One.", "Two.."]);
    }

    #[test]
    fn test_split_no_delimiter() {
        let sentences = split_sentences("No delimiter here");
        assert_eq!(sentences, vec!["No delimiter here."]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_drops_empty_fragments() {
        // Consecutive delimiters produce an empty fragment, which is dropped.
        let sentences = split_sentences("First. . Second");
        assert_eq!(sentences, vec!["First.", "Second."]);
    }

    #[test]
    fn test_split_trims_fragments() {
        // A double space after the period leaves a leading space on the
        // next fragment; trimming removes it.
        let sentences = split_sentences("First.  Second. Third");
        assert_eq!(sentences, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_split_is_stable() {
        let text = "Alpha one. Beta two. Gamma three";
        assert_eq!(split_sentences(text), split_sentences(text));
    }
}
