//! Clause segmentation for contract review.
//!
//! Splits raw document text into clause-sized segments on paragraph breaks
//! and heuristic sentence boundaries, then assigns each segment a fresh id.
//! The splitting heuristic lives behind [`SegmentStrategy`] so a better
//! segmenter can replace it without touching the rule engine.

pub mod heuristic;

use shared_types::{new_id, Clause};

pub use heuristic::HeuristicStrategy;

/// Hard cap on segments per run. Segments past the cap are dropped, not
/// deferred.
pub const MAX_CLAUSES: usize = 250;

/// Turns raw text into ordered raw segments. Trimming, the segment cap, and
/// id assignment stay in [`ClauseSegmenter`].
pub trait SegmentStrategy {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

pub struct ClauseSegmenter<S = HeuristicStrategy> {
    strategy: S,
}

impl ClauseSegmenter<HeuristicStrategy> {
    pub fn new() -> Self {
        Self {
            strategy: HeuristicStrategy,
        }
    }
}

impl Default for ClauseSegmenter<HeuristicStrategy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SegmentStrategy> ClauseSegmenter<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Segments `text` into at most [`MAX_CLAUSES`] clauses in document
    /// order. Empty or whitespace-only input yields an empty list, not an
    /// error. Page/offset fields are left unset; this segmenter does not
    /// track page geometry.
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        self.strategy
            .split(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(MAX_CLAUSES)
            .map(|s| Clause {
                id: new_id(),
                text: s.to_string(),
                page: None,
                start_offset: None,
                end_offset: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_no_clauses() {
        let segmenter = ClauseSegmenter::new();
        assert!(segmenter.segment("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input_yields_no_clauses() {
        let segmenter = ClauseSegmenter::new();
        assert!(segmenter.segment("  \n\n \t ").is_empty());
    }

    #[test]
    fn test_text_without_boundaries_is_a_single_clause() {
        let segmenter = ClauseSegmenter::new();
        let clauses = segmenter.segment("all lowercase text with no boundaries");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].text, "all lowercase text with no boundaries");
    }

    #[test]
    fn test_segments_are_trimmed() {
        let segmenter = ClauseSegmenter::new();
        let clauses = segmenter.segment("  First clause.   \n\n   Second clause.  ");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].text, "First clause.");
        assert_eq!(clauses[1].text, "Second clause.");
    }

    #[test]
    fn test_sentence_boundaries_produce_separate_clauses() {
        let segmenter = ClauseSegmenter::new();
        let clauses =
            segmenter.segment("Either party may terminate. Notice must be written. Fees apply.");
        let texts: Vec<_> = clauses.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Either party may terminate.",
                "Notice must be written.",
                "Fees apply."
            ]
        );
    }

    #[test]
    fn test_output_is_capped_at_250_clauses() {
        let segmenter = ClauseSegmenter::new();
        let text = "Clause text here.\n\n".repeat(400);
        let clauses = segmenter.segment(&text);
        assert_eq!(clauses.len(), MAX_CLAUSES);
    }

    #[test]
    fn test_clause_ids_are_unique() {
        let segmenter = ClauseSegmenter::new();
        let text = "One.\n\nTwo.\n\nThree.\n\nFour.";
        let clauses = segmenter.segment(text);
        let mut ids: Vec<_> = clauses.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), clauses.len());
    }

    #[test]
    fn test_page_and_offsets_are_unset() {
        let segmenter = ClauseSegmenter::new();
        let clauses = segmenter.segment("A short clause.");
        assert!(clauses[0].page.is_none());
        assert!(clauses[0].start_offset.is_none());
        assert!(clauses[0].end_offset.is_none());
    }

    #[test]
    fn test_custom_strategy_is_used() {
        struct LineStrategy;
        impl SegmentStrategy for LineStrategy {
            fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
                text.lines().collect()
            }
        }

        let segmenter = ClauseSegmenter::with_strategy(LineStrategy);
        let clauses = segmenter.segment("one\ntwo\nthree");
        assert_eq!(clauses.len(), 3);
    }
}
