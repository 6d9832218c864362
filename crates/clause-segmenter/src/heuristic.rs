//! Default paragraph/sentence-boundary splitting

use lazy_static::lazy_static;
use regex::Regex;

use crate::SegmentStrategy;

lazy_static! {
    /// Two or more consecutive newlines end a paragraph.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n{2,}").unwrap();
    /// Period, whitespace, then an uppercase letter marks a sentence
    /// boundary. The period stays with the preceding segment.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"\.\s+[A-Z]").unwrap();
}

/// Splits on blank lines and on heuristic sentence boundaries before a
/// capital letter. This is an approximation, not a parser; swap the
/// strategy for true sentence-boundary detection.
pub struct HeuristicStrategy;

impl SegmentStrategy for HeuristicStrategy {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        for paragraph in PARAGRAPH_BREAK.split(text) {
            split_sentences(paragraph, &mut segments);
        }
        segments
    }
}

/// Cuts `paragraph` just before the uppercase letter of each boundary match.
/// `[A-Z]` is a single byte, so `end - 1` lands on a char boundary.
fn split_sentences<'a>(paragraph: &'a str, out: &mut Vec<&'a str>) {
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(paragraph) {
        let cut = m.end() - 1;
        out.push(&paragraph[start..cut]);
        start = cut;
    }
    out.push(&paragraph[start..]);
}
