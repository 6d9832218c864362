//! Substring matching primitives for the rule table

/// True when every group has at least one of its terms present in the text.
///
/// Matching is raw substring containment on pre-lowercased text; no
/// tokenization, stemming, or word-boundary checks. A match on "terminate"
/// inside "termination" counts.
pub fn contains_all_groups(text_lower: &str, groups: &[&[&str]]) -> bool {
    groups
        .iter()
        .all(|group| group.iter().any(|term| text_lower.contains(term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_groups_must_match() {
        let groups: &[&[&str]] = &[&["terminate"], &["for convenience", "at any time"]];
        assert!(contains_all_groups(
            "may terminate at any time",
            groups
        ));
        assert!(!contains_all_groups("may terminate with cause", groups));
        assert!(!contains_all_groups("at any time", groups));
    }

    #[test]
    fn test_any_term_satisfies_a_group() {
        let groups: &[&[&str]] = &[&["indemnify"], &["any and all", "all claims"]];
        assert!(contains_all_groups("shall indemnify against all claims", groups));
        assert!(contains_all_groups("indemnify for any and all losses", groups));
    }

    #[test]
    fn test_substring_matches_inside_longer_words() {
        let groups: &[&[&str]] = &[&["terminate"]];
        assert!(contains_all_groups("upon termination of this agreement", groups));
    }

    #[test]
    fn test_empty_group_list_always_matches() {
        assert!(contains_all_groups("anything", &[]));
    }
}
