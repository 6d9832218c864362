//! Property-based tests for the review pipeline behind the API
//!
//! Drives arbitrary text through a document session and checks the
//! invariants the HTTP layer relies on.

use proptest::prelude::*;

use review_core::DocumentSession;
use shared_types::{new_id, RunStatus, Severity};

/// Generate text shaped like contract prose: sentences, blank lines, and the
/// occasional trigger phrase
fn contract_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z ,]{5,60}\\.",
            Just("Either party may terminate for convenience at any time.".to_string()),
            Just("Client shall indemnify Provider from any and all claims.".to_string()),
            Just("Confidential information is protected on a perpetual basis.".to_string()),
        ],
        0..30,
    )
    .prop_map(|sentences| sentences.join("\n\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: extraction never exceeds the clause cap and never produces
    /// blank clauses
    #[test]
    fn extraction_is_bounded_and_clean(text in ".{0,4000}") {
        let mut session = DocumentSession::new();
        session.upsert_text(text);
        let count = session.extract_clauses();

        prop_assert!(count <= 250);
        prop_assert_eq!(count, session.clauses().len());
        for clause in session.clauses() {
            prop_assert!(!clause.text.trim().is_empty());
        }
    }

    /// Property: a full run always lands on `done` with a score in [0, 100]
    #[test]
    fn runs_always_complete(text in contract_like_text()) {
        let mut session = DocumentSession::new();
        session.upsert_text(text);
        session.extract_clauses();

        let clauses = session.clauses().to_vec();
        let outcome = session.run_compliance(&clauses);

        prop_assert!(outcome.risk_score <= 100);
        let snapshot = session.results();
        prop_assert_eq!(snapshot.status, RunStatus::Done);
        prop_assert_eq!(snapshot.risk.score, outcome.risk_score);
        prop_assert_eq!(snapshot.findings.len(), outcome.findings_count);
    }

    /// Property: rerunning the same clause set yields the same counts
    #[test]
    fn reruns_are_stable(text in contract_like_text()) {
        let mut session = DocumentSession::new();
        session.upsert_text(text);
        session.extract_clauses();
        let clauses = session.clauses().to_vec();

        let first = session.run_compliance(&clauses);
        let second = session.run_compliance(&clauses);

        prop_assert_eq!(first.findings_count, second.findings_count);
        prop_assert_eq!(first.risk_score, second.risk_score);
    }

    /// Property: generated document ids always match the UUID shape the
    /// boundary accepts
    #[test]
    fn generated_ids_are_valid_doc_ids(_seed in 0u8..255) {
        let id = new_id();
        let uuid_pattern = regex::Regex::new(
            r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
        ).unwrap();
        prop_assert!(uuid_pattern.is_match(&id));
    }

    /// Property: severity wire values stay lowercase
    #[test]
    fn severity_wire_values(severity in prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
    ]) {
        let value = serde_json::to_value(severity).unwrap();
        let s = value.as_str().unwrap();
        prop_assert!(matches!(s, "low" | "medium" | "high"));
    }
}
