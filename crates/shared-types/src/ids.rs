//! Identifier generation for documents, clauses, and findings

use uuid::Uuid;

/// Freshly generated unique id. Ids are never reused across runs.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
