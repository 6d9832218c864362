//! In-memory per-document session registry

use std::collections::HashMap;
use std::sync::Arc;

use review_core::DocumentSession;
use tokio::sync::{Mutex, RwLock};

/// Shared application state.
///
/// Each document id owns one session behind its own async mutex. A mutating
/// run holds that mutex for its whole clear-then-insert sequence, so readers
/// never observe a half-replaced clause or finding set.
pub struct AppState {
    sessions: RwLock<HashMap<String, Arc<Mutex<DocumentSession>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Session for `doc_id`, created on first access.
    pub async fn session(&self, doc_id: &str) -> Arc<Mutex<DocumentSession>> {
        if let Some(session) = self.sessions.read().await.get(doc_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(doc_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(DocumentSession::new())))
            .clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
