use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A contiguous, independently-evaluated segment of document text produced by
/// one segmentation run. Optional page/offset fields are populated by richer
/// text sources and omitted from JSON when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

/// One rule match tied to a single clause.
///
/// `clause_id` is a weak reference: after a re-segmentation the clause may no
/// longer exist, and consumers treat the failed lookup as display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub explanation: String,
    pub clause_id: String,
    pub risk_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Lifecycle of the most recent compliance run for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Idle,
    Processing,
    Done,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Processing => write!(f, "processing"),
            RunStatus::Done => write!(f, "done"),
        }
    }
}

/// Aggregate risk for a document, capped at 100.
///
/// `breakdown` is reserved for per-category rollups computed by the
/// presentation layer; the engine always leaves it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub score: u32,
    pub breakdown: BTreeMap<String, u32>,
}

/// Snapshot of the latest compliance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSnapshot {
    pub status: RunStatus,
    pub risk: RiskReport,
    pub findings: Vec<Finding>,
    /// Unix seconds of the last completed run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<u64>,
}
