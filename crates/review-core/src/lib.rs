//! Per-document review state.
//!
//! One [`DocumentSession`] exists per document id, created explicitly at
//! first access. It owns the document's text, clause set, and the latest
//! compliance run, and composes the segmenter and rule engine. All mutation
//! goes through `&mut`; callers serialize mutating runs per document so that
//! a run's clear-then-insert sequence is never observed half-done.

use clause_segmenter::ClauseSegmenter;
use compliance_engine::ComplianceEngine;
use shared_types::{Clause, Finding, ReviewSnapshot, RiskReport, RunStatus};

pub struct DocumentSession {
    text: String,
    clauses: Vec<Clause>,
    findings: Vec<Finding>,
    status: RunStatus,
    risk_score: u32,
    checked_at: Option<u64>,
    segmenter: ClauseSegmenter,
    engine: ComplianceEngine,
}

/// Counts returned by a compliance run.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub findings_count: usize,
    pub risk_score: u32,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            clauses: Vec::new(),
            findings: Vec::new(),
            status: RunStatus::Idle,
            risk_score: 0,
            checked_at: None,
            segmenter: ClauseSegmenter::new(),
            engine: ComplianceEngine::new(),
        }
    }

    /// Replaces the stored source text for the document.
    pub fn upsert_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Runs the segmenter against the stored text, replacing the clause set
    /// wholesale. Returns the number of clauses produced.
    pub fn extract_clauses(&mut self) -> usize {
        self.clauses = self.segmenter.segment(&self.text);
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Runs the rule engine over `clauses`, fully replacing the finding set.
    ///
    /// Status moves to `processing` and prior findings are cleared before
    /// evaluation, then the new findings and score commit together with
    /// status `done`.
    pub fn run_compliance(&mut self, clauses: &[Clause]) -> RunOutcome {
        self.status = RunStatus::Processing;
        self.risk_score = 0;
        self.findings.clear();

        let evaluation = self.engine.evaluate(clauses);

        self.findings = evaluation.findings;
        self.risk_score = evaluation.risk_score;
        self.checked_at = Some(evaluation.checked_at);
        self.status = RunStatus::Done;

        RunOutcome {
            findings_count: self.findings.len(),
            risk_score: self.risk_score,
        }
    }

    /// Snapshot of the latest run. `breakdown` stays empty; per-category
    /// rollups belong to the presentation layer.
    pub fn results(&self) -> ReviewSnapshot {
        ReviewSnapshot {
            status: self.status,
            risk: RiskReport {
                score: self.risk_score,
                breakdown: Default::default(),
            },
            findings: self.findings.clone(),
            checked_at: self.checked_at,
        }
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}
