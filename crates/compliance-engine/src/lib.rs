//! Rule-based compliance scoring for contract clauses.
//!
//! Every clause is evaluated independently against every rule in the fixed
//! table; rules are not mutually exclusive, so one clause can produce several
//! findings. The aggregate risk score is the capped sum of finding points.

pub mod patterns;
pub mod rules;
pub mod score;

use shared_types::{new_id, Clause, Finding};

use crate::rules::{Rule, RULE_TABLE};
use crate::score::aggregate_score;

/// Outcome of one compliance run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    /// Capped aggregate in [0, 100].
    pub risk_score: u32,
    /// Unix seconds when the run completed.
    pub checked_at: u64,
}

/// ComplianceEngine entry point
pub struct ComplianceEngine {
    rules: &'static [Rule],
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self { rules: RULE_TABLE }
    }

    /// Engine over a custom rule table. The production table is
    /// [`rules::RULE_TABLE`].
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Evaluates every clause against every rule. Each matching rule instance
    /// produces one finding referencing the triggering clause's id, with a
    /// freshly generated finding id.
    pub fn evaluate(&self, clauses: &[Clause]) -> Evaluation {
        let mut findings = Vec::new();

        for clause in clauses {
            let text_lower = clause.text.to_lowercase();

            for rule in self.rules {
                if rule.matches(&text_lower) {
                    findings.push(Finding {
                        id: new_id(),
                        severity: rule.severity,
                        title: rule.title.to_string(),
                        explanation: rule.explanation.to_string(),
                        clause_id: clause.id.clone(),
                        risk_score: rule.risk_points,
                    });
                }
            }
        }

        let risk_score = aggregate_score(&findings);

        Evaluation {
            findings,
            risk_score,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
