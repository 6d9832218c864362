//! The fixed rule table.
//!
//! Each rule is a conjunction of required term groups; a group is satisfied
//! by any one of its alternatives. Output attributes (severity, title,
//! explanation, risk points) are fixed per rule and never vary with clause
//! content.

use shared_types::Severity;

use crate::patterns::contains_all_groups;

pub struct Rule {
    pub slug: &'static str,
    pub title: &'static str,
    pub explanation: &'static str,
    pub severity: Severity,
    pub risk_points: u32,
    /// Outer slice is ANDed, inner slice is ORed. Terms are stored lowercase.
    pub required_terms: &'static [&'static [&'static str]],
}

impl Rule {
    /// `text_lower` must already be lowercased.
    pub fn matches(&self, text_lower: &str) -> bool {
        contains_all_groups(text_lower, self.required_terms)
    }
}

pub const RULE_TABLE: &[Rule] = &[
    Rule {
        slug: "unilateral-termination",
        title: "Unilateral termination",
        explanation: "This allows termination without cause. Consider adding a notice period, limiting termination for convenience, and adding cure rights.",
        severity: Severity::High,
        risk_points: 30,
        required_terms: &[&["terminate"], &["for convenience", "at any time"]],
    },
    Rule {
        slug: "broad-indemnity",
        title: "Broad indemnity",
        explanation: "Indemnity appears broad. Consider narrowing scope, adding caps, and excluding consequential damages.",
        severity: Severity::Medium,
        risk_points: 12,
        required_terms: &[&["indemnify"], &["any and all", "all claims"]],
    },
    Rule {
        slug: "unlimited-liability",
        title: "Unlimited liability",
        explanation: "Unlimited liability is high risk. Consider adding a liability cap tied to fees paid or insurance limits.",
        severity: Severity::High,
        risk_points: 30,
        required_terms: &[&["limitation of liability"], &["unlimited"]],
    },
    Rule {
        slug: "perpetual-confidentiality",
        title: "Perpetual confidentiality",
        explanation: "Perpetual confidentiality can be hard to comply with. Consider time-limiting confidentiality except for trade secrets.",
        severity: Severity::Low,
        risk_points: 5,
        required_terms: &[&["confidential"], &["perpetual"]],
    },
];
