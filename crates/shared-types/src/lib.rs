pub mod ids;
pub mod types;

pub use ids::new_id;
pub use types::{Clause, Finding, ReviewSnapshot, RiskReport, RunStatus, Severity};
