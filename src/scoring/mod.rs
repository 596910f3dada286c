pub mod engine;
pub mod factors;

pub use engine::{evaluate, RiskAssessment, RiskLevel, Vitals};
pub use factors::{factor_scores, FactorScore};
