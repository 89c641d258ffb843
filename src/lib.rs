//! AgentMap engine - enterprise-to-seller matching and domain classification
//!
//! This library ranks network participants against a registered
//! micro-enterprise, classifies the enterprise into a taxonomy domain, and
//! explains every ranked result in English and Hindi. It also carries the
//! offline metrics used to benchmark classifier quality.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Engine, EvaluationReport, Explanation, Matcher};
pub use error::EngineError;
pub use models::{CandidateProfile, ConfidenceBand, EnterpriseProfile, FactorBreakdown, MatchScore, Prediction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(ConfidenceBand::from_score(0.9), ConfidenceBand::Green);
        let _ = Matcher::default();
    }
}
