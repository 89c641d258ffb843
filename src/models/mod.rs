// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, ConfidenceBand, EnterpriseProfile, FactorBreakdown, MatchScore, Prediction, ScoringWeights, SupportTier};
pub use requests::{CandidateInput, ClassifyRequest, EnterpriseInput, MatchRequest};
pub use responses::{ClassifyResponse, ErrorResponse, FactorScores, HealthResponse, MatchItem, MatchResponse, PredictionItem};
