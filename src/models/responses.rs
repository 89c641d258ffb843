use serde::{Deserialize, Serialize};

use crate::models::{ConfidenceBand, Prediction};

/// Round to four decimals for API output
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionItem {
    pub domain: String,
    pub confidence: f64,
    pub band: ConfidenceBand,
}

impl From<&Prediction> for PredictionItem {
    fn from(p: &Prediction) -> Self {
        Self {
            domain: p.domain.clone(),
            confidence: round4(p.confidence),
            band: p.band(),
        }
    }
}

/// Response for the classify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub top3: Vec<PredictionItem>,
    pub selected_domain: String,
    pub confidence: f64,
    pub classifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorScores {
    pub domain_score: f64,
    pub geo_score: f64,
    pub commission_score: f64,
    pub history_score: f64,
    pub sentiment_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchItem {
    pub candidate_id: String,
    pub candidate_name: String,
    pub composite_score: f64,
    pub confidence_band: ConfidenceBand,
    pub factors: FactorScores,
    pub explainer_en: String,
    pub explainer_hi: String,
}

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub enterprise_name: String,
    pub predicted_domain: Option<String>,
    pub total_candidates: usize,
    pub matches: Vec<MatchItem>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub classifier: String,
    pub embedding_loaded: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
