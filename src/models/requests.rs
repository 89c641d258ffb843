use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CandidateProfile, EnterpriseProfile, SupportTier};

/// Request to classify an enterprise description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 8))]
    pub language: String,
}

fn default_language() -> String { "en".to_string() }

/// Enterprise as submitted by the API layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnterpriseInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

impl From<EnterpriseInput> for EnterpriseProfile {
    fn from(input: EnterpriseInput) -> Self {
        EnterpriseProfile {
            name: input.name,
            description: input.description,
            language: input.language,
            state: input.state,
            district: input.district,
        }
    }
}

/// Candidate as submitted by the API layer. Stricter than the engine,
/// which silently clamps out-of-range values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateInput {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "domainCodes", alias = "domain_codes", default)]
    pub domain_codes: Vec<String>,
    #[serde(rename = "geoCoverage", alias = "geo_coverage", default)]
    pub geo_coverage: Option<String>,
    #[serde(rename = "commissionPct", alias = "commission_pct")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_pct: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "onboardingSupport", alias = "onboarding_support", default)]
    pub onboarding_support: Option<SupportTier>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl From<CandidateInput> for CandidateProfile {
    fn from(input: CandidateInput) -> Self {
        CandidateProfile {
            id: input.id,
            name: input.name,
            description: input.description,
            domain_codes: input.domain_codes,
            geo_coverage: input.geo_coverage,
            commission_pct: input.commission_pct,
            rating: input.rating,
            onboarding_support: input.onboarding_support,
            languages: input.languages,
        }
    }
}

/// Request to rank candidates for an enterprise
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(nested)]
    pub enterprise: EnterpriseInput,
    #[validate(length(min = 1), nested)]
    pub candidates: Vec<CandidateInput>,
    /// Skips classification when supplied
    #[serde(rename = "predictedDomain", alias = "predicted_domain", default)]
    pub predicted_domain: Option<String>,
    #[serde(rename = "topK", alias = "top_k", default)]
    pub top_k: Option<usize>,
}
