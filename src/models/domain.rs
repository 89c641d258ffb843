use serde::{Deserialize, Serialize};

/// Registered micro-enterprise being classified and matched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseProfile {
    pub name: String,
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

fn default_language() -> String { "en".to_string() }

/// Onboarding support a network participant offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportTier {
    Full,
    Partial,
    None,
}

/// Network participant eligible to serve an enterprise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "domainCodes", alias = "domain_codes", default)]
    pub domain_codes: Vec<String>,
    #[serde(rename = "geoCoverage", alias = "geo_coverage", default)]
    pub geo_coverage: Option<String>,
    #[serde(rename = "commissionPct", alias = "commission_pct")]
    pub commission_pct: f64,
    pub rating: f64,
    #[serde(rename = "onboardingSupport", alias = "onboarding_support", default)]
    pub onboarding_support: Option<SupportTier>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl CandidateProfile {
    /// Text used for description-level similarity, falling back to the name
    pub fn profile_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// One taxonomy domain with its predicted confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub domain: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(domain: impl Into<String>, confidence: f64) -> Self {
        Self {
            domain: domain.into(),
            confidence,
        }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence)
    }
}

/// Discrete tier summarizing a score for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Green,
    Yellow,
    Red,
}

/// The five independent sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub domain: f64,
    pub geographic: f64,
    pub commission: f64,
    pub history: f64,
    pub sentiment: f64,
}

/// Scored candidate. Computed fresh per request and never cached.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore<'a> {
    pub candidate: &'a CandidateProfile,
    pub factors: FactorBreakdown,
    pub composite: f64,
    pub band: ConfidenceBand,
}

/// Composite weights. Fixed; they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub domain: f64,
    pub geographic: f64,
    pub commission: f64,
    pub history: f64,
    pub sentiment: f64,
}

impl ScoringWeights {
    pub const STANDARD: ScoringWeights = ScoringWeights {
        domain: 0.35,
        geographic: 0.20,
        commission: 0.15,
        history: 0.20,
        sentiment: 0.10,
    };

    pub fn total(&self) -> f64 {
        self.domain + self.geographic + self.commission + self.history + self.sentiment
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
