use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::scoring::{
    clamp_unit, commission_score, composite_score, domain_score, geographic_score,
    history_score, sentiment_score,
};
use crate::core::similarity::SimilarityProvider;
use crate::models::{
    CandidateProfile, ConfidenceBand, EnterpriseProfile, FactorBreakdown, MatchScore,
    ScoringWeights,
};

/// How the domain factor (D) is computed
#[derive(Clone)]
pub enum DomainAlignment {
    /// Step function over the predicted taxonomy domain
    Taxonomy,
    /// Similarity between enterprise and candidate descriptions
    Semantic(Arc<dyn SimilarityProvider>),
}

impl std::fmt::Debug for DomainAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainAlignment::Taxonomy => f.write_str("Taxonomy"),
            DomainAlignment::Semantic(p) => write!(f, "Semantic({})", p.name()),
        }
    }
}

/// Multi-factor scorer and ranker
///
/// # Pipeline
/// 1. Score every candidate on the five factors
/// 2. Combine into a composite and assign a confidence band
/// 3. Sort by composite descending, candidate id ascending on ties
/// 4. Truncate to top-k
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    alignment: DomainAlignment,
}

impl Matcher {
    pub fn new(alignment: DomainAlignment) -> Self {
        Self {
            weights: ScoringWeights::STANDARD,
            alignment,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Factor breakdown for one enterprise/candidate pair
    pub fn factors(
        &self,
        enterprise: &EnterpriseProfile,
        predicted_domain: Option<&str>,
        candidate: &CandidateProfile,
    ) -> FactorBreakdown {
        let domain = match &self.alignment {
            DomainAlignment::Taxonomy => domain_score(predicted_domain, &candidate.domain_codes),
            DomainAlignment::Semantic(provider) => {
                clamp_unit(provider.similarity(&enterprise.description, candidate.profile_text()))
            }
        };

        FactorBreakdown {
            domain,
            geographic: geographic_score(
                enterprise.state.as_deref(),
                enterprise.district.as_deref(),
                candidate.geo_coverage.as_deref(),
            ),
            commission: commission_score(candidate.commission_pct),
            history: history_score(candidate.rating),
            sentiment: sentiment_score(
                candidate.onboarding_support,
                &candidate.languages,
                &enterprise.language,
            ),
        }
    }

    /// Score every candidate, in input order
    pub fn score_candidates<'a>(
        &self,
        enterprise: &EnterpriseProfile,
        predicted_domain: Option<&str>,
        candidates: &'a [CandidateProfile],
    ) -> Vec<MatchScore<'a>> {
        candidates
            .iter()
            .map(|candidate| {
                let factors = self.factors(enterprise, predicted_domain, candidate);
                let composite = composite_score(&factors, &self.weights);
                MatchScore {
                    candidate,
                    factors,
                    composite,
                    band: ConfidenceBand::from_score(composite),
                }
            })
            .collect()
    }

    /// Score, sort and keep the best `limit` candidates
    pub fn rank<'a>(
        &self,
        enterprise: &EnterpriseProfile,
        predicted_domain: Option<&str>,
        candidates: &'a [CandidateProfile],
        limit: usize,
    ) -> Vec<MatchScore<'a>> {
        let mut scored = self.score_candidates(enterprise, predicted_domain, candidates);
        sort_by_composite(&mut scored);
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for {} (domain: {:?})",
            scored.len(),
            candidates.len(),
            enterprise.name,
            predicted_domain
        );

        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DomainAlignment::Taxonomy)
    }
}

/// Sort by composite (descending), then candidate id (ascending)
pub fn sort_by_composite(scores: &mut [MatchScore<'_>]) {
    scores.sort_by(|a, b| {
        b.composite
            .partial_cmp(&a.composite)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });
}
