use std::sync::Arc;

use crate::config::{ClassifierKind, DomainAlignmentKind, EngineSettings, SimilarityBackend};
use crate::core::classifier::{DomainClassifier, KeywordClassifier, SimilarityClassifier};
use crate::core::explainer::{Explainer, Explanation};
use crate::core::matcher::{DomainAlignment, Matcher};
use crate::core::similarity::{
    EmbeddingHandle, EmbeddingSimilarity, KeywordOverlapSimilarity, SimilarityProvider,
};
use crate::error::EngineError;
use crate::models::{
    CandidateProfile, ConfidenceBand, EnterpriseProfile, FactorBreakdown, MatchScore, Prediction,
};

/// Ranked candidate with its explanation
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    pub score: MatchScore<'a>,
    pub explanation: Explanation,
}

/// Result of ranking candidates for one enterprise
#[derive(Debug, Clone)]
pub struct RankingOutcome<'a> {
    pub predicted_domain: Option<String>,
    pub matches: Vec<RankedMatch<'a>>,
    pub total_candidates: usize,
}

/// Classification, scoring and explanation behind one handle
///
/// Stateless per call; safe to share across request handlers.
#[derive(Clone)]
pub struct Engine {
    classifier: Arc<dyn DomainClassifier>,
    matcher: Matcher,
    explainer: Explainer,
    embeddings: Option<Arc<EmbeddingHandle>>,
}

impl Engine {
    pub fn new(classifier: Arc<dyn DomainClassifier>, matcher: Matcher) -> Self {
        Self {
            classifier,
            matcher,
            explainer: Explainer::new(),
            embeddings: None,
        }
    }

    /// Wire the configured backends
    ///
    /// The embedding handle is created here only when the embedding backend
    /// is selected; the model itself loads on first use.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        settings.validate()?;

        let embeddings = match settings.similarity {
            SimilarityBackend::Embedding => {
                Some(Arc::new(EmbeddingHandle::new(settings.embedding_dimension)?))
            }
            SimilarityBackend::Keyword => None,
        };

        let provider: Arc<dyn SimilarityProvider> = match &embeddings {
            Some(handle) => Arc::new(EmbeddingSimilarity::new(Arc::clone(handle))),
            None => Arc::new(KeywordOverlapSimilarity),
        };

        let classifier: Arc<dyn DomainClassifier> = match settings.classifier {
            ClassifierKind::Keyword => Arc::new(KeywordClassifier::new()?),
            ClassifierKind::Semantic => Arc::new(SimilarityClassifier::new(Arc::clone(&provider))),
        };

        let alignment = match settings.domain_alignment {
            DomainAlignmentKind::Taxonomy => DomainAlignment::Taxonomy,
            DomainAlignmentKind::Semantic => DomainAlignment::Semantic(provider),
        };

        tracing::info!(
            "Engine configured (classifier: {}, similarity: {:?}, domain alignment: {:?})",
            classifier.name(),
            settings.similarity,
            settings.domain_alignment
        );

        Ok(Self {
            classifier,
            matcher: Matcher::new(alignment),
            explainer: Explainer::new(),
            embeddings,
        })
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Whether an embedding model is configured and already loaded
    pub fn embedding_loaded(&self) -> bool {
        self.embeddings.as_ref().map_or(false, |h| h.is_loaded())
    }

    /// Ranked domain predictions for a description
    pub fn classify(&self, description: &str, language: &str) -> Vec<Prediction> {
        self.classifier.classify(description, language)
    }

    /// Factor breakdown, composite and band for every candidate
    pub fn score_candidates<'a>(
        &self,
        enterprise: &EnterpriseProfile,
        predicted_domain: Option<&str>,
        candidates: &'a [CandidateProfile],
    ) -> Vec<MatchScore<'a>> {
        self.matcher.score_candidates(enterprise, predicted_domain, candidates)
    }

    pub fn explain(
        &self,
        enterprise: &EnterpriseProfile,
        candidate: &CandidateProfile,
        factors: &FactorBreakdown,
        composite: f64,
        band: ConfidenceBand,
    ) -> Explanation {
        self.explainer.explain(enterprise, candidate, factors, composite, band)
    }

    /// Full online path: classify when no domain is given, then score,
    /// sort, keep `top_k`, and explain each kept result
    pub fn rank<'a>(
        &self,
        enterprise: &EnterpriseProfile,
        predicted_domain: Option<&str>,
        candidates: &'a [CandidateProfile],
        top_k: usize,
    ) -> RankingOutcome<'a> {
        let predicted_domain = match predicted_domain {
            Some(domain) => Some(domain.to_string()),
            None => self
                .classify(&enterprise.description, &enterprise.language)
                .into_iter()
                .next()
                .map(|p| p.domain),
        };

        let matches = self
            .matcher
            .rank(enterprise, predicted_domain.as_deref(), candidates, top_k)
            .into_iter()
            .map(|score| {
                let explanation = self.explain(
                    enterprise,
                    score.candidate,
                    &score.factors,
                    score.composite,
                    score.band,
                );
                RankedMatch { score, explanation }
            })
            .collect::<Vec<_>>();

        tracing::info!(
            "Ranked {} candidates for {} (domain: {:?}, returned: {})",
            candidates.len(),
            enterprise.name,
            predicted_domain,
            matches.len()
        );

        RankingOutcome {
            predicted_domain,
            matches,
            total_candidates: candidates.len(),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("classifier", &self.classifier.name())
            .field("matcher", &self.matcher)
            .finish()
    }
}
