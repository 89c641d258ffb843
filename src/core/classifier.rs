//! Taxonomy domain classification.
//!
//! Every classifier returns the full ranked distribution over the taxonomy,
//! best first, ties broken by domain code ascending. Callers truncate.

use std::cmp::Ordering;
use std::sync::Arc;

use regex::Regex;

use crate::core::scoring::clamp_unit;
use crate::core::similarity::SimilarityProvider;
use crate::core::taxonomy::{DomainKeywords, BASELINE_RULES, ONDC_DOMAINS};
use crate::error::EngineError;
use crate::models::Prediction;

/// Minimum confidence reported for the top prediction
pub const CONFIDENCE_FLOOR: f64 = 0.10;

/// Number of predictions callers keep
pub const TOP_PREDICTIONS: usize = 3;

/// Ranks taxonomy domains for an enterprise description
pub trait DomainClassifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(&self, description: &str, language: &str) -> Vec<Prediction>;
}

/// Keep the first `k` predictions
pub fn top_predictions(mut predictions: Vec<Prediction>, k: usize) -> Vec<Prediction> {
    predictions.truncate(k);
    predictions
}

/// Normalize raw per-domain scores to a ranked distribution
///
/// A zero total is treated as 1 so every confidence resolves to 0. When a
/// floor is given and the top confidence sits below it, only the top entry
/// is raised; the rest are left as they are.
pub fn rank_distribution(raw: Vec<(&str, f64)>, floor: Option<f64>) -> Vec<Prediction> {
    let total: f64 = raw.iter().map(|(_, s)| s).sum();
    let total = if total > 0.0 { total } else { 1.0 };

    let mut ranked: Vec<Prediction> = raw
        .into_iter()
        .map(|(code, score)| Prediction::new(code, score / total))
        .collect();

    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.domain.cmp(&b.domain))
    });

    if let (Some(floor), Some(top)) = (floor, ranked.first_mut()) {
        if top.confidence < floor {
            top.confidence = floor;
        }
    }

    ranked
}

struct CompiledDomain {
    code: &'static str,
    patterns: Vec<Regex>,
}

/// Keyword-count classifier
///
/// A domain scores the number of distinct keywords found in the description
/// divided by the size of its keyword list.
pub struct KeywordClassifier {
    name: &'static str,
    domains: Vec<CompiledDomain>,
    floor: Option<f64>,
}

impl KeywordClassifier {
    /// Production keyword table with the confidence floor
    pub fn new() -> Result<Self, EngineError> {
        Self::with_table("keyword", ONDC_DOMAINS, Some(CONFIDENCE_FLOOR))
    }

    /// Rule-based benchmarking baseline: shorter table, no floor
    pub fn baseline() -> Result<Self, EngineError> {
        Self::with_table("rule-baseline", BASELINE_RULES, None)
    }

    pub fn with_table(
        name: &'static str,
        table: &[DomainKeywords],
        floor: Option<f64>,
    ) -> Result<Self, EngineError> {
        let domains = table
            .iter()
            .map(|d| {
                let patterns = d
                    .keywords
                    .iter()
                    .map(|kw| Regex::new(&format!(r"\b{}", regex::escape(kw))))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledDomain { code: d.code, patterns })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(Self { name, domains, floor })
    }

    fn raw_scores(&self, description: &str) -> Vec<(&'static str, f64)> {
        let text = description.to_lowercase();
        self.domains
            .iter()
            .map(|d| {
                let hits = d.patterns.iter().filter(|p| p.is_match(&text)).count();
                let score = if d.patterns.is_empty() {
                    0.0
                } else {
                    hits as f64 / d.patterns.len() as f64
                };
                (d.code, score)
            })
            .collect()
    }
}

impl DomainClassifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, description: &str, language: &str) -> Vec<Prediction> {
        let ranked = rank_distribution(self.raw_scores(description), self.floor);
        tracing::debug!(
            classifier = self.name,
            language,
            top = ?ranked.first(),
            "classified description"
        );
        ranked
    }
}

/// Classifier that ranks domains by text similarity to each domain's
/// keyword prototype, using whichever similarity backend it is given
pub struct SimilarityClassifier {
    provider: Arc<dyn SimilarityProvider>,
    prototypes: Vec<(&'static str, String)>,
}

impl SimilarityClassifier {
    pub fn new(provider: Arc<dyn SimilarityProvider>) -> Self {
        let prototypes = ONDC_DOMAINS
            .iter()
            .map(|d| (d.code, d.keywords.join(" ")))
            .collect();
        Self { provider, prototypes }
    }
}

impl DomainClassifier for SimilarityClassifier {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn classify(&self, description: &str, language: &str) -> Vec<Prediction> {
        let raw = self
            .prototypes
            .iter()
            .map(|(code, prototype)| {
                let score = clamp_unit(self.provider.similarity(description, prototype));
                (*code, score)
            })
            .collect();

        let ranked = rank_distribution(raw, Some(CONFIDENCE_FLOOR));
        tracing::debug!(
            classifier = "semantic",
            backend = self.provider.name(),
            language,
            top = ?ranked.first(),
            "classified description"
        );
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::similarity::KeywordOverlapSimilarity;

    fn sum(predictions: &[Prediction]) -> f64 {
        predictions.iter().map(|p| p.confidence).sum()
    }

    #[test]
    fn test_grocery_description() {
        let classifier = KeywordClassifier::new().unwrap();
        let preds = classifier.classify("We sell atta, rice and dal", "en");

        assert_eq!(preds.len(), 5);
        assert_eq!(preds[0].domain, "RET10");
        assert!(preds[1..].iter().all(|p| p.confidence < preds[0].confidence));
        assert!((sum(&preds) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_keywords_applies_floor() {
        let classifier = KeywordClassifier::new().unwrap();
        let preds = classifier.classify("xyz qqq", "en");

        assert_eq!(preds[0].confidence, CONFIDENCE_FLOOR);
        // All tied at zero: lowest code wins the top slot
        assert_eq!(preds[0].domain, "RET10");
        assert!(preds[1..].iter().all(|p| p.confidence == 0.0));
    }

    #[test]
    fn test_prefix_matching_and_case() {
        let classifier = KeywordClassifier::new().unwrap();
        let preds = classifier.classify("AYURVEDIC Herbal oils", "hi");
        assert_eq!(preds[0].domain, "RET18");
    }

    #[test]
    fn test_word_boundary_on_left() {
        let classifier = KeywordClassifier::new().unwrap();
        // "boil" must not match "oil"
        let preds = classifier.classify("we boil water", "en");
        assert_eq!(preds[0].confidence, CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_normalizes_by_list_length() {
        let classifier = KeywordClassifier::new().unwrap();
        // one hit each: grocery list has 15 keywords, health list has 12
        let preds = classifier.classify("tea and honey", "en");
        assert_eq!(preds[0].domain, "RET18");
        let expected = (1.0 / 12.0) / (1.0 / 12.0 + 1.0 / 15.0);
        assert!((preds[0].confidence - expected).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_has_no_floor() {
        let baseline = KeywordClassifier::baseline().unwrap();
        let preds = baseline.classify("nothing relevant", "en");
        assert_eq!(baseline.name(), "rule-baseline");
        assert_eq!(preds[0].confidence, 0.0);
    }

    #[test]
    fn test_rank_distribution_ties_by_code() {
        let ranked = rank_distribution(vec![("RET14", 1.0), ("RET10", 1.0), ("RET12", 2.0)], None);
        let codes: Vec<_> = ranked.iter().map(|p| p.domain.as_str()).collect();
        assert_eq!(codes, vec!["RET12", "RET10", "RET14"]);
        assert_eq!(ranked[0].confidence, 0.5);
    }

    #[test]
    fn test_floor_does_not_renormalize() {
        let ranked = rank_distribution(vec![("A", 0.0), ("B", 0.0)], Some(CONFIDENCE_FLOOR));
        assert_eq!(ranked[0].confidence, CONFIDENCE_FLOOR);
        assert_eq!(ranked[1].confidence, 0.0);
    }

    #[test]
    fn test_top_predictions() {
        let classifier = KeywordClassifier::new().unwrap();
        let top = top_predictions(classifier.classify("silk saree", "en"), TOP_PREDICTIONS);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].domain, "RET12");
    }

    #[test]
    fn test_similarity_classifier() {
        let classifier = SimilarityClassifier::new(Arc::new(KeywordOverlapSimilarity));
        let preds = classifier.classify("laptop and mobile phone repair", "en");
        assert_eq!(classifier.name(), "semantic");
        assert_eq!(preds[0].domain, "RET14");
        assert!((sum(&preds) - 1.0).abs() < 1e-9);
    }

    struct NotANumber;

    impl SimilarityProvider for NotANumber {
        fn name(&self) -> &'static str {
            "nan"
        }

        fn similarity(&self, _text_a: &str, _text_b: &str) -> f64 {
            f64::NAN
        }
    }

    #[test]
    fn test_similarity_classifier_clamps_nan() {
        let classifier = SimilarityClassifier::new(Arc::new(NotANumber));
        let preds = classifier.classify("rice", "en");

        assert_eq!(preds.len(), 5);
        for p in &preds {
            assert!(p.confidence.is_finite());
            assert!((0.0..=1.0).contains(&p.confidence));
        }
        assert_eq!(preds[0].domain, "RET10");
        assert_eq!(preds[0].confidence, CONFIDENCE_FLOOR);
    }
}
