// Integration tests for the AgentMap engine

use std::sync::Arc;

use agentmap::config::{ClassifierKind, DomainAlignmentKind, EngineSettings, SimilarityBackend};
use agentmap::core::classifier::{DomainClassifier, KeywordClassifier};
use agentmap::core::{evaluate, evaluate_classifier, synthetic_dataset, DomainAlignment, Matcher};
use agentmap::core::similarity::KeywordOverlapSimilarity;
use agentmap::models::{CandidateProfile, EnterpriseProfile, Prediction, SupportTier};
use agentmap::{ConfidenceBand, Engine, EngineError};

fn create_enterprise() -> EnterpriseProfile {
    EnterpriseProfile {
        name: "Sharma Kirana".to_string(),
        description: "We sell atta, rice and dal".to_string(),
        language: "hi".to_string(),
        state: Some("Maharashtra".to_string()),
        district: Some("Pune".to_string()),
    }
}

fn create_candidate(
    id: &str,
    domain: &str,
    coverage: Option<&str>,
    commission_pct: f64,
    rating: f64,
) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Seller {}", id),
        description: None,
        domain_codes: vec![domain.to_string()],
        geo_coverage: coverage.map(str::to_string),
        commission_pct,
        rating,
        onboarding_support: Some(SupportTier::Full),
        languages: vec!["en".to_string(), "hi".to_string()],
    }
}

#[test]
fn test_integration_end_to_end_ranking() {
    let engine = Engine::from_settings(&EngineSettings::default()).unwrap();
    let enterprise = create_enterprise();

    let candidates = vec![
        create_candidate("a", "RET12", Some("Gujarat"), 10.0, 3.0),    // Wrong domain, far away
        create_candidate("b", "RET10", Some("Pune, Mumbai"), 2.0, 4.8), // Strong local grocer
        create_candidate("c", "RET10", Some("Maharashtra"), 4.0, 4.0),  // State-level grocer
        create_candidate("d", "RET10", Some("Pan-India"), 6.0, 4.5),    // National grocer
        create_candidate("e", "RET10", None, 1.0, 2.0),                 // No coverage declared
    ];

    let outcome = engine.rank(&enterprise, None, &candidates, 3);

    assert_eq!(outcome.predicted_domain.as_deref(), Some("RET10"));
    assert_eq!(outcome.total_candidates, 5);
    assert_eq!(outcome.matches.len(), 3);

    // Composites are non-increasing
    for pair in outcome.matches.windows(2) {
        assert!(pair[0].score.composite >= pair[1].score.composite);
    }

    let best = &outcome.matches[0];
    assert_eq!(best.score.candidate.id, "b");
    assert_eq!(best.score.factors.geographic, 1.0);
    assert_eq!(best.score.band, ConfidenceBand::Green);
    assert!(best.explanation.en.contains("Seller b is recommended for Sharma Kirana"));
    assert!(best.explanation.hi.contains("Seller b को Sharma Kirana"));

    // The wrong-domain candidate never makes the cut
    assert!(outcome.matches.iter().all(|m| m.score.candidate.id != "a"));
}

#[test]
fn test_integration_scores_keep_input_order() {
    let engine = Engine::from_settings(&EngineSettings::default()).unwrap();
    let enterprise = create_enterprise();
    let candidates = vec![
        create_candidate("z", "RET12", Some("Gujarat"), 10.0, 3.0),
        create_candidate("y", "RET10", Some("Pune"), 2.0, 4.8),
    ];

    let scores = engine.score_candidates(&enterprise, Some("RET10"), &candidates);

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].candidate.id, "z");
    assert_eq!(scores[1].candidate.id, "y");
    for score in &scores {
        assert!((0.0..=1.0).contains(&score.composite));
        assert_eq!(score.band, ConfidenceBand::from_score(score.composite));
    }
}

#[test]
fn test_integration_ties_break_by_id() {
    let matcher = Matcher::default();
    let enterprise = create_enterprise();
    let candidates = vec![
        create_candidate("2", "RET10", Some("Pune"), 3.0, 4.0),
        create_candidate("1", "RET10", Some("Pune"), 3.0, 4.0),
    ];

    let ranked = matcher.rank(&enterprise, Some("RET10"), &candidates, 10);

    assert_eq!(ranked[0].composite, ranked[1].composite);
    assert_eq!(ranked[0].candidate.id, "1");
    assert_eq!(ranked[1].candidate.id, "2");
}

#[test]
fn test_integration_semantic_domain_alignment() {
    let matcher = Matcher::new(DomainAlignment::Semantic(Arc::new(KeywordOverlapSimilarity)));
    let enterprise = EnterpriseProfile {
        description: "silk sarees and cotton kurtas".to_string(),
        ..create_enterprise()
    };

    let mut weaver = create_candidate("w", "RET12", Some("Pune"), 3.0, 4.0);
    weaver.description = Some("Marketplace for silk sarees and kurtas".to_string());
    let mut grocer = create_candidate("g", "RET10", Some("Pune"), 3.0, 4.0);
    grocer.description = Some("Daily grocery delivery".to_string());
    let candidates = vec![grocer, weaver];

    let ranked = matcher.rank(&enterprise, None, &candidates, 2);

    assert_eq!(ranked[0].candidate.id, "w");
    assert!(ranked[0].factors.domain > ranked[1].factors.domain);
}

#[test]
fn test_integration_explanation_locales() {
    let engine = Engine::from_settings(&EngineSettings::default()).unwrap();
    let enterprise = create_enterprise();
    let candidates = vec![create_candidate("b", "RET10", Some("Pune"), 2.0, 4.8)];

    let outcome = engine.rank(&enterprise, Some("RET10"), &candidates, 1);
    let explanation = outcome.matches[0].explanation.clone();

    assert_eq!(explanation.get("en"), Some(explanation.en.as_str()));
    assert_eq!(explanation.get("hi"), Some(explanation.hi.as_str()));
    assert_eq!(explanation.get("fr"), None);

    let map = explanation.into_map();
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("en"));
    assert!(map.contains_key("hi"));
}

#[test]
fn test_integration_keyword_beats_baseline() {
    let samples = synthetic_dataset();
    assert_eq!(samples.len(), 72);

    let keyword = KeywordClassifier::new().unwrap();
    let baseline = KeywordClassifier::baseline().unwrap();

    let keyword_report = evaluate_classifier(&keyword, &samples).unwrap();
    let baseline_report = evaluate_classifier(&baseline, &samples).unwrap();

    assert!((keyword_report.accuracy_at_1 - 71.0 / 72.0).abs() < 1e-9);
    assert!((baseline_report.accuracy_at_1 - 64.0 / 72.0).abs() < 1e-9);
    assert_eq!(keyword_report.accuracy_at_3, 1.0);
    assert_eq!(baseline_report.accuracy_at_3, 1.0);
    assert!(keyword_report.mrr > baseline_report.mrr);
    assert!(keyword_report.ndcg_at_3 > baseline_report.ndcg_at_3);

    assert_eq!(keyword_report.band_distribution.total(), 72);
    assert_eq!(baseline_report.band_distribution.total(), 72);
    assert!(keyword_report.band_distribution.red < baseline_report.band_distribution.red);
}

#[test]
fn test_integration_semantic_engine_evaluates() {
    let settings = EngineSettings {
        classifier: ClassifierKind::Semantic,
        similarity: SimilarityBackend::Embedding,
        domain_alignment: DomainAlignmentKind::Taxonomy,
        ..EngineSettings::default()
    };
    let engine = Engine::from_settings(&settings).unwrap();
    let samples = synthetic_dataset();

    let labels: Vec<String> = samples.iter().map(|s| s.domain.clone()).collect();
    let rankings: Vec<Vec<Prediction>> = samples
        .iter()
        .map(|s| engine.classify(&s.text, "en"))
        .collect();
    let relevance: Vec<Vec<f64>> = rankings
        .iter()
        .zip(&labels)
        .map(|(preds, label)| {
            preds.iter().map(|p| if &p.domain == label { 1.0 } else { 0.0 }).collect()
        })
        .collect();

    let report = evaluate(&labels, &rankings, &relevance).unwrap();

    assert!(engine.embedding_loaded());
    assert!((0.0..=1.0).contains(&report.accuracy_at_1));
    assert!(report.accuracy_at_1 <= report.accuracy_at_3);
    assert!(report.mrr >= report.accuracy_at_1);
    assert_eq!(report.band_distribution.total(), 72);
}

#[test]
fn test_integration_evaluate_rejects_mismatched_lengths() {
    let labels = vec!["RET10".to_string(), "RET12".to_string()];
    let rankings = vec![vec![Prediction::new("RET10", 0.9)]];
    let relevance = vec![vec![1.0], vec![0.0]];

    let result = evaluate(&labels, &rankings, &relevance);

    assert!(matches!(result, Err(EngineError::LengthMismatch { labels: 2, rankings: 1, relevance: 2 })));
}

#[test]
fn test_integration_classifier_trait_objects() {
    let classifiers: Vec<Box<dyn DomainClassifier>> = vec![
        Box::new(KeywordClassifier::new().unwrap()),
        Box::new(KeywordClassifier::baseline().unwrap()),
    ];

    for classifier in &classifiers {
        let preds = classifier.classify("Mobile phone and laptops repair shop", "en");
        assert_eq!(preds.len(), 5);
        assert_eq!(preds[0].domain, "RET14");
    }
}
