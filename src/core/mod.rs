// Core algorithm exports
pub mod classifier;
pub mod confidence;
pub mod engine;
pub mod evaluation;
pub mod explainer;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod taxonomy;

pub use classifier::{DomainClassifier, KeywordClassifier, SimilarityClassifier, top_predictions};
pub use confidence::BandDistribution;
pub use engine::{Engine, RankedMatch, RankingOutcome};
pub use evaluation::{evaluate, evaluate_classifier, synthetic_dataset, EvaluationReport, LabeledSample};
pub use explainer::{Explainer, Explanation};
pub use matcher::{DomainAlignment, Matcher};
pub use similarity::{EmbeddingHandle, EmbeddingSimilarity, KeywordOverlapSimilarity, SimilarityProvider};
