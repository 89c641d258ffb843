//! Offline ranking-quality metrics.
//!
//! | Metric | Definition |
//! |--------|------------|
//! | accuracy@k | share of samples whose true label is in the first k predictions |
//! | MRR | mean of 1 / rank of the first correct prediction (0 if absent) |
//! | NDCG@k | DCG@k / IDCG@k with gain `2^rel - 1`, discount `log2(i + 2)` |
//!
//! The per-metric functions pair samples positionally and divide by the
//! number of ground-truth labels. [`evaluate`] additionally rejects batches
//! whose inputs disagree in length.

use serde::{Deserialize, Serialize};

use crate::core::classifier::DomainClassifier;
use crate::core::confidence::BandDistribution;
use crate::error::EngineError;
use crate::models::Prediction;

/// Fraction of samples whose true label appears in the first `k` predictions
pub fn accuracy_at_k<T: PartialEq>(y_true: &[T], y_pred_ranked: &[Vec<T>], k: usize) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred_ranked)
        .filter(|(truth, preds)| preds.iter().take(k).any(|p| p == *truth))
        .count();
    correct as f64 / y_true.len() as f64
}

/// Mean reciprocal rank of the first correct prediction
pub fn mean_reciprocal_rank<T: PartialEq>(y_true: &[T], y_pred_ranked: &[Vec<T>]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let rr_sum: f64 = y_true
        .iter()
        .zip(y_pred_ranked)
        .filter_map(|(truth, preds)| preds.iter().position(|p| p == truth))
        .map(|index| 1.0 / (index + 1) as f64)
        .sum();
    rr_sum / y_true.len() as f64
}

#[inline]
fn dcg(relevance: impl Iterator<Item = f64>) -> f64 {
    relevance
        .enumerate()
        .map(|(i, rel)| (rel.exp2() - 1.0) / ((i + 2) as f64).log2())
        .sum()
}

/// NDCG@k of one ranked relevance list; 0 when the ideal DCG is 0
pub fn ndcg_single(relevance: &[f64], k: usize) -> f64 {
    let actual = dcg(relevance.iter().copied().take(k));

    let mut ideal = relevance.to_vec();
    ideal.sort_by(|a, b| b.total_cmp(a));
    let ideal = dcg(ideal.into_iter().take(k));

    if ideal > 0.0 { actual / ideal } else { 0.0 }
}

/// Mean NDCG@k across samples
pub fn ndcg_at_k(relevance_scores: &[Vec<f64>], k: usize) -> f64 {
    if relevance_scores.is_empty() {
        return 0.0;
    }
    let total: f64 = relevance_scores.iter().map(|r| ndcg_single(r, k)).sum();
    total / relevance_scores.len() as f64
}

/// Band histogram of top-1 scores
pub fn band_distribution(top1_scores: &[f64]) -> BandDistribution {
    top1_scores.iter().copied().collect()
}

/// Offline quality summary over a labelled evaluation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    #[serde(rename = "accuracy@1")]
    pub accuracy_at_1: f64,
    #[serde(rename = "accuracy@3")]
    pub accuracy_at_3: f64,
    pub mrr: f64,
    #[serde(rename = "ndcg@3")]
    pub ndcg_at_3: f64,
    pub band_distribution: BandDistribution,
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{}", rule)?;
        writeln!(f, "  AgentMap Evaluation Report")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "  Accuracy@1:   {:.4}", self.accuracy_at_1)?;
        writeln!(f, "  Accuracy@3:   {:.4}", self.accuracy_at_3)?;
        writeln!(f, "  MRR:          {:.4}", self.mrr)?;
        writeln!(f, "  NDCG@3:       {:.4}", self.ndcg_at_3)?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "  Confidence Band Distribution:")?;

        let total = self.band_distribution.total();
        for (name, count) in [
            ("green", self.band_distribution.green),
            ("yellow", self.band_distribution.yellow),
            ("red", self.band_distribution.red),
        ] {
            let pct = if total > 0 { count as f64 / total as f64 * 100.0 } else { 0.0 };
            let bar = "#".repeat((pct / 2.0) as usize);
            writeln!(f, "    {:8}: {:4} ({:5.1}%) {}", name, count, pct, bar)?;
        }
        write!(f, "{}", rule)
    }
}

/// Build an [`EvaluationReport`]
///
/// `ranked_predictions[i]` is the best-first prediction list for sample `i`;
/// `relevance_scores[i]` holds the relevance of those predictions in the same
/// order. The band histogram uses each sample's top-1 confidence; samples
/// with no predictions are left out of it.
pub fn evaluate(
    ground_truth_labels: &[String],
    ranked_predictions: &[Vec<Prediction>],
    relevance_scores: &[Vec<f64>],
) -> Result<EvaluationReport, EngineError> {
    if ground_truth_labels.len() != ranked_predictions.len()
        || ground_truth_labels.len() != relevance_scores.len()
    {
        return Err(EngineError::LengthMismatch {
            labels: ground_truth_labels.len(),
            rankings: ranked_predictions.len(),
            relevance: relevance_scores.len(),
        });
    }

    let ranked_labels: Vec<Vec<String>> = ranked_predictions
        .iter()
        .map(|preds| preds.iter().map(|p| p.domain.clone()).collect())
        .collect();

    let top1: Vec<f64> = ranked_predictions
        .iter()
        .filter_map(|preds| preds.first().map(|p| p.confidence))
        .collect();

    Ok(EvaluationReport {
        accuracy_at_1: accuracy_at_k(ground_truth_labels, &ranked_labels, 1),
        accuracy_at_3: accuracy_at_k(ground_truth_labels, &ranked_labels, 3),
        mrr: mean_reciprocal_rank(ground_truth_labels, &ranked_labels),
        ndcg_at_3: ndcg_at_k(relevance_scores, 3),
        band_distribution: band_distribution(&top1),
    })
}

/// A description with its true taxonomy domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub text: String,
    pub domain: String,
}

const SYNTHETIC_TEMPLATES: &[(&str, &[&str], &[&str])] = &[
    (
        "RET10",
        &[
            "We sell {item} and grocery provisions to local customers",
            "Our kirana store stocks {item}, rice, dal, and daily essentials",
            "Wholesale dealer of {item} and organic staples",
        ],
        &["atta", "spices", "pulses", "cooking oil", "sugar", "tea"],
    ),
    (
        "RET12",
        &[
            "We manufacture {item} and traditional Indian garments",
            "Handloom {item} maker from Varanasi, exporting across India",
            "Boutique stitching and {item} tailoring services",
        ],
        &["sarees", "kurtas", "silk fabric", "cotton textiles", "dupattas"],
    ),
    (
        "RET14",
        &[
            "Mobile phone and {item} repair shop",
            "We distribute {item} and consumer electronics",
            "LED lights, fans, and {item} retail store",
        ],
        &["laptops", "chargers", "cables", "power banks", "speakers"],
    ),
    (
        "RET16",
        &[
            "Handmade {item} and wooden furniture workshop",
            "Steel utensils, {item}, and kitchen supplies wholesale",
            "Traditional pottery and {item} craft business",
        ],
        &["bamboo baskets", "steel vessels", "clay pots", "decorative items"],
    ),
    (
        "RET18",
        &[
            "Ayurvedic {item} and herbal wellness products",
            "Organic honey, {item}, and natural health supplements",
            "Yoga accessories and {item} wellness store",
        ],
        &["herbal medicine", "tulsi drops", "neem products", "ashwagandha"],
    ),
];

/// Deterministic labelled corpus: every template crossed with every item
pub fn synthetic_dataset() -> Vec<LabeledSample> {
    SYNTHETIC_TEMPLATES
        .iter()
        .flat_map(|(domain, templates, items)| {
            templates.iter().flat_map(move |template| {
                items.iter().map(move |item| LabeledSample {
                    text: template.replace("{item}", item),
                    domain: domain.to_string(),
                })
            })
        })
        .collect()
}

/// Run a classifier over labelled samples and report its quality
///
/// Relevance is 1.0 for the true domain and 0.0 for every other one.
pub fn evaluate_classifier(
    classifier: &dyn DomainClassifier,
    samples: &[LabeledSample],
) -> Result<EvaluationReport, EngineError> {
    let labels: Vec<String> = samples.iter().map(|s| s.domain.clone()).collect();
    let mut rankings = Vec::with_capacity(samples.len());
    let mut relevance = Vec::with_capacity(samples.len());

    for sample in samples {
        let ranked = classifier.classify(&sample.text, "en");
        relevance.push(
            ranked
                .iter()
                .map(|p| if p.domain == sample.domain { 1.0 } else { 0.0 })
                .collect(),
        );
        rankings.push(ranked);
    }

    let report = evaluate(&labels, &rankings, &relevance)?;
    tracing::info!(
        classifier = classifier.name(),
        samples = samples.len(),
        accuracy_at_1 = report.accuracy_at_1,
        mrr = report.mrr,
        "evaluated classifier"
    );
    Ok(report)
}
