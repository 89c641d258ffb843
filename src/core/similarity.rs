//! Text similarity providers.
//!
//! Two interchangeable backends sit behind [`SimilarityProvider`]:
//! - [`KeywordOverlapSimilarity`]: Jaccard overlap of word tokens
//! - [`EmbeddingSimilarity`]: cosine similarity of hashed text embeddings
//!
//! The embedding model lives in an [`EmbeddingHandle`] which is built by the
//! caller, shared through `Arc`, and loaded at most once on first use.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::core::scoring::clamp_unit;
use crate::error::EngineError;

/// Scores how similar two texts are, in [0, 1]
pub trait SimilarityProvider: Send + Sync {
    /// Backend name, for logs and health output
    fn name(&self) -> &'static str;

    fn similarity(&self, text_a: &str, text_b: &str) -> f64;
}

/// Lowercase word tokens (unicode alphanumeric runs)
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Keyword overlap
// ============================================================================

/// Deterministic fallback: |A ∩ B| / |A ∪ B| over distinct tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapSimilarity;

impl SimilarityProvider for KeywordOverlapSimilarity {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let a: BTreeSet<String> = tokenize(text_a).into_iter().collect();
        let b: BTreeSet<String> = tokenize(text_b).into_iter().collect();

        let union = a.union(&b).count();
        if union == 0 {
            return 0.0;
        }
        let shared = a.intersection(&b).count();

        (shared as f64 / union as f64).clamp(0.0, 1.0)
    }
}

// ============================================================================
// Hashed embeddings
// ============================================================================

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Feature-hashing text embedder over word tokens and character trigrams
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// L2-normalized embedding; all zeros for text without tokens
    pub fn embed(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimension];

        for token in tokenize(text) {
            self.add_feature(&mut vector, format!("w:{}", token).as_bytes(), 1.0);

            // Trigrams with boundary markers so short tokens still contribute
            let padded: Vec<char> = format!("#{}#", token).chars().collect();
            for window in padded.windows(3) {
                let gram: String = window.iter().collect();
                self.add_feature(&mut vector, format!("g:{}", gram).as_bytes(), 0.5);
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in vector.iter_mut() {
                *v /= norm;
            }
        }
        vector
    }

    #[inline]
    fn add_feature(&self, vector: &mut [f64], feature: &[u8], weight: f64) {
        let hash = fnv1a(feature);
        let bucket = (hash % self.dimension as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign * weight;
    }
}

/// Cosine similarity of two equal-length vectors; 0 when either is zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Lazily loaded, read-only embedding model handle
///
/// Concurrent first use from several threads initializes the model exactly
/// once; every caller then sees the same instance.
#[derive(Debug)]
pub struct EmbeddingHandle {
    dimension: usize,
    model: OnceLock<HashingEmbedder>,
}

impl EmbeddingHandle {
    pub fn new(dimension: usize) -> Result<Self, EngineError> {
        if dimension == 0 {
            return Err(EngineError::InvalidConfig(
                "embedding dimension must be positive".to_string(),
            ));
        }
        Ok(Self {
            dimension,
            model: OnceLock::new(),
        })
    }

    pub fn get(&self) -> &HashingEmbedder {
        self.model.get_or_init(|| {
            tracing::info!("Loading hashing embedder (dimension: {})", self.dimension);
            HashingEmbedder::new(self.dimension)
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

/// Embedding-backed similarity, clamped to [0, 1]
#[derive(Debug, Clone)]
pub struct EmbeddingSimilarity {
    handle: Arc<EmbeddingHandle>,
}

impl EmbeddingSimilarity {
    pub fn new(handle: Arc<EmbeddingHandle>) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &Arc<EmbeddingHandle> {
        &self.handle
    }
}

impl SimilarityProvider for EmbeddingSimilarity {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let model = self.handle.get();
        let a = model.embed(text_a);
        let b = model.embed(text_b);
        clamp_unit(cosine_similarity(&a, &b))
    }
}
