// Criterion benchmarks for the AgentMap engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use agentmap::core::classifier::{DomainClassifier, KeywordClassifier, SimilarityClassifier};
use agentmap::core::evaluation::ndcg_at_k;
use agentmap::core::similarity::{EmbeddingHandle, EmbeddingSimilarity};
use agentmap::core::Matcher;
use agentmap::models::{CandidateProfile, EnterpriseProfile, SupportTier};

const DOMAINS: [&str; 5] = ["RET10", "RET12", "RET14", "RET16", "RET18"];
const COVERAGE: [&str; 4] = ["Pune, Mumbai", "Maharashtra", "Pan-India", "Gujarat"];

fn create_candidate(id: usize) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Seller {}", id),
        description: None,
        domain_codes: vec![DOMAINS[id % DOMAINS.len()].to_string()],
        geo_coverage: Some(COVERAGE[id % COVERAGE.len()].to_string()),
        commission_pct: (id % 15) as f64,
        rating: 2.5 + (id % 5) as f64 * 0.5,
        onboarding_support: Some(if id % 2 == 0 { SupportTier::Full } else { SupportTier::Partial }),
        languages: vec!["en".to_string(), "hi".to_string()],
    }
}

fn create_enterprise() -> EnterpriseProfile {
    EnterpriseProfile {
        name: "Sharma Kirana".to_string(),
        description: "Our kirana store stocks atta, rice, dal, and daily essentials".to_string(),
        language: "hi".to_string(),
        state: Some("Maharashtra".to_string()),
        district: Some("Pune".to_string()),
    }
}

fn bench_classify(c: &mut Criterion) {
    let keyword = KeywordClassifier::new().unwrap();
    let handle = Arc::new(EmbeddingHandle::new(256).unwrap());
    let semantic = SimilarityClassifier::new(Arc::new(EmbeddingSimilarity::new(handle)));
    let text = "Handloom silk sarees and cotton kurtas from Varanasi";

    c.bench_function("classify_keyword", |b| {
        b.iter(|| keyword.classify(black_box(text), black_box("en")))
    });
    c.bench_function("classify_embedding", |b| {
        b.iter(|| semantic.classify(black_box(text), black_box("en")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let matcher = Matcher::default();
    let enterprise = create_enterprise();

    for size in [10, 100, 1000].iter() {
        let candidates: Vec<CandidateProfile> = (0..*size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::new("score_candidates", size), &candidates, |b, candidates| {
            b.iter(|| matcher.score_candidates(black_box(&enterprise), Some("RET10"), black_box(candidates)))
        });
        group.bench_with_input(BenchmarkId::new("top_5", size), &candidates, |b, candidates| {
            b.iter(|| matcher.rank(black_box(&enterprise), Some("RET10"), black_box(candidates), 5))
        });
    }

    group.finish();
}

fn bench_ndcg(c: &mut Criterion) {
    let relevance: Vec<Vec<f64>> = (0..1000)
        .map(|i| {
            let mut row = vec![0.0; 5];
            row[i % 5] = 1.0;
            row
        })
        .collect();

    c.bench_function("ndcg_at_3_1000", |b| b.iter(|| ndcg_at_k(black_box(&relevance), 3)));
}

criterion_group!(benches, bench_classify, bench_rank, bench_ndcg);
criterion_main!(benches);
