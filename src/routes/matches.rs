use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::responses::round4;
use crate::models::{
    CandidateProfile, EnterpriseProfile, ErrorResponse, FactorScores, HealthResponse, MatchItem,
    MatchRequest, MatchResponse,
};
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        classifier: state.engine.classifier_name().to_string(),
        embedding_loaded: state.engine.embedding_loaded(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "enterprise": { "name": "string", "description": "string", "language": "hi",
///                   "state": "string", "district": "string" },
///   "candidates": [{ "id": "string", "name": "string", "domainCodes": ["RET10"],
///                    "geoCoverage": "string", "commissionPct": 4.0, "rating": 4.2,
///                    "onboardingSupport": "full", "languages": ["en", "hi"] }],
///   "predictedDomain": "RET10",
///   "topK": 5
/// }
/// ```
async fn match_candidates(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let top_k = state.settings.effective_top_k(req.top_k);
    let predicted_domain = req.predicted_domain.filter(|d| !d.trim().is_empty());
    let enterprise = EnterpriseProfile::from(req.enterprise);
    let candidates: Vec<CandidateProfile> = req.candidates.into_iter().map(CandidateProfile::from).collect();

    tracing::info!(
        "Matching {} candidates for enterprise: {}, top_k: {}",
        candidates.len(),
        enterprise.name,
        top_k
    );

    let outcome = state
        .engine
        .rank(&enterprise, predicted_domain.as_deref(), &candidates, top_k);

    let matches = outcome
        .matches
        .into_iter()
        .map(|m| MatchItem {
            candidate_id: m.score.candidate.id.clone(),
            candidate_name: m.score.candidate.name.clone(),
            composite_score: round4(m.score.composite),
            confidence_band: m.score.band,
            factors: FactorScores {
                domain_score: round4(m.score.factors.domain),
                geo_score: round4(m.score.factors.geographic),
                commission_score: round4(m.score.factors.commission),
                history_score: round4(m.score.factors.history),
                sentiment_score: round4(m.score.factors.sentiment),
            },
            explainer_en: m.explanation.en,
            explainer_hi: m.explanation.hi,
        })
        .collect::<Vec<_>>();

    tracing::info!(
        "Returning {} matches for {} (top: {})",
        matches.len(),
        enterprise.name,
        matches.first().map_or("none", |m| m.candidate_name.as_str())
    );

    HttpResponse::Ok().json(MatchResponse {
        enterprise_name: enterprise.name.clone(),
        predicted_domain: outcome.predicted_domain,
        total_candidates: outcome.total_candidates,
        matches,
    })
}
