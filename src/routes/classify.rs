use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::classifier::{top_predictions, TOP_PREDICTIONS};
use crate::models::{ClassifyRequest, ClassifyResponse, ErrorResponse, PredictionItem};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/classify", web::post().to(classify));
}

/// Classify endpoint
///
/// POST /api/v1/classify
///
/// Request body:
/// ```json
/// {
///   "description": "string",
///   "language": "en"
/// }
/// ```
async fn classify(state: web::Data<AppState>, req: web::Json<ClassifyRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for classify request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let predictions = top_predictions(
        state.engine.classify(&req.description, &req.language),
        TOP_PREDICTIONS,
    );

    let Some(top) = predictions.first() else {
        tracing::error!("Classifier {} returned no predictions", state.engine.classifier_name());
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Classification failed".to_string(),
            message: "classifier returned no predictions".to_string(),
            status_code: 500,
        });
    };

    let top = PredictionItem::from(top);
    tracing::info!("Classified description as {} ({:.2})", top.domain, top.confidence);

    HttpResponse::Ok().json(ClassifyResponse {
        selected_domain: top.domain.clone(),
        confidence: top.confidence,
        top3: predictions.iter().map(PredictionItem::from).collect(),
        classifier: state.engine.classifier_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::core::Engine;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn state() -> AppState {
        let settings = EngineSettings::default();
        AppState {
            engine: Arc::new(Engine::from_settings(&settings).unwrap()),
            settings,
        }
    }

    #[actix_web::test]
    async fn test_classify_grocery() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/classify")
            .set_json(serde_json::json!({ "description": "We sell atta, rice and dal" }))
            .to_request();
        let resp: ClassifyResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.selected_domain, "RET10");
        assert_eq!(resp.top3.len(), 3);
        assert_eq!(resp.confidence, 1.0);
        assert_eq!(resp.classifier, "keyword");
    }

    #[actix_web::test]
    async fn test_classify_rejects_empty_description() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/classify")
            .set_json(serde_json::json!({ "description": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
