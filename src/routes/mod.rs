// Route exports
pub mod classify;
pub mod matches;

use actix_web::web;
use std::sync::Arc;

use crate::config::EngineSettings;
use crate::core::Engine;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub settings: EngineSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(classify::configure)
            .configure(matches::configure),
    );
}
