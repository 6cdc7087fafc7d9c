use actix_web::{web, HttpResponse};

use crate::error::Error;
use crate::AppState;

/// GET /api/github
///
/// Runs one aggregation pass and returns the statistics payload. Upstream
/// failures render through `ResponseError` as `{"error": …}` with the
/// upstream detail kept in the logs.
pub async fn get_profile_stats(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let payload = state.aggregator.build_payload().await.map_err(|e| {
        tracing::error!("Stats aggregation failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(payload))
}

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gitstats"
    }))
}

/// Configure stats routes
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/github").route(web::get().to(get_profile_stats)));
}
