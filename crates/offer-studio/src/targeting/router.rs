use axum::{http::StatusCode, response::IntoResponse, response::Response, routing::post, Json};
use axum::{extract::State, Router};
use serde::{Deserialize, Serialize};

use super::domain::{FunnelStage, SeedSource};
use super::strategy::{build_targeting_strategy, TargetingStrategy};
use crate::offers::ReportRenderer;

#[derive(Debug, Clone, Copy)]
pub struct TargetingSettings {
    pub market_population: u64,
    pub renderer: ReportRenderer,
}

#[derive(Debug, Deserialize)]
pub struct LookalikeRequest {
    pub stage: FunnelStage,
    pub seed_source: SeedSource,
    pub seed_size: u64,
    #[serde(default)]
    pub market_population: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct LookalikeResponse {
    pub strategy: TargetingStrategy,
    pub report: String,
}

pub fn targeting_router(settings: TargetingSettings) -> Router {
    Router::new()
        .route("/api/v1/targeting/lookalike", post(lookalike_handler))
        .with_state(settings)
}

pub(crate) async fn lookalike_handler(
    State(settings): State<TargetingSettings>,
    Json(request): Json<LookalikeRequest>,
) -> Response {
    let market_population = request
        .market_population
        .unwrap_or(settings.market_population);
    let strategy = build_targeting_strategy(
        request.stage,
        request.seed_source,
        request.seed_size,
        market_population,
    );
    let report = settings.renderer.generate_targeting_report(&strategy);

    (StatusCode::OK, Json(LookalikeResponse { strategy, report })).into_response()
}
