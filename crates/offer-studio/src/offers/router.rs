use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::composer::OfferPayload;
use super::service::{OfferOutcome, OfferService};
use crate::batch::OfferBatchImporter;
use crate::error::AppError;

/// Batch payload; `today` pins urgency deadlines for reproducible output.
/// `csv` rows use the batch file layout and are composed after `offers`.
#[derive(Debug, Deserialize)]
pub struct OfferBatchRequest {
    #[serde(default)]
    pub offers: Vec<OfferPayload>,
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing offer composition endpoints.
pub fn offer_router(service: Arc<OfferService>) -> Router {
    Router::new()
        .route("/api/v1/offers", post(create_handler))
        .route("/api/v1/offers/batch", post(batch_handler))
        .with_state(service)
}

pub(crate) async fn create_handler(
    State(service): State<Arc<OfferService>>,
    Json(payload): Json<OfferPayload>,
) -> Response {
    let request = payload.into_request(service.defaults());
    let outcome: OfferOutcome = service.create(&request, Local::now().date_naive());
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<OfferService>>,
    Json(batch): Json<OfferBatchRequest>,
) -> Result<Response, AppError> {
    let OfferBatchRequest { offers, csv, today } = batch;
    let defaults = service.defaults();

    let mut requests: Vec<_> = offers
        .into_iter()
        .map(|payload| payload.into_request(defaults))
        .collect();
    if let Some(csv) = csv {
        let reader = Cursor::new(csv.into_bytes());
        requests.extend(OfferBatchImporter::from_reader(reader, defaults)?);
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let summaries: Vec<_> = service
        .create_batch(&requests, today)
        .into_iter()
        .map(|outcome| outcome.summary)
        .collect();

    Ok((StatusCode::OK, Json(json!({ "offers": summaries }))).into_response())
}
