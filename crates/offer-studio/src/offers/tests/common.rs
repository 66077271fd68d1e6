use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::offers::domain::{Audience, GuaranteeKind, OfferCategory, PricingStrategy};
use crate::offers::elements::GuaranteeRequest;
use crate::offers::{Offer, OfferComposer, OfferRequest};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

pub(super) fn composer() -> OfferComposer {
    OfferComposer::default()
}

/// $97 course, value-based pricing, three bonuses, default money-back guarantee.
pub(super) fn course_request() -> OfferRequest {
    OfferRequest::new("Launch Your Online Course Lab", OfferCategory::Course, 97.0)
}

pub(super) fn course_offer() -> Offer {
    composer().compose(&course_request(), today())
}

/// Bare product with no bonuses or guarantee.
pub(super) fn thin_request() -> OfferRequest {
    let mut request = OfferRequest::new("Deal", OfferCategory::Product, 10.0);
    request.pricing_strategy = PricingStrategy::Premium;
    request.bonus_count = 0;
    request.guarantee = Some(GuaranteeRequest {
        kind: GuaranteeKind::None,
        duration_days: 0,
    });
    request
}

pub(super) fn audience_with_objections(objections: &[&str]) -> Audience {
    Audience {
        segment: "first-time course creators".to_string(),
        pain_points: vec!["No audience yet".to_string()],
        desires: vec!["Replace salary".to_string()],
        objections: objections.iter().map(|item| item.to_string()).collect(),
        decision_factors: vec!["Proof".to_string()],
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
