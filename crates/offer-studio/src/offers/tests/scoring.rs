use super::common::*;
use crate::offers::domain::{GuaranteeKind, ScarcityKind, UrgencyKind};
use crate::offers::elements::{GuaranteeRequest, ScarcityRequest, UrgencyRequest};
use crate::offers::scoring::{
    get_optimization_recommendations, ConversionFactor, ConversionLabel, RecommendationArea,
    RecommendationPriority, ScoringWeights,
};

#[test]
fn default_weights_sum_to_one() {
    assert!((ScoringWeights::default().total() - 1.0).abs() < 1e-9);
}

#[test]
fn labels_follow_thresholds_and_never_decrease() {
    assert_eq!(ConversionLabel::from_score(0.86), ConversionLabel::Exceptional);
    assert_eq!(ConversionLabel::from_score(0.85), ConversionLabel::High);
    assert_eq!(ConversionLabel::from_score(0.71), ConversionLabel::High);
    assert_eq!(ConversionLabel::from_score(0.70), ConversionLabel::Moderate);
    assert_eq!(ConversionLabel::from_score(0.56), ConversionLabel::Moderate);
    assert_eq!(ConversionLabel::from_score(0.41), ConversionLabel::Low);
    assert_eq!(ConversionLabel::from_score(0.40), ConversionLabel::Poor);

    let mut previous = ConversionLabel::Poor;
    for step in 0..=1000 {
        let label = ConversionLabel::from_score(step as f64 / 1000.0);
        assert!(label >= previous);
        previous = label;
    }
}

#[test]
fn baseline_course_scores_moderate() {
    let offer = course_offer();

    assert_close(offer.conversion.score, 0.674);
    assert_eq!(offer.conversion.label, ConversionLabel::Moderate);
    assert_eq!(offer.conversion.components.len(), 8);

    let value = offer
        .conversion
        .components
        .iter()
        .find(|component| component.factor == ConversionFactor::ValuePerception)
        .expect("value perception scored");
    assert_close(value.raw, 0.8);
}

#[test]
fn urgency_scarcity_and_guarantee_lift_the_label() {
    let mut request = course_request();
    request.urgency.push(UrgencyRequest {
        kind: UrgencyKind::Deadline,
        window_days: 5,
    });
    request.scarcity.push(ScarcityRequest {
        kind: ScarcityKind::LimitedSpots,
        quantity: Some(30),
    });
    let offer = composer().compose(&request, today());
    assert_close(offer.conversion.score, 0.813);
    assert_eq!(offer.conversion.label, ConversionLabel::High);

    request.guarantee = Some(GuaranteeRequest {
        kind: GuaranteeKind::Lifetime,
        duration_days: 0,
    });
    let offer = composer().compose(&request, today());
    assert_close(offer.conversion.score, 0.858);
    assert_eq!(offer.conversion.label, ConversionLabel::Exceptional);
}

#[test]
fn thin_offer_scores_low_and_collects_recommendations() {
    let offer = composer().compose(&thin_request(), today());

    assert_close(offer.actual_price, 7.0);
    assert_close(offer.conversion.score, 0.459);
    assert_eq!(offer.conversion.label, ConversionLabel::Low);

    let areas: Vec<_> = get_optimization_recommendations(&offer)
        .into_iter()
        .map(|recommendation| recommendation.area)
        .collect();
    assert_eq!(
        areas,
        vec![
            RecommendationArea::Pricing,
            RecommendationArea::Urgency,
            RecommendationArea::Scarcity,
            RecommendationArea::Guarantee,
            RecommendationArea::ValueStack,
            RecommendationArea::Headline,
        ]
    );
}

#[test]
fn baseline_course_only_needs_urgency_and_scarcity() {
    let recommendations = get_optimization_recommendations(&course_offer());

    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].area, RecommendationArea::Urgency);
    assert_eq!(recommendations[0].priority, RecommendationPriority::Medium);
    assert_eq!(recommendations[1].area, RecommendationArea::Scarcity);
}

#[test]
fn audience_objections_drive_coverage_and_recommendations() {
    let mut request = course_request();
    request.audience = Some(audience_with_objections(&[
        "It's too expensive",
        "I don't have time",
        "Will this work for me?",
        "My boss won't approve",
    ]));
    let offer = composer().compose(&request, today());

    let coverage = offer
        .conversion
        .components
        .iter()
        .find(|component| component.factor == ConversionFactor::ObjectionCoverage)
        .expect("objection coverage scored");
    assert_close(coverage.raw, 0.85);
    assert_eq!(coverage.notes, "3 of 4 objections addressed");

    let objections: Vec<_> = get_optimization_recommendations(&offer)
        .into_iter()
        .filter(|recommendation| recommendation.area == RecommendationArea::Objections)
        .collect();
    assert_eq!(objections.len(), 1);
    assert!(objections[0].message.contains("boss"));
}

#[test]
fn risk_keywords_take_precedence_over_time_keywords() {
    let objection = "Not sure it will work with my schedule";

    let mut guaranteed = course_request();
    guaranteed.bonus_count = 0;
    guaranteed.audience = Some(audience_with_objections(&[objection]));
    let offer = composer().compose(&guaranteed, today());
    assert!(get_optimization_recommendations(&offer)
        .iter()
        .all(|recommendation| recommendation.area != RecommendationArea::Objections));

    let mut unguaranteed = course_request();
    unguaranteed.guarantee = Some(GuaranteeRequest {
        kind: GuaranteeKind::None,
        duration_days: 0,
    });
    unguaranteed.audience = Some(audience_with_objections(&[objection]));
    let offer = composer().compose(&unguaranteed, today());
    let uncovered: Vec<_> = get_optimization_recommendations(&offer)
        .into_iter()
        .filter(|recommendation| recommendation.area == RecommendationArea::Objections)
        .collect();
    assert_eq!(uncovered.len(), 1);
    assert!(uncovered[0].message.contains("schedule"));
}

#[test]
fn scorer_ignores_previous_estimate() {
    let composer = composer();
    let mut offer = course_offer();
    let expected = offer.conversion.clone();
    offer.conversion.score = 0.0;
    offer.conversion.label = ConversionLabel::Poor;

    assert_eq!(composer.scorer().estimate_conversion(&offer), expected);
}
