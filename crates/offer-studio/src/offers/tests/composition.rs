use super::common::*;
use crate::offers::domain::{
    GuaranteeKind, OfferCategory, PricingStrategy, ScarcityKind, UrgencyKind,
    DEFAULT_CORE_MULTIPLIER,
};
use crate::offers::elements::{ScarcityRequest, UrgencyRequest};
use crate::offers::value::{
    create_core_value, determine_price, generate_bonuses, MAX_BASE_PRICE,
};

#[test]
fn core_value_applies_category_multiplier() {
    for category in OfferCategory::ordered() {
        for price in [1.0, 47.0, 97.0, 1_250.5] {
            let core = create_core_value(category, price);
            assert_close(core.value, price * category.core_multiplier());
            assert!(!core.is_bonus);
        }
    }
}

#[test]
fn unknown_category_uses_default_multiplier() {
    let category = OfferCategory::from_label("artisanal widgets");
    let core = create_core_value(category, 40.0);
    assert_close(core.value, 40.0 * DEFAULT_CORE_MULTIPLIER);
}

#[test]
fn extreme_base_prices_are_clamped() {
    let core = create_core_value(OfferCategory::Consulting, 1e308);
    assert_close(core.value, MAX_BASE_PRICE * 12.0);

    let mut request = course_request();
    request.base_price = f64::MAX;
    let offer = composer().compose(&request, today());
    assert!(offer.total_value.is_finite());
    assert!(offer.savings_pct.is_finite());
    assert!((0.0..100.0).contains(&offer.savings_pct));

    assert_eq!(create_core_value(OfferCategory::Course, -20.0).value, 0.0);
}

#[test]
fn course_at_97_prices_at_97_under_value_based() {
    let core = create_core_value(OfferCategory::Course, 97.0);
    assert_close(core.value, 776.0);

    let raw = core.value * PricingStrategy::ValueBased.price_ratio();
    assert_close(raw, 116.4);

    let point = determine_price(core.value, PricingStrategy::ValueBased);
    assert_close(point.price, 97.0);
    assert_close(point.savings_pct, (776.0 - 97.0) / 776.0 * 100.0);
}

#[test]
fn total_value_is_core_plus_bonuses() {
    for count in 0..=10 {
        let mut request = course_request();
        request.bonus_count = count;
        let offer = composer().compose(&request, today());

        let expected = offer.core.value + offer.bonuses.iter().map(|b| b.value).sum::<f64>();
        assert_close(offer.total_value, expected);
        assert!(offer.actual_price <= offer.total_value);
        assert_eq!(offer.bonuses.len(), count.min(8));
    }
}

#[test]
fn bonuses_are_distinct_fractions_of_core() {
    let core = create_core_value(OfferCategory::Course, 97.0);
    let bonuses = generate_bonuses(&core, 8);

    for (index, bonus) in bonuses.iter().enumerate() {
        let ratio = bonus.value / core.value;
        assert!((0.10..=0.35).contains(&ratio), "ratio {ratio} out of range");
        assert!(bonuses[index + 1..].iter().all(|other| other.name != bonus.name));
    }
}

#[test]
fn determine_price_is_monotonic_in_total_value() {
    let strategies = [
        PricingStrategy::Penetration,
        PricingStrategy::Psychological,
        PricingStrategy::ValueBased,
        PricingStrategy::Competitive,
        PricingStrategy::Tiered,
        PricingStrategy::Premium,
    ];

    for strategy in strategies {
        let mut previous = 0.0;
        let mut total = 0.0;
        while total < 50_000.0 {
            let point = determine_price(total, strategy);
            assert!(
                point.price >= previous,
                "{strategy:?}: price dropped from {previous} to {} at total {total}",
                point.price
            );
            assert!(point.price <= total + 1e-9);
            if total > 0.0 {
                assert!((0.0..100.0).contains(&point.savings_pct));
            }
            previous = point.price;
            total += 3.7;
        }
    }
}

#[test]
fn composed_offer_carries_default_course_guarantee() {
    let offer = course_offer();

    assert_eq!(offer.id.0, "course-launch-your-online-course-lab");
    assert_eq!(offer.guarantee.kind, GuaranteeKind::MoneyBack);
    assert_eq!(offer.guarantee.duration_days, 30);
    assert_close(offer.total_value, 1_202.8);
    assert_close(offer.actual_price, 197.0);
}

#[test]
fn urgency_and_scarcity_requests_are_generated() {
    let mut request = course_request();
    request.urgency.push(UrgencyRequest {
        kind: UrgencyKind::Deadline,
        window_days: 3,
    });
    request.scarcity.push(ScarcityRequest {
        kind: ScarcityKind::LimitedSpots,
        quantity: Some(25),
    });

    let offer = composer().compose(&request, today());

    assert_eq!(offer.urgency.len(), 1);
    assert_eq!(
        offer.urgency[0].deadline,
        chrono::NaiveDate::from_ymd_opt(2025, 3, 13)
    );
    assert_eq!(offer.scarcity[0].quantity, Some(25));
    assert!(offer.scarcity[0].description.contains("25"));
}

#[test]
fn composing_twice_yields_equal_offers() {
    let composer = composer();
    let request = course_request();
    let first = composer.compose(&request, today());
    let second = composer.compose(&request, today());
    assert_eq!(first, second);

    let batch = composer.compose_batch(&[request.clone(), thin_request()], today());
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0], first);
}

#[test]
fn zero_and_negative_prices_are_clamped() {
    let mut request = course_request();
    request.base_price = -50.0;
    let offer = composer().compose(&request, today());

    assert_close(offer.total_value, 0.0);
    assert_close(offer.actual_price, 0.0);
    assert_close(offer.savings_pct, 0.0);
}
