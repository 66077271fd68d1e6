use super::super::domain::{
    GuaranteeKind, Offer, PricingStrategy, ScarcityKind, UrgencyKind,
};
use super::weights::ScoringWeights;
use super::{ConversionFactor, FactorScore};

const SOCIAL_PROOF_BASELINE: f64 = 0.7;

const PRICE_KEYWORDS: [&str; 6] = ["price", "cost", "expensive", "afford", "money", "budget"];
const TIME_KEYWORDS: [&str; 4] = ["time", "busy", "overwhelm", "schedule"];
const RISK_KEYWORDS: [&str; 6] = ["risk", "trust", "scam", "work", "guarantee", "results"];

/// Intermediate facts shared by the factor scores and the recommendation rules.
pub(crate) struct OfferSignals {
    pub headline_words: usize,
    pub value_ratio: f64,
    pub guarantee_strength: f64,
    pub covered_objections: usize,
    pub uncovered_objections: Vec<String>,
}

pub(crate) fn collect_signals(offer: &Offer) -> OfferSignals {
    let mut covered_objections = 0;
    let mut uncovered_objections = Vec::new();

    if let Some(audience) = &offer.audience {
        for objection in &audience.objections {
            if objection_is_covered(offer, objection) {
                covered_objections += 1;
            } else {
                uncovered_objections.push(objection.clone());
            }
        }
    }

    OfferSignals {
        headline_words: offer.name.split_whitespace().count(),
        value_ratio: offer.value_to_price_ratio(),
        guarantee_strength: guarantee_strength(offer.guarantee.kind),
        covered_objections,
        uncovered_objections,
    }
}

pub(crate) fn score_offer(offer: &Offer, weights: &ScoringWeights) -> (Vec<FactorScore>, f64) {
    let signals = collect_signals(offer);

    let raw_scores = [
        (
            ConversionFactor::HeadlineClarity,
            weights.headline_clarity,
            headline_clarity(signals.headline_words),
            format!("{} word headline", signals.headline_words),
        ),
        (
            ConversionFactor::ValuePerception,
            weights.value_perception,
            value_perception(signals.value_ratio),
            format!("value is {:.1}x the price", signals.value_ratio),
        ),
        (
            ConversionFactor::UrgencyStrength,
            weights.urgency_strength,
            urgency_strength(offer),
            format!("{} urgency element(s)", offer.urgency.len()),
        ),
        (
            ConversionFactor::ScarcityBelievability,
            weights.scarcity_believability,
            scarcity_believability(offer),
            format!("{} scarcity element(s)", offer.scarcity.len()),
        ),
        (
            ConversionFactor::GuaranteeStrength,
            weights.guarantee_strength,
            signals.guarantee_strength,
            offer.guarantee.kind.label().to_string(),
        ),
        (
            ConversionFactor::SocialProof,
            weights.social_proof,
            SOCIAL_PROOF_BASELINE,
            "baseline social proof".to_string(),
        ),
        (
            ConversionFactor::CtaClarity,
            weights.cta_clarity,
            cta_clarity(offer.pricing_strategy),
            format!("{} pricing", offer.pricing_strategy.label()),
        ),
        (
            ConversionFactor::ObjectionCoverage,
            weights.objection_coverage,
            objection_coverage(offer, &signals),
            objection_note(&signals),
        ),
    ];

    let mut components = Vec::with_capacity(raw_scores.len());
    let mut total = 0.0;
    for (factor, weight, raw, notes) in raw_scores {
        let contribution = raw * weight;
        total += contribution;
        components.push(FactorScore {
            factor,
            raw,
            weight,
            contribution,
            notes,
        });
    }

    (components, total.clamp(0.0, 1.0))
}

fn headline_clarity(words: usize) -> f64 {
    match words {
        3..=10 => 0.9,
        1..=2 | 11..=14 => 0.6,
        _ => 0.4,
    }
}

fn value_perception(ratio: f64) -> f64 {
    if ratio >= 10.0 {
        1.0
    } else if ratio >= 5.0 {
        0.8
    } else if ratio >= 3.0 {
        0.6
    } else {
        0.4
    }
}

fn urgency_strength(offer: &Offer) -> f64 {
    let strongest = offer
        .urgency
        .iter()
        .map(|element| match element.kind {
            UrgencyKind::Deadline => 0.9,
            UrgencyKind::PriceIncrease => 0.85,
            UrgencyKind::CohortClose => 0.8,
            UrgencyKind::BonusExpiry => 0.75,
            UrgencyKind::LimitedTime => 0.7,
        })
        .reduce(f64::max);

    match strongest {
        None => 0.2,
        Some(score) => {
            let extra = offer.urgency.len().saturating_sub(1) as f64 * 0.05;
            (score + extra).min(1.0)
        }
    }
}

fn scarcity_believability(offer: &Offer) -> f64 {
    offer
        .scarcity
        .iter()
        .map(|element| match element.kind {
            ScarcityKind::LimitedSpots => 0.85,
            ScarcityKind::LimitedQuantity => match element.quantity {
                Some(quantity) if quantity > 100 => 0.6,
                _ => 0.9,
            },
            ScarcityKind::ExclusiveAccess => 0.7,
            ScarcityKind::Seasonal => 0.65,
        })
        .fold(0.3, f64::max)
}

pub(crate) fn guarantee_strength(kind: GuaranteeKind) -> f64 {
    match kind {
        GuaranteeKind::None => 0.1,
        GuaranteeKind::Satisfaction => 0.6,
        GuaranteeKind::MoneyBack => 0.7,
        GuaranteeKind::ResultsBased => 0.85,
        GuaranteeKind::DoubleMoneyBack => 0.95,
        GuaranteeKind::Lifetime => 1.0,
    }
}

fn cta_clarity(strategy: PricingStrategy) -> f64 {
    match strategy {
        PricingStrategy::Tiered => 0.7,
        _ => 0.9,
    }
}

fn objection_coverage(offer: &Offer, signals: &OfferSignals) -> f64 {
    let total = signals.covered_objections + signals.uncovered_objections.len();
    if total > 0 {
        return 0.4 + 0.6 * signals.covered_objections as f64 / total as f64;
    }

    let base = if offer.guarantee.is_present() { 0.5 } else { 0.3 };
    let bonus_credit = (offer.bonuses.len() as f64 * 0.1).min(0.3);
    (base + bonus_credit).min(1.0)
}

fn objection_note(signals: &OfferSignals) -> String {
    let total = signals.covered_objections + signals.uncovered_objections.len();
    if total == 0 {
        "no audience objections supplied".to_string()
    } else {
        format!("{} of {} objections addressed", signals.covered_objections, total)
    }
}

/// Keyword groups are tried in order: price, then risk, then time.
fn objection_is_covered(offer: &Offer, objection: &str) -> bool {
    let lowered = objection.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|word| lowered.contains(word));

    if mentions(&PRICE_KEYWORDS) {
        offer.savings_pct >= 50.0
    } else if mentions(&RISK_KEYWORDS) {
        offer.guarantee.is_present()
    } else if mentions(&TIME_KEYWORDS) {
        !offer.bonuses.is_empty()
    } else {
        false
    }
}
