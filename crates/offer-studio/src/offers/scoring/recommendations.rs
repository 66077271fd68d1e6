use super::super::domain::Offer;
use super::factors::{collect_signals, OfferSignals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationArea {
    ValueStack,
    Pricing,
    Urgency,
    Scarcity,
    Guarantee,
    Headline,
    Objections,
}

impl RecommendationArea {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ValueStack => "Value Stack",
            Self::Pricing => "Pricing",
            Self::Urgency => "Urgency",
            Self::Scarcity => "Scarcity",
            Self::Guarantee => "Guarantee",
            Self::Headline => "Headline",
            Self::Objections => "Objections",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// A single optimisation suggestion for an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub area: RecommendationArea,
    pub priority: RecommendationPriority,
    pub message: String,
}

impl Recommendation {
    fn new(area: RecommendationArea, priority: RecommendationPriority, message: String) -> Self {
        Self {
            area,
            priority,
            message,
        }
    }
}

/// Evaluates every rule independently; the output follows rule order.
pub fn get_optimization_recommendations(offer: &Offer) -> Vec<Recommendation> {
    let signals = collect_signals(offer);
    recommend(offer, &signals)
}

pub(crate) fn recommend(offer: &Offer, signals: &OfferSignals) -> Vec<Recommendation> {
    use RecommendationArea as Area;
    use RecommendationPriority as Priority;

    let mut recommendations = Vec::new();

    if offer.savings_pct < 60.0 {
        recommendations.push(Recommendation::new(
            Area::ValueStack,
            Priority::High,
            format!(
                "Savings are {:.0}%; add bonuses to push perceived savings above 60%",
                offer.savings_pct
            ),
        ));
    }

    if signals.value_ratio < 5.0 {
        recommendations.push(Recommendation::new(
            Area::Pricing,
            Priority::High,
            format!(
                "Value is only {:.1}x the price; aim for at least 5x",
                signals.value_ratio
            ),
        ));
    }

    if offer.urgency.is_empty() {
        recommendations.push(Recommendation::new(
            Area::Urgency,
            Priority::Medium,
            "Add a deadline or price increase to give buyers a reason to act now".to_string(),
        ));
    }

    if offer.scarcity.is_empty() {
        recommendations.push(Recommendation::new(
            Area::Scarcity,
            Priority::Low,
            "Cap spots or quantity to make the offer feel exclusive".to_string(),
        ));
    }

    if signals.guarantee_strength < 0.7 {
        recommendations.push(Recommendation::new(
            Area::Guarantee,
            Priority::High,
            format!(
                "{} is weak; upgrade to a money-back or results-based guarantee",
                offer.guarantee.kind.label()
            ),
        ));
    }

    if offer.bonuses.len() < 3 {
        recommendations.push(Recommendation::new(
            Area::ValueStack,
            Priority::Medium,
            format!(
                "Only {} bonus(es); stack at least 3 to strengthen the offer",
                offer.bonuses.len()
            ),
        ));
    }

    if !(3..=10).contains(&signals.headline_words) {
        recommendations.push(Recommendation::new(
            Area::Headline,
            Priority::Low,
            format!(
                "Headline has {} word(s); keep it between 3 and 10",
                signals.headline_words
            ),
        ));
    }

    for objection in &signals.uncovered_objections {
        recommendations.push(Recommendation::new(
            Area::Objections,
            Priority::Medium,
            format!("Address the objection \"{objection}\" directly in the offer"),
        ));
    }

    recommendations
}
