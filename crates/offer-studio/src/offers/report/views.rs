use super::super::domain::{Offer, OfferCategory, OfferId, PricingStrategy};
use super::super::scoring::{
    get_optimization_recommendations, ConversionLabel, FactorScore, Recommendation,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValueItemView {
    pub name: String,
    pub value: f64,
    pub is_bonus: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferSummaryView {
    pub id: OfferId,
    pub name: String,
    pub category: OfferCategory,
    pub category_label: &'static str,
    pub pricing_strategy: PricingStrategy,
    pub value_items: Vec<ValueItemView>,
    pub total_value: f64,
    pub actual_price: f64,
    pub savings_pct: f64,
    pub delivery_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urgency: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scarcity: Vec<String>,
    pub conversion_label: ConversionLabel,
    pub conversion_score: f64,
    pub components: Vec<FactorScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}

impl OfferSummaryView {
    pub fn from_offer(offer: &Offer) -> Self {
        let value_items = offer
            .value_items()
            .map(|item| ValueItemView {
                name: item.name.clone(),
                value: round_cents(item.value),
                is_bonus: item.is_bonus,
            })
            .collect();

        let guarantee = offer
            .guarantee
            .is_present()
            .then(|| offer.guarantee.statement.clone());

        Self {
            id: offer.id.clone(),
            name: offer.name.clone(),
            category: offer.category,
            category_label: offer.category.label(),
            pricing_strategy: offer.pricing_strategy,
            value_items,
            total_value: round_cents(offer.total_value),
            actual_price: round_cents(offer.actual_price),
            savings_pct: (offer.savings_pct * 10.0).round() / 10.0,
            delivery_cost: round_cents(offer.delivery_cost()),
            guarantee,
            urgency: offer
                .urgency
                .iter()
                .map(|element| element.description.clone())
                .collect(),
            scarcity: offer
                .scarcity
                .iter()
                .map(|element| element.description.clone())
                .collect(),
            conversion_label: offer.conversion.label,
            conversion_score: (offer.conversion.score * 1000.0).round() / 1000.0,
            components: offer.conversion.components.clone(),
            recommendations: get_optimization_recommendations(offer),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
