use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use super::domain::{Audience, Offer, OfferCategory, OfferId, PricingStrategy};
use super::elements::{
    generate_guarantee, generate_scarcity, generate_urgency, GuaranteeRequest, ScarcityRequest,
    UrgencyRequest,
};
use super::scoring::{ConversionEstimate, ConversionScorer, ScoringWeights};
use super::value::{create_core_value, determine_price, generate_bonuses, total_value};

pub const DEFAULT_BONUS_COUNT: usize = 3;

/// Strategy and bonus count substituted when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferDefaults {
    pub strategy: PricingStrategy,
    pub bonus_count: usize,
}

impl Default for OfferDefaults {
    fn default() -> Self {
        Self {
            strategy: PricingStrategy::default(),
            bonus_count: DEFAULT_BONUS_COUNT,
        }
    }
}

/// Fully resolved parameters for a single offer. The CLI, the HTTP API, and
/// batch files all end up here.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferRequest {
    pub name: String,
    pub category: OfferCategory,
    pub base_price: f64,
    pub pricing_strategy: PricingStrategy,
    pub bonus_count: usize,
    pub guarantee: Option<GuaranteeRequest>,
    pub urgency: Vec<UrgencyRequest>,
    pub scarcity: Vec<ScarcityRequest>,
    pub audience: Option<Audience>,
}

impl OfferRequest {
    pub fn new(name: impl Into<String>, category: OfferCategory, base_price: f64) -> Self {
        Self {
            name: name.into(),
            category,
            base_price,
            pricing_strategy: PricingStrategy::default(),
            bonus_count: DEFAULT_BONUS_COUNT,
            guarantee: None,
            urgency: Vec::new(),
            scarcity: Vec::new(),
            audience: None,
        }
    }
}

/// Wire form of an offer request. Unknown categories and strategies are
/// accepted; omitted strategy and bonus count take the service defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferPayload {
    pub name: String,
    #[serde(deserialize_with = "lenient_category")]
    pub category: OfferCategory,
    pub base_price: f64,
    #[serde(default, deserialize_with = "lenient_strategy")]
    pub pricing_strategy: Option<PricingStrategy>,
    #[serde(default)]
    pub bonus_count: Option<usize>,
    #[serde(default)]
    pub guarantee: Option<GuaranteeRequest>,
    #[serde(default)]
    pub urgency: Vec<UrgencyRequest>,
    #[serde(default)]
    pub scarcity: Vec<ScarcityRequest>,
    #[serde(default)]
    pub audience: Option<Audience>,
}

impl OfferPayload {
    pub fn into_request(self, defaults: OfferDefaults) -> OfferRequest {
        OfferRequest {
            name: self.name,
            category: self.category,
            base_price: self.base_price,
            pricing_strategy: self.pricing_strategy.unwrap_or(defaults.strategy),
            bonus_count: self.bonus_count.unwrap_or(defaults.bonus_count),
            guarantee: self.guarantee,
            urgency: self.urgency,
            scarcity: self.scarcity,
            audience: self.audience,
        }
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<OfferCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(OfferCategory::from_label(&raw))
}

fn lenient_strategy<'de, D>(deserializer: D) -> Result<Option<PricingStrategy>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|raw| {
        let strategy = PricingStrategy::parse(raw);
        if strategy.is_none() {
            warn!(strategy = raw, "unknown pricing strategy, using configured default");
        }
        strategy
    }))
}

/// Builds offers from requests. Holds no history: every call returns a fresh
/// value and callers decide what to keep.
#[derive(Debug, Clone, Default)]
pub struct OfferComposer {
    scorer: ConversionScorer,
}

impl OfferComposer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scorer: ConversionScorer::new(weights),
        }
    }

    pub fn scorer(&self) -> &ConversionScorer {
        &self.scorer
    }

    pub fn compose(&self, request: &OfferRequest, today: NaiveDate) -> Offer {
        let core = create_core_value(request.category, request.base_price);
        let bonuses = generate_bonuses(&core, request.bonus_count);
        let total_value = total_value(&core, &bonuses);
        let price_point = determine_price(total_value, request.pricing_strategy);

        let guarantee_request = request
            .guarantee
            .unwrap_or_else(|| GuaranteeRequest::default_for(request.category));
        let guarantee = generate_guarantee(guarantee_request.kind, guarantee_request.duration_days);

        let urgency = request
            .urgency
            .iter()
            .map(|element| generate_urgency(element.kind, today, element.window_days))
            .collect();
        let scarcity = request
            .scarcity
            .iter()
            .map(|element| generate_scarcity(element.kind, element.quantity))
            .collect();

        let mut offer = Offer {
            id: OfferId::derive(&request.name, request.category),
            name: request.name.trim().to_string(),
            category: request.category,
            core,
            bonuses,
            pricing_strategy: request.pricing_strategy,
            guarantee,
            urgency,
            scarcity,
            audience: request.audience.clone(),
            total_value,
            actual_price: price_point.price,
            savings_pct: price_point.savings_pct,
            conversion: ConversionEstimate::default(),
        };
        offer.conversion = self.scorer.estimate_conversion(&offer);

        debug!(
            offer_id = %offer.id,
            total_value = offer.total_value,
            price = offer.actual_price,
            label = offer.conversion.label.label(),
            "offer composed"
        );

        offer
    }

    pub fn compose_batch(&self, requests: &[OfferRequest], today: NaiveDate) -> Vec<Offer> {
        requests
            .iter()
            .map(|request| self.compose(request, today))
            .collect()
    }
}
