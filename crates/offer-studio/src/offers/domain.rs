use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::ConversionEstimate;

/// Multiplier applied when a category label cannot be resolved.
pub const DEFAULT_CORE_MULTIPLIER: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferCategory {
    Product,
    Service,
    Subscription,
    Bundle,
    Digital,
    Course,
    Membership,
    Consulting,
}

impl OfferCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Product,
            Self::Service,
            Self::Subscription,
            Self::Bundle,
            Self::Digital,
            Self::Course,
            Self::Membership,
            Self::Consulting,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Service => "Service",
            Self::Subscription => "Subscription",
            Self::Bundle => "Bundle",
            Self::Digital => "Digital",
            Self::Course => "Course",
            Self::Membership => "Membership",
            Self::Consulting => "Consulting",
        }
    }

    /// Perceived-value multiplier applied to the base price of the core item.
    pub const fn core_multiplier(self) -> f64 {
        match self {
            Self::Product => DEFAULT_CORE_MULTIPLIER,
            Self::Subscription => 4.0,
            Self::Service => 5.0,
            Self::Bundle => 6.0,
            Self::Membership => 7.0,
            Self::Course => 8.0,
            Self::Digital => 10.0,
            Self::Consulting => 12.0,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "product" | "physical" => Some(Self::Product),
            "service" => Some(Self::Service),
            "subscription" => Some(Self::Subscription),
            "bundle" => Some(Self::Bundle),
            "digital" | "digital_product" => Some(Self::Digital),
            "course" | "online_course" => Some(Self::Course),
            "membership" => Some(Self::Membership),
            "consulting" | "coaching" => Some(Self::Consulting),
            _ => None,
        }
    }

    /// Resolves a raw label, substituting [`OfferCategory::Product`] (and with it
    /// the default multiplier) for anything unrecognised.
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            tracing::warn!(category = raw, "unknown offer category, using default multiplier");
            Self::Product
        })
    }
}

impl fmt::Display for OfferCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    Penetration,
    Psychological,
    ValueBased,
    Competitive,
    Tiered,
    Premium,
}

impl Default for PricingStrategy {
    fn default() -> Self {
        Self::ValueBased
    }
}

impl PricingStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Penetration => "Penetration",
            Self::Psychological => "Psychological",
            Self::ValueBased => "Value-Based",
            Self::Competitive => "Competitive",
            Self::Tiered => "Tiered",
            Self::Premium => "Premium",
        }
    }

    /// Fraction of the total perceived value charged before price-point rounding.
    pub const fn price_ratio(self) -> f64 {
        match self {
            Self::Penetration => 0.05,
            Self::Psychological => 0.10,
            Self::ValueBased => 0.15,
            Self::Competitive => 0.20,
            Self::Tiered => 0.25,
            Self::Premium => 0.30,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "penetration" => Some(Self::Penetration),
            "psychological" | "charm" => Some(Self::Psychological),
            "value_based" | "value" => Some(Self::ValueBased),
            "competitive" => Some(Self::Competitive),
            "tiered" => Some(Self::Tiered),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuaranteeKind {
    None,
    Satisfaction,
    MoneyBack,
    ResultsBased,
    DoubleMoneyBack,
    Lifetime,
}

impl GuaranteeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No Guarantee",
            Self::Satisfaction => "Satisfaction Guarantee",
            Self::MoneyBack => "Money-Back Guarantee",
            Self::ResultsBased => "Results-Based Guarantee",
            Self::DoubleMoneyBack => "Double Your Money Back",
            Self::Lifetime => "Lifetime Guarantee",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "none" => Some(Self::None),
            "satisfaction" => Some(Self::Satisfaction),
            "money_back" | "refund" => Some(Self::MoneyBack),
            "results_based" | "results" => Some(Self::ResultsBased),
            "double_money_back" | "double" => Some(Self::DoubleMoneyBack),
            "lifetime" => Some(Self::Lifetime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyKind {
    Deadline,
    PriceIncrease,
    BonusExpiry,
    CohortClose,
    LimitedTime,
}

impl UrgencyKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deadline => "Deadline",
            Self::PriceIncrease => "Price Increase",
            Self::BonusExpiry => "Bonus Expiry",
            Self::CohortClose => "Cohort Close",
            Self::LimitedTime => "Limited Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScarcityKind {
    LimitedQuantity,
    LimitedSpots,
    ExclusiveAccess,
    Seasonal,
}

impl ScarcityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LimitedQuantity => "Limited Quantity",
            Self::LimitedSpots => "Limited Spots",
            Self::ExclusiveAccess => "Exclusive Access",
            Self::Seasonal => "Seasonal",
        }
    }
}

/// A named component of the value stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueItem {
    pub name: String,
    pub description: String,
    /// Perceived value presented to the buyer.
    pub value: f64,
    /// What it costs to deliver.
    pub actual_cost: f64,
    pub is_bonus: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guarantee {
    pub kind: GuaranteeKind,
    pub statement: String,
    pub terms: String,
    pub duration_days: u16,
}

impl Guarantee {
    pub fn is_present(&self) -> bool {
        self.kind != GuaranteeKind::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyElement {
    pub kind: UrgencyKind,
    pub description: String,
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScarcityElement {
    pub kind: ScarcityKind,
    pub description: String,
    pub quantity: Option<u32>,
}

/// Target customer description consumed by scoring and recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub segment: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub desires: Vec<String>,
    #[serde(default)]
    pub objections: Vec<String>,
    #[serde(default)]
    pub decision_factors: Vec<String>,
}

/// Stable identifier derived from the offer name and category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub String);

impl OfferId {
    pub fn derive(name: &str, category: OfferCategory) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut last_dash = true;
        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        let slug = slug.trim_end_matches('-');
        let slug = if slug.is_empty() { "offer" } else { slug };
        Self(format!("{}-{}", normalize_key(category.label()), slug))
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully composed value proposition. Every derived field is computed by
/// [`super::OfferComposer::compose`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub category: OfferCategory,
    pub core: ValueItem,
    pub bonuses: Vec<ValueItem>,
    pub pricing_strategy: PricingStrategy,
    pub guarantee: Guarantee,
    pub urgency: Vec<UrgencyElement>,
    pub scarcity: Vec<ScarcityElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
    pub total_value: f64,
    pub actual_price: f64,
    pub savings_pct: f64,
    pub conversion: ConversionEstimate,
}

impl Offer {
    pub fn value_items(&self) -> impl Iterator<Item = &ValueItem> {
        std::iter::once(&self.core).chain(self.bonuses.iter())
    }

    pub fn value_to_price_ratio(&self) -> f64 {
        self.total_value / self.actual_price.max(f64::EPSILON)
    }

    pub fn delivery_cost(&self) -> f64 {
        self.value_items().map(|item| item.actual_cost).sum()
    }
}

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}
