use serde::Serialize;

use super::domain::{OfferCategory, PricingStrategy, ValueItem};

/// Share of the base price it costs to deliver the core item.
const CORE_COST_RATIO: f64 = 0.2;

/// Base prices are clamped into `0..=MAX_BASE_PRICE` so the stack stays finite.
pub const MAX_BASE_PRICE: f64 = 1_000_000_000.0;

struct BonusTemplate {
    name: &'static str,
    description: &'static str,
    value_ratio: f64,
    cost_ratio: f64,
}

const BONUS_TEMPLATES: [BonusTemplate; 8] = [
    BonusTemplate {
        name: "Quick Start Implementation Guide",
        description: "Step-by-step playbook to get the first result in days",
        value_ratio: 0.10,
        cost_ratio: 0.02,
    },
    BonusTemplate {
        name: "Private Community Access",
        description: "Members-only group for feedback and accountability",
        value_ratio: 0.25,
        cost_ratio: 0.05,
    },
    BonusTemplate {
        name: "Done-For-You Templates Pack",
        description: "Ready-to-use templates that remove the blank-page problem",
        value_ratio: 0.20,
        cost_ratio: 0.03,
    },
    BonusTemplate {
        name: "Live Q&A Coaching Calls",
        description: "Monthly group calls answering implementation questions",
        value_ratio: 0.35,
        cost_ratio: 0.10,
    },
    BonusTemplate {
        name: "Swipe File & Script Library",
        description: "Proven scripts and examples to adapt immediately",
        value_ratio: 0.15,
        cost_ratio: 0.02,
    },
    BonusTemplate {
        name: "Bonus Masterclass Recording",
        description: "Deep-dive session on the most common sticking point",
        value_ratio: 0.30,
        cost_ratio: 0.04,
    },
    BonusTemplate {
        name: "Progress Tracker Toolkit",
        description: "Checklists and trackers to measure weekly progress",
        value_ratio: 0.12,
        cost_ratio: 0.01,
    },
    BonusTemplate {
        name: "Priority Email Support",
        description: "Direct line for questions with a one-day response window",
        value_ratio: 0.18,
        cost_ratio: 0.06,
    },
];

pub const MAX_BONUSES: usize = BONUS_TEMPLATES.len();

/// Price and savings derived from a total value and a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub price: f64,
    pub savings_pct: f64,
}

pub fn create_core_value(category: OfferCategory, base_price: f64) -> ValueItem {
    let base_price = base_price.max(0.0).min(MAX_BASE_PRICE);
    ValueItem {
        name: format!("Core {}", category.label()),
        description: format!(
            "Complete {} delivering the primary transformation",
            category.label().to_ascii_lowercase()
        ),
        value: base_price * category.core_multiplier(),
        actual_cost: base_price * CORE_COST_RATIO,
        is_bonus: false,
    }
}

/// Picks `count` bonuses from the template table in order, without
/// replacement. Requests beyond the table size return every template.
pub fn generate_bonuses(core: &ValueItem, count: usize) -> Vec<ValueItem> {
    BONUS_TEMPLATES
        .iter()
        .take(count)
        .map(|template| ValueItem {
            name: template.name.to_string(),
            description: template.description.to_string(),
            value: core.value * template.value_ratio,
            actual_cost: core.value * template.cost_ratio,
            is_bonus: true,
        })
        .collect()
}

pub fn total_value(core: &ValueItem, bonuses: &[ValueItem]) -> f64 {
    core.value + bonuses.iter().map(|bonus| bonus.value).sum::<f64>()
}

pub fn determine_price(total_value: f64, strategy: PricingStrategy) -> PricePoint {
    let total_value = total_value.max(0.0);
    let raw = total_value * strategy.price_ratio();
    // Charm endings can round upward, never past the stack itself.
    let price = round_to_price_point(raw).min(total_value);
    let savings_pct = (total_value - price) / total_value.max(f64::EPSILON) * 100.0;

    PricePoint { price, savings_pct }
}

/// Rounds to a familiar "ends in 7" price, with coarser steps as the price grows.
pub fn round_to_price_point(raw: f64) -> f64 {
    let raw = raw.max(0.0);
    let step = if raw < 100.0 {
        10.0
    } else if raw < 500.0 {
        50.0
    } else if raw < 2_000.0 {
        100.0
    } else {
        500.0
    };

    let rounded = ((raw / step).round() * step).max(10.0);
    rounded - 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_point_tiers_end_in_seven() {
        assert_eq!(round_to_price_point(4.0), 7.0);
        assert_eq!(round_to_price_point(48.0), 47.0);
        assert_eq!(round_to_price_point(116.4), 97.0);
        assert_eq!(round_to_price_point(290.0), 297.0);
        assert_eq!(round_to_price_point(960.0), 997.0);
        assert_eq!(round_to_price_point(2_300.0), 2_497.0);
    }

    #[test]
    fn price_never_exceeds_total_value() {
        let point = determine_price(5.0, PricingStrategy::Premium);
        assert_eq!(point.price, 5.0);
        assert_eq!(point.savings_pct, 0.0);
    }

    #[test]
    fn zero_value_prices_at_zero() {
        let point = determine_price(0.0, PricingStrategy::ValueBased);
        assert_eq!(point.price, 0.0);
        assert_eq!(point.savings_pct, 0.0);
    }

    #[test]
    fn bonus_request_beyond_table_returns_all_templates() {
        let core = create_core_value(OfferCategory::Digital, 50.0);
        let bonuses = generate_bonuses(&core, 20);
        assert_eq!(bonuses.len(), MAX_BONUSES);
        assert!(bonuses.iter().all(|bonus| bonus.is_bonus));
    }
}
