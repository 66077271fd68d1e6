use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{
    Guarantee, GuaranteeKind, OfferCategory, ScarcityElement, ScarcityKind, UrgencyElement,
    UrgencyKind,
};

/// Requested guarantee before statement and terms are generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeRequest {
    pub kind: GuaranteeKind,
    pub duration_days: u16,
}

impl GuaranteeRequest {
    /// Guarantee used when a request does not name one.
    pub const fn default_for(category: OfferCategory) -> Self {
        match category {
            OfferCategory::Course | OfferCategory::Digital | OfferCategory::Membership => Self {
                kind: GuaranteeKind::MoneyBack,
                duration_days: 30,
            },
            OfferCategory::Consulting | OfferCategory::Service => Self {
                kind: GuaranteeKind::ResultsBased,
                duration_days: 60,
            },
            OfferCategory::Product | OfferCategory::Subscription | OfferCategory::Bundle => Self {
                kind: GuaranteeKind::Satisfaction,
                duration_days: 30,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgencyRequest {
    pub kind: UrgencyKind,
    #[serde(default = "default_window_days")]
    pub window_days: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScarcityRequest {
    pub kind: ScarcityKind,
    #[serde(default)]
    pub quantity: Option<u32>,
}

fn default_window_days() -> u16 {
    7
}

pub fn generate_guarantee(kind: GuaranteeKind, duration_days: u16) -> Guarantee {
    let (statement, terms) = match kind {
        GuaranteeKind::None => {
            return Guarantee {
                kind,
                statement: String::new(),
                terms: String::new(),
                duration_days: 0,
            }
        }
        GuaranteeKind::Satisfaction => (
            format!("Love it or get a full refund within {duration_days} days."),
            "Contact support within the guarantee window for a refund.".to_string(),
        ),
        GuaranteeKind::MoneyBack => (
            format!("{duration_days}-day, no-questions-asked money-back guarantee."),
            "Request a refund by email before the window closes.".to_string(),
        ),
        GuaranteeKind::ResultsBased => (
            format!("See measurable results in {duration_days} days or we keep working free."),
            "Complete the core program and share progress to qualify.".to_string(),
        ),
        GuaranteeKind::DoubleMoneyBack => (
            format!("If it doesn't work within {duration_days} days, we refund double."),
            "Show the work you implemented to claim the double refund.".to_string(),
        ),
        GuaranteeKind::Lifetime => (
            "Lifetime guarantee: a refund whenever it stops delivering value.".to_string(),
            "Valid for the lifetime of the product.".to_string(),
        ),
    };

    let duration_days = if kind == GuaranteeKind::Lifetime {
        0
    } else {
        duration_days
    };

    Guarantee {
        kind,
        statement,
        terms,
        duration_days,
    }
}

pub fn generate_urgency(kind: UrgencyKind, today: NaiveDate, window_days: u16) -> UrgencyElement {
    let deadline = today + Duration::days(i64::from(window_days));
    let description = match kind {
        UrgencyKind::Deadline => format!("Offer closes on {deadline}"),
        UrgencyKind::PriceIncrease => format!("Price goes up after {deadline}"),
        UrgencyKind::BonusExpiry => format!("Bonuses are removed after {deadline}"),
        UrgencyKind::CohortClose => format!("Enrollment for this cohort closes {deadline}"),
        UrgencyKind::LimitedTime => format!("Available for the next {window_days} days only"),
    };

    UrgencyElement {
        kind,
        description,
        deadline: Some(deadline),
    }
}

pub fn generate_scarcity(kind: ScarcityKind, quantity: Option<u32>) -> ScarcityElement {
    let description = match (kind, quantity) {
        (ScarcityKind::LimitedQuantity, Some(count)) => format!("Only {count} units available"),
        (ScarcityKind::LimitedQuantity, None) => "Limited stock available".to_string(),
        (ScarcityKind::LimitedSpots, Some(count)) => format!("Only {count} spots open"),
        (ScarcityKind::LimitedSpots, None) => "Limited spots open".to_string(),
        (ScarcityKind::ExclusiveAccess, _) => "Exclusive access for invited members".to_string(),
        (ScarcityKind::Seasonal, _) => "Seasonal offer, not repeated this year".to_string(),
    };

    ScarcityElement {
        kind,
        description,
        quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_urgency_uses_window() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let element = generate_urgency(UrgencyKind::PriceIncrease, today, 5);
        assert_eq!(element.deadline, NaiveDate::from_ymd_opt(2025, 3, 6));
        assert!(element.description.contains("2025-03-06"));
    }

    #[test]
    fn missing_guarantee_has_no_terms() {
        let guarantee = generate_guarantee(GuaranteeKind::None, 30);
        assert!(!guarantee.is_present());
        assert!(guarantee.statement.is_empty());
        assert_eq!(guarantee.duration_days, 0);
    }
}
