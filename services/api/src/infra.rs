use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use offer_studio::config::StudioConfig;
use offer_studio::offers::{
    GuaranteeKind, OfferCategory, OfferComposer, OfferDefaults, OfferService, PricingStrategy,
    ReportRenderer,
};
use offer_studio::targeting::{FunnelStage, SeedSource, TargetingSettings};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn offer_defaults(studio: &StudioConfig) -> OfferDefaults {
    OfferDefaults {
        strategy: studio.default_strategy,
        bonus_count: studio.default_bonus_count,
    }
}

pub(crate) fn offer_service(studio: &StudioConfig) -> OfferService {
    OfferService::new(
        OfferComposer::default(),
        ReportRenderer::new(studio.report_width),
    )
    .with_defaults(offer_defaults(studio))
}

pub(crate) fn targeting_settings(studio: &StudioConfig) -> TargetingSettings {
    TargetingSettings {
        market_population: studio.market_population,
        renderer: ReportRenderer::new(studio.report_width),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Unknown categories are accepted and priced with the default multiplier.
pub(crate) fn parse_category(raw: &str) -> Result<OfferCategory, String> {
    Ok(OfferCategory::from_label(raw))
}

pub(crate) fn parse_strategy(raw: &str) -> Result<PricingStrategy, String> {
    PricingStrategy::parse(raw).ok_or_else(|| {
        format!(
            "unknown pricing strategy '{raw}' (expected penetration, psychological, value_based, competitive, tiered, or premium)"
        )
    })
}

pub(crate) fn parse_guarantee(raw: &str) -> Result<GuaranteeKind, String> {
    GuaranteeKind::parse(raw).ok_or_else(|| {
        format!(
            "unknown guarantee '{raw}' (expected none, satisfaction, money_back, results_based, double_money_back, or lifetime)"
        )
    })
}

pub(crate) fn parse_stage(raw: &str) -> Result<FunnelStage, String> {
    FunnelStage::parse(raw).ok_or_else(|| {
        format!("unknown funnel stage '{raw}' (expected awareness, consideration, conversion, or retention)")
    })
}

pub(crate) fn parse_seed_source(raw: &str) -> Result<SeedSource, String> {
    SeedSource::parse(raw).ok_or_else(|| format!("unknown seed source '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_never_fails() {
        assert_eq!(parse_category("Course"), Ok(OfferCategory::Course));
        assert_eq!(parse_category("space tourism"), Ok(OfferCategory::Product));
    }

    #[test]
    fn strategy_parsing_reports_unknown_values() {
        assert_eq!(parse_strategy("value-based"), Ok(PricingStrategy::ValueBased));
        let err = parse_strategy("free").expect_err("unknown strategy rejected");
        assert!(err.contains("free"));
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(
            parse_date(" 2025-03-10 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date"))
        );
        assert!(parse_date("03/10/2025").is_err());
    }
}
