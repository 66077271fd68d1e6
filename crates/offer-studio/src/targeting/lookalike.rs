use serde::{Deserialize, Serialize};

use super::domain::{FunnelStage, SeedSource};

pub const MIN_LOOKALIKE_PCT: u8 = 1;
pub const MAX_LOOKALIKE_PCT: u8 = 10;
pub const DEFAULT_MARKET_POPULATION: u64 = 230_000_000;

/// Platform audience expanded from a seed. Quality and reach are derived from
/// the other fields at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookalikeAudience {
    pub seed_source: SeedSource,
    pub seed_size: u64,
    pub percentage: u8,
    pub funnel_stage: FunnelStage,
    pub quality_score: f64,
    pub estimated_reach: u64,
}

impl LookalikeAudience {
    pub fn new(
        seed_source: SeedSource,
        seed_size: u64,
        percentage: u8,
        funnel_stage: FunnelStage,
        market_population: u64,
    ) -> Self {
        let percentage = percentage.clamp(MIN_LOOKALIKE_PCT, MAX_LOOKALIKE_PCT);

        Self {
            seed_source,
            seed_size,
            percentage,
            funnel_stage,
            quality_score: quality_score(seed_source, seed_size, percentage, funnel_stage),
            estimated_reach: estimated_reach(percentage, market_population),
        }
    }
}

pub fn quality_score(
    seed_source: SeedSource,
    seed_size: u64,
    percentage: u8,
    funnel_stage: FunnelStage,
) -> f64 {
    let percentage = percentage.clamp(MIN_LOOKALIKE_PCT, MAX_LOOKALIKE_PCT);
    let precision = (1.0 - 0.08 * f64::from(percentage - 1)).max(0.3);
    let stage_fit = if funnel_stage.lookalike_range().contains(&percentage) {
        1.0
    } else {
        0.8
    };

    (seed_source.quality() * seed_size_factor(seed_size) * precision * stage_fit).clamp(0.0, 1.0)
}

pub fn estimated_reach(percentage: u8, market_population: u64) -> u64 {
    let percentage = percentage.clamp(MIN_LOOKALIKE_PCT, MAX_LOOKALIKE_PCT);
    let reach = u128::from(market_population) * u128::from(percentage) / 100;
    u64::try_from(reach).unwrap_or(u64::MAX)
}

fn seed_size_factor(seed_size: u64) -> f64 {
    match seed_size {
        10_000.. => 1.0,
        5_000..=9_999 => 0.9,
        1_000..=4_999 => 0.75,
        100..=999 => 0.5,
        _ => 0.25,
    }
}
