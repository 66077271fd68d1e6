use serde::Serialize;

use super::domain::{FunnelStage, SeedSource};
use super::lookalike::LookalikeAudience;

/// Stage-specific lookalike tiers and messaging guidance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetingStrategy {
    pub stage: FunnelStage,
    pub lookalikes: Vec<LookalikeAudience>,
    pub messaging_angle: &'static str,
    pub bid_objective: &'static str,
}

impl TargetingStrategy {
    pub fn best_lookalike(&self) -> Option<&LookalikeAudience> {
        self.lookalikes
            .iter()
            .max_by(|a, b| a.quality_score.total_cmp(&b.quality_score))
    }

    /// Nested percentages overlap, so the widest tier bounds the reach.
    pub fn total_reach(&self) -> u64 {
        self.lookalikes
            .iter()
            .map(|audience| audience.estimated_reach)
            .max()
            .unwrap_or(0)
    }
}

/// One lookalike per whole percentage in the stage's recommended range.
pub fn build_targeting_strategy(
    stage: FunnelStage,
    seed_source: SeedSource,
    seed_size: u64,
    market_population: u64,
) -> TargetingStrategy {
    let lookalikes = stage
        .lookalike_range()
        .map(|percentage| {
            LookalikeAudience::new(seed_source, seed_size, percentage, stage, market_population)
        })
        .collect();

    TargetingStrategy {
        stage,
        lookalikes,
        messaging_angle: stage.messaging_angle(),
        bid_objective: stage.bid_objective(),
    }
}
