//! Lookalike audience scoring and funnel-stage targeting strategies.

pub mod domain;
mod lookalike;
pub mod router;
mod strategy;

pub use domain::{FunnelStage, SeedSource};
pub use lookalike::{
    estimated_reach, quality_score, LookalikeAudience, DEFAULT_MARKET_POPULATION,
    MAX_LOOKALIKE_PCT, MIN_LOOKALIKE_PCT,
};
pub use router::{targeting_router, LookalikeRequest, LookalikeResponse, TargetingSettings};
pub use strategy::{build_targeting_strategy, TargetingStrategy};
