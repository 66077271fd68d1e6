//! Offer value-stack composition, conversion scoring, and text reports.

mod composer;
pub mod domain;
pub mod elements;
pub mod report;
pub mod router;
pub mod scoring;
mod service;
pub mod value;

#[cfg(test)]
mod tests;

pub use composer::{
    OfferComposer, OfferDefaults, OfferPayload, OfferRequest, DEFAULT_BONUS_COUNT,
};
pub use domain::{
    Audience, Guarantee, GuaranteeKind, Offer, OfferCategory, OfferId, PricingStrategy,
    ScarcityElement, ScarcityKind, UrgencyElement, UrgencyKind, ValueItem,
};
pub use report::{OfferSummaryView, ReportRenderer};
pub use router::{offer_router, OfferBatchRequest};
pub use service::{OfferOutcome, OfferService};
pub use scoring::{
    get_optimization_recommendations, ConversionEstimate, ConversionLabel, ConversionScorer,
    Recommendation, ScoringWeights,
};
