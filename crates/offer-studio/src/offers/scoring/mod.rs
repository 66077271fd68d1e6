mod factors;
mod recommendations;
mod weights;

pub use recommendations::{
    get_optimization_recommendations, Recommendation, RecommendationArea, RecommendationPriority,
};
pub use weights::ScoringWeights;

use super::domain::Offer;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying a weight table to a composed offer.
#[derive(Debug, Clone, Default)]
pub struct ConversionScorer {
    weights: ScoringWeights,
}

impl ConversionScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Ignores whatever estimate the offer already carries.
    pub fn estimate_conversion(&self, offer: &Offer) -> ConversionEstimate {
        let (components, score) = factors::score_offer(offer, &self.weights);

        ConversionEstimate {
            label: ConversionLabel::from_score(score),
            score,
            components,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionFactor {
    HeadlineClarity,
    ValuePerception,
    UrgencyStrength,
    ScarcityBelievability,
    GuaranteeStrength,
    SocialProof,
    CtaClarity,
    ObjectionCoverage,
}

impl ConversionFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeadlineClarity => "Headline clarity",
            Self::ValuePerception => "Value perception",
            Self::UrgencyStrength => "Urgency strength",
            Self::ScarcityBelievability => "Scarcity believability",
            Self::GuaranteeStrength => "Guarantee strength",
            Self::SocialProof => "Social proof",
            Self::CtaClarity => "CTA clarity",
            Self::ObjectionCoverage => "Objection coverage",
        }
    }
}

/// Ordinal conversion-potential bucket, ordered from worst to best.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConversionLabel {
    #[default]
    Poor,
    Low,
    Moderate,
    High,
    Exceptional,
}

impl ConversionLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.85 {
            Self::Exceptional
        } else if score > 0.70 {
            Self::High
        } else if score > 0.55 {
            Self::Moderate
        } else if score > 0.40 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Exceptional => "Exceptional",
        }
    }
}

/// Discrete contribution to the conversion score, kept for transparent reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: ConversionFactor,
    pub raw: f64,
    pub weight: f64,
    pub contribution: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionEstimate {
    pub label: ConversionLabel,
    pub score: f64,
    pub components: Vec<FactorScore>,
}
