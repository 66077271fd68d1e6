use serde::{Deserialize, Serialize};

/// Relative weight of each conversion factor. The defaults sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub headline_clarity: f64,
    pub value_perception: f64,
    pub urgency_strength: f64,
    pub scarcity_believability: f64,
    pub guarantee_strength: f64,
    pub social_proof: f64,
    pub cta_clarity: f64,
    pub objection_coverage: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            headline_clarity: 0.15,
            value_perception: 0.20,
            urgency_strength: 0.12,
            scarcity_believability: 0.10,
            guarantee_strength: 0.15,
            social_proof: 0.12,
            cta_clarity: 0.08,
            objection_coverage: 0.08,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.headline_clarity
            + self.value_perception
            + self.urgency_strength
            + self.scarcity_believability
            + self.guarantee_strength
            + self.social_proof
            + self.cta_clarity
            + self.objection_coverage
    }
}
