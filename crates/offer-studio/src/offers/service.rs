use chrono::NaiveDate;
use serde::Serialize;

use super::composer::{OfferComposer, OfferDefaults, OfferRequest};
use super::domain::Offer;
use super::report::{OfferSummaryView, ReportRenderer};

/// Pairs composition with rendering so every front end produces the same output.
#[derive(Debug, Clone, Default)]
pub struct OfferService {
    composer: OfferComposer,
    renderer: ReportRenderer,
    defaults: OfferDefaults,
}

/// A composed offer with its JSON summary and text report.
#[derive(Debug, Clone, Serialize)]
pub struct OfferOutcome {
    #[serde(skip)]
    pub offer: Offer,
    pub summary: OfferSummaryView,
    pub report: String,
}

impl OfferService {
    pub fn new(composer: OfferComposer, renderer: ReportRenderer) -> Self {
        Self {
            composer,
            renderer,
            defaults: OfferDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: OfferDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Applied to HTTP payloads and batch rows that omit strategy or bonus count.
    pub fn defaults(&self) -> OfferDefaults {
        self.defaults
    }

    pub fn create(&self, request: &OfferRequest, today: NaiveDate) -> OfferOutcome {
        let offer = self.composer.compose(request, today);
        let summary = OfferSummaryView::from_offer(&offer);
        let report = self.renderer.generate_report(&offer);

        OfferOutcome {
            offer,
            summary,
            report,
        }
    }

    pub fn create_batch(&self, requests: &[OfferRequest], today: NaiveDate) -> Vec<OfferOutcome> {
        requests
            .iter()
            .map(|request| self.create(request, today))
            .collect()
    }
}
