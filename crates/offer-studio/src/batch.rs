//! CSV import of offer requests.
//!
//! Expected header: `name,category,price,strategy,bonuses`. Blank `strategy`
//! and `bonuses` cells fall back to the supplied defaults; an unknown category
//! falls back to the default multiplier.

use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::offers::{OfferCategory, OfferDefaults, OfferRequest, PricingStrategy};

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read offer batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid offer batch CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub struct OfferBatchImporter;

impl OfferBatchImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        defaults: OfferDefaults,
    ) -> Result<Vec<OfferRequest>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, defaults)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        defaults: OfferDefaults,
    ) -> Result<Vec<OfferRequest>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut requests = Vec::new();

        for record in csv_reader.deserialize::<BatchRow>() {
            let row = record?;
            requests.push(row.into_request(defaults));
        }

        Ok(requests)
    }
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    name: String,
    category: String,
    price: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    strategy: Option<String>,
    #[serde(default)]
    bonuses: Option<usize>,
}

impl BatchRow {
    fn into_request(self, defaults: OfferDefaults) -> OfferRequest {
        let strategy = match self.strategy.as_deref() {
            Some(raw) => PricingStrategy::parse(raw).unwrap_or_else(|| {
                warn!(strategy = raw, offer = %self.name, "unknown pricing strategy in batch row");
                defaults.strategy
            }),
            None => defaults.strategy,
        };

        let mut request = OfferRequest::new(
            self.name,
            OfferCategory::from_label(&self.category),
            self.price,
        );
        request.pricing_strategy = strategy;
        request.bonus_count = self.bonuses.unwrap_or(defaults.bonus_count);
        request
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
