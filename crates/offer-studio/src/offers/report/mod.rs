mod render;
pub mod views;

pub use render::{ReportRenderer, DEFAULT_REPORT_WIDTH, MIN_REPORT_WIDTH};
pub use views::{OfferSummaryView, ValueItemView};
