use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::offers::domain::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    Conversion,
    Retention,
}

impl FunnelStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Awareness,
            Self::Consideration,
            Self::Conversion,
            Self::Retention,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Consideration => "Consideration",
            Self::Conversion => "Conversion",
            Self::Retention => "Retention",
        }
    }

    /// Lookalike percentages suited to the stage; broader audiences sit higher in the funnel.
    pub fn lookalike_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Awareness => 5..=10,
            Self::Consideration => 3..=5,
            Self::Conversion => 1..=2,
            Self::Retention => 1..=1,
        }
    }

    pub const fn messaging_angle(self) -> &'static str {
        match self {
            Self::Awareness => "Lead with the problem and a relatable story",
            Self::Consideration => "Show proof, comparisons, and the value stack",
            Self::Conversion => "Push the offer, guarantee, and deadline",
            Self::Retention => "Reward loyalty and introduce the next step up",
        }
    }

    pub const fn bid_objective(self) -> &'static str {
        match self {
            Self::Awareness => "reach",
            Self::Consideration => "landing_page_views",
            Self::Conversion => "purchases",
            Self::Retention => "repeat_purchases",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "awareness" | "tofu" => Some(Self::Awareness),
            "consideration" | "mofu" => Some(Self::Consideration),
            "conversion" | "bofu" => Some(Self::Conversion),
            "retention" => Some(Self::Retention),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    CustomerList,
    HighValueCustomers,
    Purchasers,
    LeadFormSubmitters,
    AppUsers,
    WebsiteVisitors,
    PageEngagers,
    VideoViewers,
}

impl SeedSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CustomerList => "Customer List",
            Self::HighValueCustomers => "High-Value Customers",
            Self::Purchasers => "Purchasers",
            Self::LeadFormSubmitters => "Lead Form Submitters",
            Self::AppUsers => "App Users",
            Self::WebsiteVisitors => "Website Visitors",
            Self::PageEngagers => "Page Engagers",
            Self::VideoViewers => "Video Viewers",
        }
    }

    /// How closely the seed reflects buyers rather than browsers.
    pub const fn quality(self) -> f64 {
        match self {
            Self::HighValueCustomers => 1.0,
            Self::CustomerList => 0.95,
            Self::Purchasers => 0.9,
            Self::LeadFormSubmitters => 0.8,
            Self::AppUsers => 0.75,
            Self::WebsiteVisitors => 0.7,
            Self::PageEngagers => 0.6,
            Self::VideoViewers => 0.5,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_key(raw).as_str() {
            "customer_list" | "customers" => Some(Self::CustomerList),
            "high_value_customers" | "vip" => Some(Self::HighValueCustomers),
            "purchasers" | "buyers" => Some(Self::Purchasers),
            "lead_form_submitters" | "leads" => Some(Self::LeadFormSubmitters),
            "app_users" => Some(Self::AppUsers),
            "website_visitors" | "visitors" => Some(Self::WebsiteVisitors),
            "page_engagers" | "engagers" => Some(Self::PageEngagers),
            "video_viewers" | "viewers" => Some(Self::VideoViewers),
            _ => None,
        }
    }
}
