use crate::infra::{
    offer_defaults, offer_service, parse_category, parse_date, parse_guarantee, parse_seed_source,
    parse_stage, parse_strategy, targeting_settings,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use offer_studio::batch::OfferBatchImporter;
use offer_studio::config::AppConfig;
use offer_studio::error::AppError;
use offer_studio::offers::elements::{GuaranteeRequest, ScarcityRequest, UrgencyRequest};
use offer_studio::offers::{
    Audience, GuaranteeKind, OfferCategory, OfferOutcome, OfferRequest, PricingStrategy,
    ScarcityKind, UrgencyKind,
};
use offer_studio::targeting::{build_targeting_strategy, FunnelStage, SeedSource};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct OfferCreateArgs {
    /// Product or program name used as the offer headline
    pub(crate) product: String,
    /// Base price of the core product
    #[arg(long)]
    pub(crate) price: f64,
    /// Offer category (product, service, subscription, bundle, digital, course, membership, consulting)
    #[arg(long = "type", value_parser = parse_category, default_value = "product")]
    pub(crate) category: OfferCategory,
    /// Number of bonuses to stack (defaults to OFFER_DEFAULT_BONUSES)
    #[arg(long)]
    pub(crate) bonuses: Option<usize>,
    /// Pricing strategy (defaults to OFFER_DEFAULT_STRATEGY)
    #[arg(long, value_parser = parse_strategy)]
    pub(crate) strategy: Option<PricingStrategy>,
    /// Guarantee type; the category default applies when omitted
    #[arg(long, value_parser = parse_guarantee)]
    pub(crate) guarantee: Option<GuaranteeKind>,
    /// Guarantee window in days
    #[arg(long, default_value_t = 30)]
    pub(crate) guarantee_days: u16,
    /// Close the offer this many days after today
    #[arg(long)]
    pub(crate) deadline_days: Option<u16>,
    /// Cap the number of available spots
    #[arg(long)]
    pub(crate) spots: Option<u32>,
    /// Audience objection to check coverage for (repeatable)
    #[arg(long = "objection")]
    pub(crate) objections: Vec<String>,
    /// Evaluation date for deadlines (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the JSON summary instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OfferBatchArgs {
    /// CSV file with name,category,price,strategy,bonuses columns
    pub(crate) input: PathBuf,
    /// Evaluation date for deadlines (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print full reports instead of a one-line summary per offer
    #[arg(long)]
    pub(crate) reports: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LookalikeArgs {
    /// Funnel stage (awareness, consideration, conversion, retention)
    #[arg(long, value_parser = parse_stage)]
    pub(crate) stage: FunnelStage,
    /// Seed audience source (customer_list, purchasers, website_visitors, ...)
    #[arg(long, value_parser = parse_seed_source)]
    pub(crate) seed: SeedSource,
    /// Number of people in the seed audience
    #[arg(long)]
    pub(crate) seed_size: u64,
    /// Override the configured market population
    #[arg(long)]
    pub(crate) market_population: Option<u64>,
    /// Print JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_offer_create(args: OfferCreateArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let json = args.json;
    let request = build_offer_request(args, config);

    let outcome = offer_service(&config.studio).create(&request, today);
    info!(offer_id = %outcome.offer.id, "offer created");
    print_outcome(&outcome, json)
}

pub(crate) fn run_offer_batch(args: OfferBatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let requests = OfferBatchImporter::from_path(&args.input, offer_defaults(&config.studio))?;
    info!(count = requests.len(), input = %args.input.display(), "offer batch loaded");

    let service = offer_service(&config.studio);
    for outcome in service.create_batch(&requests, today) {
        if args.reports {
            println!("{}", outcome.report);
            continue;
        }

        let offer = &outcome.offer;
        println!(
            "- {} | value ${:.2} | price ${:.2} | saves {:.0}% | {} ({:.2})",
            offer.name,
            offer.total_value,
            offer.actual_price,
            offer.savings_pct,
            offer.conversion.label.label(),
            offer.conversion.score
        );
    }

    Ok(())
}

pub(crate) fn run_targeting_lookalike(
    args: LookalikeArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let settings = targeting_settings(&config.studio);
    let market_population = args.market_population.unwrap_or(settings.market_population);
    let strategy = build_targeting_strategy(args.stage, args.seed, args.seed_size, market_population);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&strategy)?);
    } else {
        print!("{}", settings.renderer.generate_targeting_report(&strategy));
    }

    Ok(())
}

fn build_offer_request(args: OfferCreateArgs, config: &AppConfig) -> OfferRequest {
    let OfferCreateArgs {
        product,
        price,
        category,
        bonuses,
        strategy,
        guarantee,
        guarantee_days,
        deadline_days,
        spots,
        objections,
        ..
    } = args;

    let defaults = offer_defaults(&config.studio);
    let mut request = OfferRequest::new(product, category, price.max(0.0));
    request.pricing_strategy = strategy.unwrap_or(defaults.strategy);
    request.bonus_count = bonuses.unwrap_or(defaults.bonus_count);
    request.guarantee = guarantee.map(|kind| GuaranteeRequest {
        kind,
        duration_days: guarantee_days,
    });

    if let Some(window_days) = deadline_days {
        request.urgency.push(UrgencyRequest {
            kind: UrgencyKind::Deadline,
            window_days,
        });
    }
    if let Some(quantity) = spots {
        request.scarcity.push(ScarcityRequest {
            kind: ScarcityKind::LimitedSpots,
            quantity: Some(quantity),
        });
    }
    if !objections.is_empty() {
        request.audience = Some(Audience {
            segment: "cli".to_string(),
            objections,
            ..Audience::default()
        });
    }

    request
}

fn print_outcome(outcome: &OfferOutcome, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    } else {
        print!("{}", outcome.report);
    }
    Ok(())
}
