use crate::commands::{
    run_offer_batch, run_offer_create, run_targeting_lookalike, LookalikeArgs, OfferBatchArgs,
    OfferCreateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use offer_studio::config::AppConfig;
use offer_studio::error::AppError;
use offer_studio::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Offer Studio",
    about = "Compose, score, and report on sales offers and lookalike targeting",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Build offers and print their reports
    Offer {
        #[command(subcommand)]
        command: OfferCommand,
    },
    /// Plan lookalike audiences for a funnel stage
    Targeting {
        #[command(subcommand)]
        command: TargetingCommand,
    },
}

#[derive(Subcommand, Debug)]
enum OfferCommand {
    /// Compose a single offer from a product name and base price
    Create(OfferCreateArgs),
    /// Compose every offer listed in a CSV file
    Batch(OfferBatchArgs),
}

#[derive(Subcommand, Debug)]
enum TargetingCommand {
    /// Build the lookalike tiers recommended for a funnel stage
    Lookalike(LookalikeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Offer {
            command: OfferCommand::Create(args),
        } => run_offer_create(args, &config),
        Command::Offer {
            command: OfferCommand::Batch(args),
        } => run_offer_batch(args, &config),
        Command::Targeting {
            command: TargetingCommand::Lookalike(args),
        } => run_targeting_lookalike(args, &config),
    }
}
