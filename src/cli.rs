use crate::decision::{DecisionEngine, RankedListing};
use crate::error::AppError;
use crate::input::{load_context, load_listing, load_listings_csv};
use crate::server;
use crate::telemetry::report_violations;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Advisor",
    about = "Score rental listings against viewer preferences, or serve the decision API",
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
    /// Evaluate a single listing and print its decision as JSON
    Decide(DecideArgs),
    /// Rank listings from a CSV export by match score
    Rank(RankArgs),
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

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// JSON file describing one listing
    #[arg(long)]
    listing: PathBuf,
    /// Optional JSON file with viewer preferences
    #[arg(long)]
    context: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV file of listings with a header row
    #[arg(long)]
    listings: PathBuf,
    /// Optional JSON file with viewer preferences
    #[arg(long)]
    context: Option<PathBuf>,
    /// Only print the top N listings
    #[arg(long)]
    limit: Option<usize>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Decide(args) => run_decide(args),
        Command::Rank(args) => run_rank(args),
    }
}

fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let listing = load_listing(&args.listing)?;
    let context = load_context(args.context.as_deref())?;

    let evaluation = DecisionEngine::new().evaluate(&listing, &context);
    report_violations(&listing.id, &evaluation.violations);

    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        listings,
        context,
        limit,
        json,
    } = args;

    let listings = load_listings_csv(&listings)?;
    let context = load_context(context.as_deref())?;

    let mut ranked = DecisionEngine::new().rank_with_decisions(listings, Some(&context));
    for entry in &ranked {
        report_violations(&entry.listing.id, &entry.violations);
    }
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        render_ranking(&ranked);
    }
    Ok(())
}

fn render_ranking(ranked: &[RankedListing]) {
    if ranked.is_empty() {
        println!("No listings to rank");
        return;
    }

    println!("Listings ranked by match score");
    for entry in ranked {
        let title = entry.listing.title.as_deref().unwrap_or("untitled");
        let reasons = if entry.decision.reasons().is_empty() {
            "no notable factors".to_string()
        } else {
            entry.decision.reasons().join(", ")
        };
        println!(
            "{:>3}. {} ({}) | score {} | {} | {}",
            entry.position,
            entry.listing.id,
            title,
            entry.decision.match_score(),
            entry.decision.verdict().label(),
            reasons
        );
        println!("     {}", entry.decision.main_advice());
    }
}
