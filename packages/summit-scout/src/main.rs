// CLI entry point for summit-scout

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use summit_scout::persist::default_results_filename;
use summit_scout::service::merge_locations;
use summit_scout::{
    create_client, save_results, BatchCompanyService, CompaniesService, CompanyFilter, Config,
    TimeInterval,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "summit-scout")]
#[command(about = "Find companies attending tech summits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find companies for summits in a location and time range
    FindCompanies {
        /// City or country to search
        location: String,
        /// Start date (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        time_start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        time_end: NaiveDate,
        /// Print results to stdout instead of saving them
        #[arg(long)]
        no_save_result: bool,
        /// Output JSON path [default: results/summits-companies-<uuid>.json]
        #[arg(long)]
        output_path: Option<PathBuf>,
    },

    /// Run the company finder for a batch of locations
    RunBatch {
        /// Cities or countries to search
        locations: Vec<String>,
        /// Include major European tech hubs
        #[arg(long)]
        europe: bool,
        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "2025-01-01", value_parser = parse_iso_date)]
        time_start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "2025-12-31", value_parser = parse_iso_date)]
        time_end: NaiveDate,
        /// Directory to save JSON results
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },

    /// Build a deduplicated company list from saved results
    FilterCompanies {
        /// Directory of saved result files
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,
        /// Output JSON path
        #[arg(long, default_value = "filtered_companies.json")]
        output: PathBuf,
        /// Scale to keep (repeatable) [default: startup, small, medium]
        #[arg(long = "allowed-scale")]
        allowed_scales: Vec<String>,
        /// Origin country to drop (repeatable) [default: united states]
        #[arg(long = "exclude-country")]
        excluded_countries: Vec<String>,
    },
}

fn parse_iso_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a valid date, use ISO format YYYY-MM-DD", value))
}

fn init_tracing(log_level: &str) {
    let default_filter = format!(
        "{level},summit_scout={level},gemini_client={level},reqwest=warn,hyper=warn",
        level = log_level.to_lowercase()
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config() -> Result<Config> {
    Config::from_env().context("Failed to load configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&Config::log_level_from_env());

    match cli.command {
        Commands::FindCompanies {
            location,
            time_start,
            time_end,
            no_save_result,
            output_path,
        } => {
            tracing::info!(%location, %time_start, %time_end, "CLI invoked");

            let config = load_config()?;
            let client = create_client(&config).context("Failed to create LLM client")?;
            let service = CompaniesService::new(client, config.retry);
            let interval = TimeInterval::new(time_start, time_end);

            let results = service
                .get_companies_by_location(&location, &interval)
                .await
                .with_context(|| format!("Company search failed for {}", location))?;

            if no_save_result {
                let json = serde_json::to_string_pretty(&results)
                    .context("Failed to serialize results")?;
                println!("{}", json);
            } else {
                let path = output_path
                    .unwrap_or_else(|| PathBuf::from("results").join(default_results_filename()));
                save_results(&path, &results).context("Failed to save results")?;
                println!("Saved {} results to {}", results.len(), path.display());
            }
        }

        Commands::RunBatch {
            locations,
            europe,
            time_start,
            time_end,
            output_dir,
        } => {
            let targets = merge_locations(&locations, europe);
            if targets.is_empty() {
                bail!("No locations provided. Use arguments or --europe flag.");
            }

            let config = load_config()?;
            let client = create_client(&config).context("Failed to create LLM client")?;
            let batch = BatchCompanyService::new(
                CompaniesService::new(client, config.retry),
                config.batch,
            );

            let report = batch
                .run(&targets, &TimeInterval::new(time_start, time_end), &output_dir)
                .await;

            println!(
                "Processed {} locations: {} successful, {} failed",
                report.total,
                report.success_count(),
                report.error_count()
            );
            for location in &report.failed {
                println!("  - failed: {}", location);
            }
        }

        Commands::FilterCompanies {
            results_dir,
            output,
            allowed_scales,
            excluded_countries,
        } => {
            let defaults = CompanyFilter::default();
            let filter = CompanyFilter::new(
                if allowed_scales.is_empty() {
                    defaults.allowed_scales().to_vec()
                } else {
                    allowed_scales
                },
                if excluded_countries.is_empty() {
                    defaults.excluded_countries().to_vec()
                } else {
                    excluded_countries
                },
            );

            let report = filter
                .run(&results_dir, &output)
                .context("Failed to filter companies")?;

            print!("{}", report);
            println!();
            println!("Output saved to: {}", output.display());
        }
    }

    Ok(())
}
