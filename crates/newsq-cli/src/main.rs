use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use newsq_core::AppConfig;
use newsq_guardian::GuardianClient;
use newsq_pipeline::{run, RunOutcome};
use newsq_publish::{FileSink, SqsSink};

#[derive(Debug, Parser)]
#[command(name = "newsq")]
#[command(about = "Fetch Guardian articles and publish them to an SQS queue")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search term to query the Guardian content API.
    search_term: Option<String>,

    /// Optional start date in YYYY-MM-DD format.
    #[arg(long)]
    date_from: Option<NaiveDate>,

    /// Name of the SQS queue to publish to.
    #[arg(long)]
    queue_name: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prompt for the run parameters instead of taking arguments.
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = newsq_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Interactive) => interactive(&config).await,
        None => {
            let Some(search_term) = cli.search_term else {
                anyhow::bail!("missing search term (or run `newsq interactive`)");
            };
            let queue_name = cli
                .queue_name
                .unwrap_or_else(|| config.default_queue_name.clone());
            publish_to_queue(&config, &search_term, cli.date_from, &queue_name).await
        }
    }
}

async fn publish_to_queue(
    config: &AppConfig,
    search_term: &str,
    date_from: Option<NaiveDate>,
    queue_name: &str,
) -> anyhow::Result<()> {
    let client = GuardianClient::from_config(config)?;
    let sink = SqsSink::from_config(config, queue_name)?;

    let outcome = run(&client, &sink, search_term, date_from).await?;
    report(&outcome, Some(queue_name));
    Ok(())
}

/// Prompt flow: publish-to-queue y/n, search term, optional start date,
/// queue name (blank routes to a local file artifact instead).
async fn interactive(config: &AppConfig) -> anyhow::Result<()> {
    let use_queue = Confirm::new()
        .with_prompt("Publish to AWS SQS?")
        .default(true)
        .interact()?;

    let search_term: String = Input::new()
        .with_prompt("Enter your search term")
        .interact_text()?;

    let date_raw: String = Input::new()
        .with_prompt("Enter a start date (YYYY-MM-DD) or leave blank")
        .allow_empty(true)
        .interact_text()?;
    let date_from = match date_raw.trim() {
        "" => None,
        raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?),
    };

    let queue_name: String = Input::new()
        .with_prompt("Enter the SQS queue name or leave blank for local file")
        .allow_empty(true)
        .interact_text()?;

    let client = GuardianClient::from_config(config)?;

    if use_queue && !queue_name.trim().is_empty() {
        let sink = SqsSink::from_config(config, queue_name.trim())?;
        let outcome = run(&client, &sink, &search_term, date_from).await?;
        report(&outcome, Some(queue_name.trim()));
    } else {
        let sink = FileSink::from_config(config);
        let outcome = run(&client, &sink, &search_term, date_from).await?;
        report(&outcome, None);
    }

    Ok(())
}

fn report(outcome: &RunOutcome, queue_name: Option<&str>) {
    if outcome.fetched == 0 {
        println!("No articles found to publish.");
        return;
    }

    println!("Retrieved {} articles.", outcome.fetched);
    match queue_name {
        Some(name) => println!(
            "Successfully published {} articles to SQS queue '{name}'.",
            outcome.delivered
        ),
        None => println!("Wrote {} articles to a local file.", outcome.delivered),
    }
}
