use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use get_papers_list::{write_to_path, ClientConfig, Pipeline, PubMedClient};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch PubMed papers with pharmaceutical or biotech authors",
    long_about = "Searches PubMed, keeps papers with at least one author affiliated \
                  with a company, and writes them to a CSV file"
)]
struct Cli {
    /// PubMed search query
    #[arg(short, long)]
    query: String,

    /// Output CSV file path
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum number of search results to fetch
    #[arg(short, long, alias = "max_results", default_value_t = 20)]
    max_results: usize,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY", global = true)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL", global = true)]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list", global = true)]
    tool: String,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_tool(&self.tool);
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(email) = &self.email {
            config = config.with_email(email);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    println!("Fetching papers for query: {}", cli.query);
    println!("Output file: {}", cli.output.display());
    println!("Max results: {}", cli.max_results);

    let pipeline = Pipeline::new(PubMedClient::with_config(cli.client_config()));
    let ids = pipeline
        .search(&cli.query, cli.max_results)
        .await
        .with_context(|| format!("Failed to search PubMed for query '{}'", cli.query))?;
    println!("Total papers fetched: {}", ids.len());

    let records = pipeline
        .fetch_and_extract(&ids)
        .await
        .context("Failed to fetch paper details")?;
    println!(
        "Papers with at least one industry author: {}",
        records.len()
    );

    write_to_path(&records, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!("CSV write complete.");

    Ok(())
}
