//! # llmstxt CLI Application
//!
//! Command-line front end for the llmstxt library. It reads a crawler dataset
//! export, resolves page HTML from a local directory or over HTTP, and writes
//! the rendered `llms.txt` file.
//!
//! ## Subcommands
//!
//! - `generate`: build an `llms.txt` document from a crawl dataset

mod logging;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use futures::stream;
use llmstxt::{
    FsHtmlStore, HtmlStore, HttpHtmlStore, PipelineConfig, SectionTitles, build_document,
    load_dataset,
};
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Parser)]
#[command(author, version, about = "Generate llms.txt files from website crawl datasets", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build an llms.txt document from a crawl dataset
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// URL the crawl started from
    #[arg(short = 'u', long)]
    start_url: Option<String>,

    /// Crawl dataset export (JSON array or JSON Lines)
    #[arg(short, long)]
    dataset: PathBuf,

    /// Directory holding the stored page HTML
    #[arg(long, conflicts_with = "fetch_html", required_unless_present = "fetch_html")]
    html_dir: Option<PathBuf>,

    /// Fetch stored page HTML over HTTP from each record's htmlUrl
    #[arg(long)]
    fetch_html: bool,

    /// Minimum number of links for a section to be kept
    #[arg(short = 'm', long, default_value = "2")]
    min_links: usize,

    /// Document title (default: hostname of the start URL)
    #[arg(short, long)]
    title: Option<String>,

    /// Free text placed below the description
    #[arg(long)]
    details: Option<String>,

    /// JSON file mapping section paths to titles
    #[arg(long)]
    section_titles: Option<PathBuf>,

    /// Write llms.txt here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the aggregated document as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing_subscriber(cli.verbose);

    match cli.command {
        Some(Commands::Generate(args)) => {
            generate_command(args).await?;
        }
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["llmstxt", "--help"]);
        }
    }

    Ok(())
}

#[instrument]
async fn generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let mut builder = PipelineConfig::builder().section_min_links(args.min_links);
    if let Some(title) = &args.title {
        builder = builder.title(title);
    }
    if let Some(details) = &args.details {
        builder = builder.details(details);
    }
    if let Some(path) = &args.section_titles {
        let titles = SectionTitles::load(path)
            .await
            .with_context(|| format!("Failed to load section titles from {}", path.display()))?;
        info!("Loaded {} section titles", titles.len());
        builder = builder.section_titles(titles);
    }
    let config = builder.build();

    match &args.html_dir {
        Some(dir) => generate(&args, &config, &FsHtmlStore::new(dir)).await,
        None => generate(&args, &config, &HttpHtmlStore::new()).await,
    }
}

async fn generate<S: HtmlStore>(
    args: &GenerateArgs,
    config: &PipelineConfig,
    store: &S,
) -> anyhow::Result<()> {
    let records = load_dataset(&args.dataset)
        .await
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;
    info!("Loaded {} dataset items", records.len());

    let document = build_document(
        args.start_url.as_deref(),
        stream::iter(records),
        store,
        config,
    )
    .await?;
    let output = document.render();

    if let Some(json_file) = &args.json {
        let json = serde_json::to_string_pretty(document.document())?;
        tokio::fs::write(json_file, json).await?;
        info!("Saved document model to {}", json_file.display());
    }

    match &args.output {
        Some(output_file) => {
            tokio::fs::write(output_file, &output).await?;
            info!("Saved llms.txt to {}", output_file.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
