mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gcis_api::{CancellationToken, Client};

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gcis")]
#[command(about = "Query Taiwan company and business registry open data (GCIS)")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API base URL (defaults to $GCIS_BASE_URL, then the production host)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the upstream response body untouched instead of decoding it
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Company (公司) registry lookups and searches
    Company(commands::company::CompanyArgs),
    /// Business (商業) registry lookups
    Business(commands::business::BusinessArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gcis=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = match cli
        .base_url
        .or_else(|| std::env::var("GCIS_BASE_URL").ok())
    {
        Some(url) => Client::with_base_url(&url),
        None => Client::new(),
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    let ctx = Context {
        client,
        format,
        raw: cli.raw,
        cancel,
    };

    match &cli.command {
        Commands::Company(args) => commands::company::run(args, &ctx).await?,
        Commands::Business(args) => commands::business::run(args, &ctx).await?,
    }

    Ok(())
}
