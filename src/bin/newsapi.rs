use std::process::ExitCode;

use clap::{Parser, Subcommand};
use newsapi_rs::{ALL, NewsClient, NewsError};
use serde::Serialize;
use url::Url;

#[derive(Parser)]
#[command(name = "newsapi")]
#[command(about = "Query newsapi.org sources and top headlines")]
#[command(version)]
struct Cli {
    /// API key issued by newsapi.org
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    api_key: String,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<Url>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List news sources
    Sources {
        #[arg(long, default_value = ALL)]
        category: String,
        #[arg(long, default_value = ALL)]
        language: String,
        #[arg(long, default_value = ALL)]
        country: String,
    },
    /// List selected fields of each news source
    SourcesInfo {
        /// Comma-separated field names; a single name prints a flat list
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
        #[arg(long, default_value = ALL)]
        category: String,
        #[arg(long, default_value = ALL)]
        language: String,
        #[arg(long, default_value = ALL)]
        country: String,
    },
    /// Fetch top headlines
    Headlines {
        #[arg(long, default_value = ALL)]
        country: String,
        #[arg(long, default_value = ALL)]
        category: String,
        /// Comma-separated source ids
        #[arg(long, default_value = ALL)]
        sources: String,
        /// Keywords or phrase to search for
        #[arg(long)]
        q: Option<String>,
        #[arg(long, default_value_t = newsapi_rs::headlines::DEFAULT_PAGE_SIZE)]
        page_size: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), NewsError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), NewsError> {
    let mut builder = NewsClient::builder().api_key(cli.api_key);
    if let Some(base) = cli.base_url {
        builder = builder.base_url(base);
    }
    let client = builder.build()?;

    match cli.command {
        Command::Sources {
            category,
            language,
            country,
        } => print_json(&client.sources(&category, &language, &country)?),
        Command::SourcesInfo {
            mut fields,
            category,
            language,
            country,
        } => {
            let fields = if fields.len() == 1 {
                newsapi_rs::SourceFields::One(fields.remove(0))
            } else {
                newsapi_rs::SourceFields::Many(fields)
            };
            print_json(&client.sources_info(fields, &category, &language, &country)?)
        }
        Command::Headlines {
            country,
            category,
            sources,
            q,
            page_size,
            page,
        } => print_json(&client.top_headlines(
            &country,
            &category,
            &sources,
            q.as_deref(),
            page_size,
            page,
        )?),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // `request` already logged status, code and message.
        Err(e @ NewsError::Api { .. }) => {
            tracing::debug!(target: "newsapi", "{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(target: "newsapi", "{e}");
            ExitCode::FAILURE
        }
    }
}
