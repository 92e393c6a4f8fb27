//! uspto-search-cli: interactive DSAPI search
//!
//! Prompts for a keyword and a limit when none are given on the command
//! line, prints the records and offers to save them as JSON.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uspto_search::{cli, config, Operator, Search};

#[derive(Debug, Parser)]
#[command(
    name = "uspto-search-cli",
    version,
    about = "Search the USPTO Data Set API from the terminal"
)]
struct Args {
    /// Keywords to search for (prompted when omitted)
    keywords: Vec<String>,

    /// Boolean operator joining keywords: AND or OR
    #[arg(short, long)]
    operator: Option<String>,

    /// Maximum number of records
    #[arg(short, long)]
    limit: Option<u64>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save records to this file without asking
    #[arg(short, long)]
    save: Option<PathBuf>,
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let settings = config::load_settings(args.config.as_deref())?;
    let search = Search::from_settings(&settings)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let interactive = args.keywords.is_empty();

    println!("{}", "=".repeat(70));
    println!(
        "USPTO Data Set API - {} Search",
        settings.dsapi.dataset.replace('_', " ")
    );
    println!("{}", "=".repeat(70));

    let keywords = if interactive {
        let keyword = prompt(&mut input, "\nEnter search keyword: ")?;
        if keyword.is_empty() {
            eprintln!("No keyword provided. Exiting.");
            return Ok(());
        }
        vec![keyword]
    } else {
        args.keywords.clone()
    };

    let limit = match args.limit {
        Some(limit) => limit,
        None if interactive => {
            let answer = prompt(
                &mut input,
                &format!(
                    "Enter number of results (default {}): ",
                    settings.search.cli_limit
                ),
            )?;
            cli::parse_limit(&answer, settings.search.cli_limit)
        }
        None => settings.search.cli_limit,
    };

    let operator = Operator::parse(
        args.operator
            .as_deref()
            .or(Some(settings.search.default_operator.as_str())),
    );

    let separator = format!(" {} ", operator);
    println!("\nSearching for '{}'...", keywords.join(separator.as_str()));

    let result = search.search(&keywords, operator, limit).await;

    cli::ensure_success(&result)?;

    println!("\n{}\n", cli::format_summary(&result));
    print!("{}", cli::format_records(&result.records));

    if result.is_empty() {
        return Ok(());
    }

    let path = match args.save {
        Some(path) => Some(path),
        None if interactive => {
            let answer = prompt(&mut input, "\nSave results to JSON file? (y/n): ")?;
            cli::is_yes(&answer).then(|| cli::default_save_path(&keywords))
        }
        None => None,
    };

    if let Some(path) = path {
        cli::save_records(&path, &result.records)?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}
