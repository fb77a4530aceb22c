use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use schema_scout::{MatchRules, SchemaLoader, SchemaScout, ScoutConfig, DEFAULT_QUERY, DEFAULT_SCHEMA_PATH};
use tracing_subscriber::EnvFilter;

/// Guess which tables and columns of a schema a question is about.
#[derive(Parser, Debug)]
#[command(name = "schema-scout", version, about)]
struct Cli {
    /// Schema document (.json, .yaml or .yml)
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,

    /// Natural-language question
    #[arg(long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Keyword rule file replacing the built-in rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print the loaded schema and exit
    #[arg(long)]
    dump_schema: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.dump_schema {
        let schema = SchemaLoader::load(&cli.schema)?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let rules = match &cli.rules {
        Some(path) => MatchRules::load(path)?,
        None => MatchRules::default(),
    };
    let config = ScoutConfig::from(cli.schema, &cli.query).with_rules(rules);

    let filtered = SchemaScout::run_config(&config)?;
    tracing::info!("Final filtered schema ({} tables)", filtered.tables.len());
    println!("{}", filtered.to_pretty_json()?);
    Ok(())
}
