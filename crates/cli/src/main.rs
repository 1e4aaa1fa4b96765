use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use filter::{Schema, TranslatorDialect};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "expr2sql",
    version = "0.1.0",
    about = "Translate filter expressions into SQL WHERE conditions"
)]
struct Cli {
    #[arg(long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries command output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Translate {
            schema,
            dialect,
            output,
            query,
        } => {
            let condition = translate(&schema, dialect, &query)?;
            output::emit(&condition, output.as_deref())
        }
        Commands::Ast { query } => {
            let json = ast_json(&query)?;
            output::emit(&json, None)
        }
    }
}

fn translate(
    schema_path: &str,
    dialect: Option<TranslatorDialect>,
    query: &str,
) -> Result<String, CliError> {
    let mut schema = Schema::load(schema_path)?;
    if let Some(dialect) = dialect {
        schema.dialect = dialect;
    }

    debug!(dialect = %schema.dialect, query, "Translating filter");
    let condition = schema.into_translator().translate(query)?;
    Ok(condition.into_inner())
}

fn ast_json(query: &str) -> Result<String, CliError> {
    let node = expr_syntax::parse(query)?;
    Ok(serde_json::to_string_pretty(&node)?)
}
