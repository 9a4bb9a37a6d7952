use clap::Parser;
use email_lexer::{
    config::{self, LexerConfig, WhitespaceRuns},
    tokenizer::scanner::tokenize_with,
    Error, InternalResult,
};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Email addresses to tokenize
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override how whitespace runs are scanned (split or merge)
    #[arg(short, long)]
    whitespace_runs: Option<WhitespaceRuns>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> InternalResult<LexerConfig> {
    let mut config: LexerConfig = match &cli.config {
        Some(path) => config::from_file(path)?,
        None => LexerConfig::default(),
    };
    if let Some(whitespace_runs) = cli.whitespace_runs {
        config.whitespace_runs = whitespace_runs;
    }
    debug!("config: {:?}", config);
    Ok(config)
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = load_config(cli)?;

    for address in &cli.addresses {
        let tokens = tokenize_with(address, &config)?;

        if cli.json {
            let json = serde_json::to_string_pretty(&tokens)
                .map_err(|e| Error::internal(format!("Failed to serialize tokens: {}", e)))?;
            println!("{}", json);
        } else {
            println!("{}", address);
            for token in &tokens {
                println!(
                    "  {:>4}  {:<16} {:?}",
                    token.position,
                    token.kind.name(),
                    token.value
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
