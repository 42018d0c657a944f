use anyhow::Context;
use clap::Parser;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memkv", about = "memkv — ordered in-memory key-value shell")]
struct Cli {
    /// Read configuration from this file instead of ~/.config/memkv/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run commands from a file instead of stdin.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG still takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, load_error) = match &cli.config {
        Some(path) => {
            let config = memkv::Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, None)
        }
        None => memkv::Config::load_or_defaults(),
    };
    memkv::logging::init(cli.debug, &config.logging.filter);
    if let Some(err) = load_error {
        tracing::warn!(error = %err, "ignoring user config, using defaults");
    }

    let stdout = std::io::stdout().lock();
    let session = match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            memkv::shell::run(&config.shell, BufReader::new(file), stdout, false)?
        }
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            memkv::shell::run(&config.shell, stdin.lock(), stdout, interactive)?
        }
    };

    tracing::info!(entries = session.store().len(), "session finished");
    Ok(())
}
