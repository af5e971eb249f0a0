use std::path::PathBuf;

use clap::Parser;
use genericflag_core::{Expected, FlagSet, FlagSetConfig, OutputFormat, format_flag_set};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "genericflag")]
#[command(about = "Parse arbitrary flags from a command line and print what was found")]
#[command(version)]
struct Cli {
    /// Flag set name (overrides the config file).
    #[arg(long)]
    name: Option<String>,
    /// Comma-separated flag names to admit; all others become leftovers.
    #[arg(long, value_delimiter = ',')]
    expect: Vec<String>,
    /// YAML or JSON file with `name` and `expected` settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "plain")]
    format: OutputFormat,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Arguments to parse. Put them after `--`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_level).and_then(|()| run(cli)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(level: &str) -> Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| format!("Invalid --log-level '{level}': {err}"))?,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => FlagSetConfig::load(path).map_err(|err| {
            format!("Failed to load config '{}': {err}", path.display())
        })?,
        None => FlagSetConfig::new("genericflag"),
    };
    if let Some(name) = cli.name {
        config.name = name;
    }
    let expected: Vec<String> = cli
        .expect
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if !expected.is_empty() {
        config.expected = expected;
    }

    let mut flags: FlagSet = config.into();
    debug!(
        flag_set = flags.name(),
        restricted = matches!(flags.expected(), Expected::Restricted(_)),
        args = cli.args.len(),
        "parsing arguments"
    );
    flags
        .parse(&cli.args)
        .map_err(|err| format!("Failed to parse arguments: {err}"))?;

    let out = format_flag_set(&flags, cli.format)?;
    print!("{out}");
    Ok(())
}
