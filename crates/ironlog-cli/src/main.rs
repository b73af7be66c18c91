use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ironlog", version, about = "Ironlog training analytics CLI")]
struct Cli {
    /// Analytics config file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a one-rep max
    E1rm(commands::load::E1rmArgs),
    /// Central/peripheral stress of one set
    Stress(commands::load::StressArgs),
    /// Training load of every session in a log file
    Sessions(commands::load::SessionsArgs),
    /// Resolve exercise names to category and parent lift
    Classify(commands::taxonomy::ClassifyArgs),
    /// Variation impact across blocks
    Variations(commands::blocks::InputArgs),
    /// Central-balance vs gain, one point per block
    Balance(commands::blocks::InputArgs),
    /// Average gain per dominant rep x RPE zone
    Intensity(commands::blocks::InputArgs),
    /// E1RM progress series per lift
    Progress(commands::blocks::InputArgs),
    /// Compare selected blocks on one competition lift
    Meta(commands::blocks::MetaArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::E1rm(args) => commands::load::e1rm(args),
        Commands::Stress(args) => commands::load::stress(args, config),
        Commands::Sessions(args) => commands::load::sessions(args, config),
        Commands::Classify(args) => commands::taxonomy::classify(args, config),
        Commands::Variations(args) => commands::blocks::variations(args, config),
        Commands::Balance(args) => commands::blocks::balance(args, config),
        Commands::Intensity(args) => commands::blocks::intensity(args, config),
        Commands::Progress(args) => commands::blocks::progress(args, config),
        Commands::Meta(args) => commands::blocks::meta(args, config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
