use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gearforge::config::Config;
use gearforge::error::GfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file. Flags given on the command line win over its values.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exhaustively search every loadout for the best DPS.
    Search(cmd::search::SearchArgs),
    /// Show slot sizes, the combination count and the work split without searching.
    Inspect(cmd::inspect::InspectArgs),
}

fn resolve_config(cli: &Cli, matches: &clap::ArgMatches) -> GfResult<Config> {
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Search(args) => (&args.config, matches.subcommand_matches("search")),
        Commands::Inspect(args) => (&args.config, matches.subcommand_matches("inspect")),
    };

    let config = match (&cli.config_file, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        _ => cli_config.clone(),
    };

    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    info!("🚀 Initializing GearForge...");

    let result = resolve_config(&cli, &matches).and_then(|config| match &cli.command {
        Commands::Search(_) => cmd::search::run(&config),
        Commands::Inspect(_) => cmd::inspect::run(&config),
    });

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}
