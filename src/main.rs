use clap::{Parser, Subcommand};
use schema_manager::commands::*;
use schema_manager::core::{config::CacheConfig, error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "schema-manager")]
#[command(about = "A tool to manage command schemas from the opencommand/commands repository")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the schema repository into the cache directory
    Init {
        /// Force re-clone by removing the existing cache
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// List all .hl files in the cache directory
    List,
    /// Search for .hl files whose name matches a regex pattern
    Search {
        /// Regular expression matched against file names
        pattern: String,
    },
    /// Check whether the cache is in sync with the remote main branch
    Status,
}

impl Commands {
    /// Only a failed clone leaves the operator without a usable cache
    fn exits_on_error(&self) -> bool {
        matches!(self, Commands::Init { .. })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = match CacheConfig::from_home() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    log::debug!("Using cache directory {}", config.cache_dir().display());

    let fatal = cli.command.exits_on_error();
    let result = match cli.command {
        Commands::Init { force } => execute_init(&config, force),
        Commands::List => execute_list(&config),
        Commands::Search { pattern } => execute_search(&config, &pattern),
        Commands::Status => execute_status(&config),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        if fatal {
            std::process::exit(1);
        }
    }

    Ok(())
}
