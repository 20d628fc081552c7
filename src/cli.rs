//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use workdays::api::ValidationProfile;
use workdays::config::ServiceConfig;
use workdays::output::OutputMode;

/// workdays - Business-time arithmetic service
#[derive(Parser, Debug)]
#[command(
    name = "workdays",
    version,
    about = "Add working days and hours to an instant",
    long_about = "Add working days and hours to an instant, honoring the 08:00-17:00 working\n\
                  window, the 12:00-13:00 lunch break, weekends and public holidays.\n\n\
                  Run `workdays serve` for the HTTP API or `workdays calc` for one-off answers."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Validation profile: lenient, strict
        #[arg(long)]
        profile: Option<ValidationProfile>,

        /// Use the embedded holiday list instead of fetching it
        #[arg(long)]
        offline: bool,
    },

    /// Add working time to a date and print the result
    Calc {
        /// Working days to add
        #[arg(short, long)]
        days: Option<String>,

        /// Working hours to add
        #[arg(short = 'H', long)]
        hours: Option<String>,

        /// Start instant, RFC 3339 with offset (defaults to now)
        #[arg(long)]
        date: Option<String>,

        /// Validation profile: lenient, strict
        #[arg(long)]
        profile: Option<ValidationProfile>,

        /// Use the embedded holiday list instead of fetching it
        #[arg(long)]
        offline: bool,
    },

    /// List the holiday calendar in effect
    Holidays {
        /// Use the embedded holiday list instead of fetching it
        #[arg(long)]
        offline: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = ServiceConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            profile,
            offline,
        }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            apply_overrides(&mut config, profile, offline);
            commands::serve(&config)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Calc {
            days,
            hours,
            date,
            profile,
            offline,
        }) => {
            apply_overrides(&mut config, profile, offline);
            Ok(commands::calc(&config, days, hours, date, output_mode))
        },
        Some(Command::Holidays { offline }) => {
            apply_overrides(&mut config, None, offline);
            commands::holidays(&config, output_mode);
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("workdays v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'workdays --help' for usage");
                println!("Run 'workdays serve' to start the API");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn apply_overrides(config: &mut ServiceConfig, profile: Option<ValidationProfile>, offline: bool) {
    if let Some(profile) = profile {
        config.validation.profile = profile;
    }
    if offline {
        config.holidays.offline = true;
    }
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("workdays v{}", env!("CARGO_PKG_VERSION"));
    }
}
