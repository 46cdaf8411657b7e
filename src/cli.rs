//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use guardian::output::OutputMode;

/// guardian - Keeps a small web deployment alive and accounted for
#[derive(Parser, Debug)]
#[command(
    name = "guardian",
    version,
    about = "Health probes, self-healing hooks and a dead-man switch",
    long_about = "Run one guardian pass over a deployment.\n\n\
                  Resolves tracked repositories, probes UI and API health,\n\
                  bootstraps or redeploys when they are down, checks for a\n\
                  recent trusted acknowledgment, and writes a dated status file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root holding config/ and docs/status/
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Organization hint (overrides ORG_GITHUB and the settings file)
    #[arg(long, global = true)]
    pub org: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one full guardian pass and write the status file
    Run {
        /// Print the report without writing docs/status/
        #[arg(long)]
        no_write: bool,
    },

    /// Resolve repository hints against the code host
    Resolve {
        /// Loose repository names (e.g. "talk", "stegverse-scw")
        #[arg(required = true)]
        hints: Vec<String>,
    },

    /// Show the candidate spellings for a hint, in probe order (offline)
    Candidates {
        /// Loose repository name
        hint: String,

        /// List organization candidates instead
        #[arg(long)]
        orgs: bool,
    },

    /// Probe UI and API health only
    Probe,

    /// Evaluate the dead-man switch only
    Deadman,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
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

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("guardian v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'guardian --help' for usage");
            println!("Run 'guardian run' for a full pass");
        }
        return Ok(());
    };

    if matches!(command, Command::Version) {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }));
        } else {
            println!("guardian v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let ctx = commands::Context::load(&cli.root, cli.org.as_deref())?;
    match command {
        Command::Run { no_write } => commands::run(&ctx, !no_write, output_mode),
        Command::Resolve { hints } => commands::resolve(&ctx, &hints, output_mode),
        Command::Candidates { hint, orgs } => {
            commands::candidates(&ctx, &hint, orgs, output_mode);
            Ok(())
        },
        Command::Probe => commands::probe(&ctx, output_mode),
        Command::Deadman => {
            commands::deadman(&ctx, output_mode);
            Ok(())
        },
        Command::Version => Ok(()),
    }
}
