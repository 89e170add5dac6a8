//! Copeplan CLI
//!
//! Command-line interface for Copeplan - a personal coping plan kept on this
//! device, with passphrase-encrypted backups for moving it elsewhere.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "copeplan")]
#[command(version, about = "Your personal coping plan, kept on this device")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir + /copeplan)
    #[arg(long, global = true, env = "COPEPLAN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Backup passphrase for non-interactive use
    #[arg(
        long,
        global = true,
        env = "COPEPLAN_PASSPHRASE",
        hide = true,
        hide_env_values = true
    )]
    passphrase: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new plan
    Init {
        /// The name your plan greets you with
        nickname: String,
    },

    /// Show your plan
    Show,

    /// Manage coping skills
    #[command(subcommand)]
    Skill(SkillCommands),

    /// Manage supportive adults
    #[command(subcommand)]
    Adult(AdultCommands),

    /// Manage ways to ask for help
    #[command(subcommand)]
    Method(MethodCommands),

    /// Export an encrypted backup of your plan
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Restore your plan from an encrypted backup
    Import {
        /// Input file path
        input: PathBuf,

        /// Replace the plan on this device
        #[arg(long)]
        force: bool,
    },

    /// Show backup details without decrypting
    Inspect {
        /// Backup file path
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum SkillCommands {
    /// Add a coping skill
    Add {
        /// Skill identifier
        id: String,

        /// Your own words for this skill
        #[arg(long)]
        fill_in: Option<String>,
    },

    /// Remove a coping skill
    Remove {
        /// Skill identifier
        id: String,
    },
}

#[derive(Subcommand)]
enum AdultCommands {
    /// Add a supportive adult
    Add {
        /// Their name
        name: String,

        /// Phone, email, or how to reach them
        #[arg(long, default_value = "")]
        contact: String,

        /// Make this the first person to contact
        #[arg(long)]
        primary: bool,
    },

    /// Remove a supportive adult
    Remove {
        /// Their name
        name: String,
    },
}

#[derive(Subcommand)]
enum MethodCommands {
    /// Add a way to ask for help
    Add {
        /// Help method identifier
        id: String,

        /// Custom wording
        #[arg(long)]
        text: Option<String>,
    },

    /// Remove a way to ask for help
    Remove {
        /// Help method identifier
        id: String,
    },
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "copeplan=debug,copeplan_core=debug"
    } else {
        "copeplan=warn,copeplan_core=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("copeplan")
    });

    let config = CliConfig {
        data_dir,
        passphrase: cli.passphrase,
    };

    match cli.command {
        Commands::Init { nickname } => {
            commands::init::run(&nickname, &config)?;
        }
        Commands::Show => {
            commands::plan::show(&config)?;
        }
        Commands::Skill(cmd) => match cmd {
            SkillCommands::Add { id, fill_in } => {
                commands::plan::add_skill(&config, &id, fill_in.as_deref())?;
            }
            SkillCommands::Remove { id } => {
                commands::plan::remove_skill(&config, &id)?;
            }
        },
        Commands::Adult(cmd) => match cmd {
            AdultCommands::Add {
                name,
                contact,
                primary,
            } => {
                commands::plan::add_adult(&config, &name, &contact, primary)?;
            }
            AdultCommands::Remove { name } => {
                commands::plan::remove_adult(&config, &name)?;
            }
        },
        Commands::Method(cmd) => match cmd {
            MethodCommands::Add { id, text } => {
                commands::plan::add_method(&config, &id, text.as_deref())?;
            }
            MethodCommands::Remove { id } => {
                commands::plan::remove_method(&config, &id)?;
            }
        },
        Commands::Export { output } => {
            commands::backup::export(&config, &output)?;
        }
        Commands::Import { input, force } => {
            commands::backup::import(&config, &input, force)?;
        }
        Commands::Inspect { input } => {
            commands::backup::inspect(&input)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "copeplan", &mut io::stdout());
        }
    }

    Ok(())
}
