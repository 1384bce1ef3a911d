use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "chef-param",
    about = "Chef-inventory build parameter provider - list, filter and resolve selectable values",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/chef-param/logs/chef-param.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to chef-param.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the selectable items for a parameter definition
    List {
        /// Parameter definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Resolve the value a build would receive
    Resolve {
        /// Parameter definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,

        /// Submitted value; omit to fall back to the definition's default
        value: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Validate an item filter regex
    Check {
        /// Candidate regex
        filter: String,
    },

    /// Show the available item categories and sort orders
    Categories {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List credential ids available in the store
    Credentials,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}
