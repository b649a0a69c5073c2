use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Chart {
    /// Normal curve of total effort with confidence markers
    Distribution,
    /// Cube-root duration against effort
    Duration,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast total effort and duration from a session file
    Forecast {
        /// Session JSON file
        #[arg(short, long)]
        input: String,
        /// Optional YAML file for the full report
        #[arg(short, long)]
        output: Option<String>,
        /// Optional constants YAML overriding the session's constants
        #[arg(short, long)]
        constants: Option<String>,
    },
    /// Reconcile the staffing plan against the estimate
    Staffing {
        /// Session JSON file
        #[arg(short, long)]
        input: String,
        /// Optional YAML file for the full report
        #[arg(short, long)]
        output: Option<String>,
        /// Optional constants YAML overriding the session's constants
        #[arg(short, long)]
        constants: Option<String>,
    },
    /// Plot the effort distribution or the duration curve into a PNG chart
    Plot {
        /// Session JSON file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Chart to draw
        #[arg(long, value_enum, default_value_t = Chart::Distribution)]
        chart: Chart,
        /// Optional constants YAML overriding the session's constants
        #[arg(short, long)]
        constants: Option<String>,
    },
    /// Add suggested work items and roles to a session file
    AcceptSuggestions {
        /// Session JSON file
        #[arg(short, long)]
        input: String,
        /// Suggestions JSON file
        #[arg(short, long)]
        suggestions: String,
        /// Output session JSON file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
