use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use estimates::commands::base_commands::{CliArgs, Commands};
use estimates::commands::forecast_cmd::forecast_command;
use estimates::commands::plot_cmd::plot_command;
use estimates::commands::staffing_cmd::staffing_command;
use estimates::commands::suggestions_cmd::accept_suggestions_command;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("ESTIMATES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::Staffing { .. } => staffing_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        cmd @ Commands::AcceptSuggestions { .. } => accept_suggestions_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
