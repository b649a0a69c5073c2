use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::services::forecast::forecast_from_session_file;

pub fn forecast_command(cmd: Commands) -> ExitCode {
    if let Commands::Forecast {
        input,
        output,
        constants,
    } = cmd
    {
        let report = match forecast_from_session_file(&input, constants.as_deref()) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to forecast session: {e}");
                return ExitCode::FAILURE;
            }
        };

        println!("{}", format_forecast_report(&report));

        if let Some(output) = output {
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize forecast report: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write forecast report: {e}");
                return ExitCode::FAILURE;
            }
            println!("Forecast report written to {output}");
        }
    }
    ExitCode::SUCCESS
}
