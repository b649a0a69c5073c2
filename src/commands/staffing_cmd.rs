use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_staffing_report;
use crate::services::forecast::staffing_from_session_file;

pub fn staffing_command(cmd: Commands) -> ExitCode {
    if let Commands::Staffing {
        input,
        output,
        constants,
    } = cmd
    {
        let report = match staffing_from_session_file(&input, constants.as_deref()) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to reconcile staffing: {e}");
                return ExitCode::FAILURE;
            }
        };

        println!("{}", format_staffing_report(&report));

        if let Some(output) = output {
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize staffing report: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write staffing report: {e}");
                return ExitCode::FAILURE;
            }
            println!("Staffing report written to {output}");
        }
    }
    ExitCode::SUCCESS
}
