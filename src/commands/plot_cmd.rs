use std::process::ExitCode;

use crate::commands::base_commands::{Chart, Commands};
use crate::services::charts::{ChartError, write_distribution_png, write_duration_png};
use crate::services::estimation::calculate_portfolio;
use crate::services::forecast::load_session_with_constants;
use crate::services::visualization::{compute_distribution_data, compute_duration_curve_data};

pub fn plot_command(cmd: Commands) -> ExitCode {
    if let Commands::Plot {
        input,
        output,
        chart,
        constants,
    } = cmd
    {
        let state = match load_session_with_constants(&input, constants.as_deref()) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to load session: {e}");
                return ExitCode::FAILURE;
            }
        };
        let portfolio = match calculate_portfolio(&state.work_items, &state.constants) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                eprintln!("Failed to forecast session: {e}");
                return ExitCode::FAILURE;
            }
        };

        let written = match chart {
            Chart::Distribution => match compute_distribution_data(Some(&portfolio)) {
                Some(data) => write_distribution_png(&output, &data),
                None => Err(ChartError::Empty("portfolio has no work items")),
            },
            Chart::Duration => {
                write_duration_png(&output, &compute_duration_curve_data(&portfolio, &state.constants))
            }
        };
        if let Err(e) = written {
            eprintln!("Failed to write chart: {e}");
            return ExitCode::FAILURE;
        }
        tracing::info!(?chart, output = %output, "chart written");
        println!("Chart written to {output}");
    }
    ExitCode::SUCCESS
}
