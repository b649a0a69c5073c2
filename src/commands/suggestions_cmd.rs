use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::session_json::{export_session, load_session_from_json_file};
use crate::services::suggestions::{accept_suggestions, parse_suggestions};

pub fn accept_suggestions_command(cmd: Commands) -> ExitCode {
    if let Commands::AcceptSuggestions {
        input,
        suggestions,
        output,
    } = cmd
    {
        let state = match load_session_from_json_file(&input) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to load session: {e}");
                return ExitCode::FAILURE;
            }
        };
        let suggestions = match std::fs::read_to_string(&suggestions)
            .map_err(|e| e.to_string())
            .and_then(|contents| parse_suggestions(&contents).map_err(|e| e.to_string()))
        {
            Ok(suggestions) => suggestions,
            Err(e) => {
                eprintln!("Failed to read suggestions: {e}");
                return ExitCode::FAILURE;
            }
        };
        let accepted = match accept_suggestions(&state, &suggestions) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to accept suggestions: {e}");
                return ExitCode::FAILURE;
            }
        };

        let json = match export_session(&accepted) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize session: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(&output, json) {
            eprintln!("Failed to write session: {e}");
            return ExitCode::FAILURE;
        }
        println!(
            "Session with {} work items written to {output}",
            accepted.work_items.len()
        );
    }
    ExitCode::SUCCESS
}
