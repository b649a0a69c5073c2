pub mod base_commands;
pub mod forecast_cmd;
pub mod plot_cmd;
pub mod report_format;
pub mod staffing_cmd;
pub mod suggestions_cmd;
