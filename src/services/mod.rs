pub mod charts;
pub mod constants_yaml;
pub mod coordination;
pub mod estimation;
pub mod forecast;
pub mod forecast_types;
pub mod gaussian;
pub mod session_json;
pub mod staffing_grid;
pub mod suggestions;
pub mod visualization;
