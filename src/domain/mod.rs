pub mod constants;
pub mod portfolio;
pub mod session;
pub mod staffing;
pub mod weighting;
pub mod work_item;
