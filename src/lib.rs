//! Two-point effort estimation: turns best/worst case hours into a portfolio
//! forecast with confidence levels and reconciles it against a staffing plan.

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
