pub mod analytics;
pub mod config;
pub mod error;
pub mod journal;
pub mod models;
pub mod reporting;
#[cfg(test)]
pub mod test_helpers;
