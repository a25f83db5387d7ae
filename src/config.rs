use serde::{Deserialize, Serialize};

use crate::analytics::buckets::{DAILY_WINDOW, WEEKLY_WINDOW};

const DEFAULT_TOP_ITEMS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_path: String,

    // Dashboard windows
    pub daily_window: usize,
    pub weekly_window: usize,
    pub top_items: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_path: env("JOURNAL_PATH", "data/journal.json"),
            daily_window: env("DAILY_WINDOW", "30").parse().unwrap_or(DAILY_WINDOW),
            weekly_window: env("WEEKLY_WINDOW", "12").parse().unwrap_or(WEEKLY_WINDOW),
            top_items: env("TOP_ITEMS", "5").parse().unwrap_or(DEFAULT_TOP_ITEMS),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_path: "data/journal.json".to_string(),
            daily_window: DAILY_WINDOW,
            weekly_window: WEEKLY_WINDOW,
            top_items: DEFAULT_TOP_ITEMS,
            log_level: "info".to_string(),
        }
    }
}
