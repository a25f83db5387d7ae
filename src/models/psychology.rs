use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Numeric;

/// A daily journal reflection, correlated with trades only by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologyEntry {
    pub date: NaiveDate,
    /// P&L the trader declared for the day, independent of computed trade P&L.
    #[serde(default)]
    pub daily_pnl: Option<Numeric>,
    #[serde(default)]
    pub best_trade_id: Option<String>,
    #[serde(default)]
    pub worst_trade_id: Option<String>,
    #[serde(default)]
    pub reflections: String,
}
