use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::analytics::buckets::bucket_daily;
use crate::analytics::performance::total_pnl;
use crate::models::{PsychologyEntry, TradeRecord};

/// A psychology entry lined up against the trades of its day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReconciliation {
    pub date: NaiveDate,
    pub declared_pnl: Option<f64>,
    pub computed_pnl: f64,
    pub trade_count: usize,
    /// Declared minus computed, when a figure was declared.
    pub discrepancy: Option<f64>,
    pub best_trade_pnl: Option<f64>,
    pub worst_trade_pnl: Option<f64>,
}

fn find_pnl<T: Borrow<TradeRecord>>(trades: &[T], id: Option<&str>) -> Option<f64> {
    let id = id?;
    trades
        .iter()
        .map(|t| t.borrow())
        .find(|t| t.id == id)
        .map(TradeRecord::pnl)
}

/// Reconcile each entry's declared P&L with what the trades of that day add up to.
///
/// Best/worst references that no longer resolve come back as `None`. Output is
/// sorted by date.
pub fn reconcile<T: Borrow<TradeRecord>>(
    entries: &[PsychologyEntry],
    trades: &[T],
) -> Vec<DayReconciliation> {
    let days = bucket_daily(trades);

    let mut out: Vec<DayReconciliation> = entries
        .iter()
        .map(|entry| {
            let members = days.get(&entry.date).map(Vec::as_slice).unwrap_or(&[]);
            let computed_pnl = total_pnl(members);
            let declared_pnl = entry.daily_pnl.as_ref().and_then(|n| n.parse());
            DayReconciliation {
                date: entry.date,
                declared_pnl,
                computed_pnl,
                trade_count: members.len(),
                discrepancy: declared_pnl.map(|d| d - computed_pnl),
                best_trade_pnl: find_pnl(trades, entry.best_trade_id.as_deref()),
                worst_trade_pnl: find_pnl(trades, entry.worst_trade_id.as_deref()),
            }
        })
        .collect();
    out.sort_by_key(|d| d.date);
    out
}
