use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::analytics::performance::{avg_pnl, group_by, total_pnl, total_volume, win_rate};
use crate::models::TradeRecord;

/// Days shown in daily P&L views.
pub const DAILY_WINDOW: usize = 30;
/// Weeks shown in weekly views.
pub const WEEKLY_WINDOW: usize = 12;

/// The Sunday on or before `date`.
///
/// Dates too close to the start of the calendar to step back stay as they are.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday() as i64;
    date.checked_sub_signed(Duration::days(back)).unwrap_or(date)
}

#[derive(Debug, Clone)]
pub struct WeekBucket<'a> {
    pub week_start: NaiveDate,
    pub trades: Vec<&'a TradeRecord>,
}

/// Trades grouped by their exact calendar date. Days with no trades are absent.
pub fn bucket_daily<T: Borrow<TradeRecord>>(trades: &[T]) -> BTreeMap<NaiveDate, Vec<&TradeRecord>> {
    group_by(trades, |t| t.date)
}

/// Trades grouped under the Sunday that starts their week, oldest week first.
pub fn bucket_weekly<T: Borrow<TradeRecord>>(trades: &[T]) -> Vec<WeekBucket<'_>> {
    group_by(trades, |t| week_start(t.date))
        .into_iter()
        .map(|(week_start, trades)| WeekBucket { week_start, trades })
        .collect()
}

/// Keep the last `n` items of an ascending sequence.
pub fn tail<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    let skip = items.len().saturating_sub(n);
    items.split_off(skip)
}

/// Activity inside one day or one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    pub trades: usize,
    pub total_volume: u64,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
    pub win_rate: f64,
}

impl BucketStats {
    pub fn from_trades(trades: &[&TradeRecord]) -> Self {
        Self {
            trades: trades.len(),
            total_volume: total_volume(trades),
            total_pnl: total_pnl(trades),
            avg_pnl: avg_pnl(trades),
            win_rate: win_rate(trades),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub stats: BucketStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Sunday that opens the week.
    pub week: NaiveDate,
    #[serde(flatten)]
    pub stats: BucketStats,
}

/// Most recent `window` trading days, oldest first.
pub fn daily_summaries<T: Borrow<TradeRecord>>(trades: &[T], window: usize) -> Vec<DaySummary> {
    let days: Vec<DaySummary> = bucket_daily(trades)
        .iter()
        .map(|(day, members)| DaySummary {
            date: *day,
            stats: BucketStats::from_trades(members),
        })
        .collect();
    tail(days, window)
}

/// Most recent `window` trading weeks, oldest first.
pub fn weekly_summaries<T: Borrow<TradeRecord>>(trades: &[T], window: usize) -> Vec<WeekSummary> {
    let weeks: Vec<WeekSummary> = bucket_weekly(trades)
        .iter()
        .map(|b| WeekSummary {
            week: b.week_start,
            stats: BucketStats::from_trades(&b.trades),
        })
        .collect();
    tail(weeks, window)
}
