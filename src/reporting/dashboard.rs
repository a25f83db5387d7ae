use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::analytics::adherence::{
    item_compliance, weekly_adherence_trend, AdherenceSummary, AdherenceTrendPoint, ItemCompliance,
};
use crate::analytics::buckets::{daily_summaries, weekly_summaries, DaySummary, WeekSummary};
use crate::analytics::cohorts::{by_adherence_level, by_checklist_item, top_impact, ChecklistItemImpact};
use crate::analytics::mood::{by_emotion, mood_performance, MoodPerformance};
use crate::analytics::performance::{by_instrument, by_strategy, CohortStats, PerformanceStats};
use crate::analytics::psychology::{reconcile, DayReconciliation};
use crate::analytics::risk_reward::{self, RiskRewardSummary};
use crate::analytics::strategy_filter::filter_active;
use crate::config::Config;
use crate::journal::JournalSnapshot;

/// Every derived metric the journal dashboard shows, computed in one pass over a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub recorded_trades: usize,
    pub analyzed_trades: usize,
    pub performance: PerformanceStats,
    pub daily: Vec<DaySummary>,
    pub weekly: Vec<WeekSummary>,
    pub adherence: AdherenceSummary,
    pub adherence_trend: Vec<AdherenceTrendPoint>,
    pub by_adherence_level: Vec<CohortStats>,
    pub checklist_impact: Vec<ChecklistItemImpact>,
    pub item_compliance: Vec<ItemCompliance>,
    pub risk_reward: RiskRewardSummary,
    pub mood: MoodPerformance,
    pub by_emotion: Vec<CohortStats>,
    pub by_strategy: Vec<CohortStats>,
    pub by_instrument: Vec<CohortStats>,
    pub psychology: Vec<DayReconciliation>,
}

impl Dashboard {
    pub fn build(snapshot: &JournalSnapshot, cfg: &Config) -> Self {
        let trades = filter_active(&snapshot.trades, &snapshot.strategies);
        debug!(
            "Building dashboard over {} of {} trades",
            trades.len(),
            snapshot.trades.len()
        );

        let rr = risk_reward::analyze(&trades);
        let impact = by_checklist_item(&snapshot.checklist, &trades);

        Dashboard {
            recorded_trades: snapshot.trades.len(),
            analyzed_trades: trades.len(),
            performance: PerformanceStats::from_trades(&trades),
            daily: daily_summaries(&trades, cfg.daily_window),
            weekly: weekly_summaries(&trades, cfg.weekly_window),
            adherence: AdherenceSummary::from_trades(&trades),
            adherence_trend: weekly_adherence_trend(&trades, cfg.weekly_window),
            by_adherence_level: by_adherence_level(&trades),
            checklist_impact: top_impact(impact, cfg.top_items),
            item_compliance: item_compliance(&snapshot.checklist, &trades),
            risk_reward: RiskRewardSummary::from_results(&rr),
            mood: mood_performance(&trades),
            by_emotion: by_emotion(&trades),
            by_strategy: by_strategy(&trades, &snapshot.strategies),
            by_instrument: by_instrument(&trades),
            psychology: reconcile(&snapshot.psychology, &trades),
        }
    }

    pub fn print_summary(&self) {
        println!("{}", self);
    }
}

fn write_cohorts(f: &mut fmt::Formatter<'_>, title: &str, cohorts: &[CohortStats]) -> fmt::Result {
    if cohorts.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "  {}", title)?;
    writeln!(f, "  ───────────────────────────────────")?;
    for c in cohorts {
        writeln!(
            f,
            "  {:>14}: {} trades | WR {:.0}% | PnL ${:+.2} | Avg ${:+.2}",
            c.label, c.trades, c.win_rate, c.total_pnl, c.avg_pnl
        )?;
    }
    Ok(())
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.performance;
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(f, "  TRADING JOURNAL DASHBOARD")?;
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(
            f,
            "  Trades:      {} analyzed of {} recorded",
            self.analyzed_trades, self.recorded_trades
        )?;
        writeln!(f)?;
        writeln!(f, "  PERFORMANCE")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(f, "  PnL:         ${:+.2}", p.total_pnl)?;
        writeln!(f, "  Win/Loss:    {} / {}", p.winning_trades, p.losing_trades)?;
        writeln!(f, "  Win Rate:    {:.1}%", p.win_rate)?;
        writeln!(f, "  Avg Trade:   ${:+.2}", p.avg_pnl)?;
        writeln!(f, "  Avg Win:     ${:+.2}", p.avg_win)?;
        writeln!(f, "  Avg Loss:    ${:+.2}", p.avg_loss)?;
        writeln!(f, "  Best:        ${:+.2}", p.best_trade)?;
        writeln!(f, "  Worst:       ${:+.2}", p.worst_trade)?;
        writeln!(f, "  Profit Factor: {:.2}", p.profit_factor)?;
        writeln!(f, "  Volume:      {}", p.total_volume)?;

        writeln!(f)?;
        writeln!(f, "  DISCIPLINE")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(
            f,
            "  Adherence:   {:.1} ({}) over {} trades",
            self.adherence.average_score, self.adherence.level, self.adherence.trades_with_checklist
        )?;
        writeln!(f, "  Checklist use: {:.1}%", self.adherence.usage_rate)?;
        if !self.checklist_impact.is_empty() {
            writeln!(f, "  Top items by impact:")?;
            for i in &self.checklist_impact {
                writeln!(
                    f,
                    "    {:<24} impact ${:+.2} | WR {:+.1}pp | {} followed / {} skipped",
                    i.item, i.impact, i.win_rate_impact, i.followed_trades, i.not_followed_trades
                )?;
            }
        }
        write_cohorts(f, "BY ADHERENCE", &self.by_adherence_level)?;

        writeln!(f)?;
        writeln!(f, "  RISK / REWARD")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(f, "  Trades:      {}", self.risk_reward.trades)?;
        writeln!(f, "  Avg R:R:     {:.2}", self.risk_reward.avg_ratio)?;
        writeln!(f, "  R:R >= 1:    {}", self.risk_reward.favorable)?;

        writeln!(f)?;
        writeln!(f, "  PSYCHOLOGY")?;
        writeln!(f, "  ───────────────────────────────────")?;
        writeln!(f, "  Mood/PnL r:  {:+.2}", self.mood.correlation)?;
        let mismatched = self
            .psychology
            .iter()
            .filter(|d| d.discrepancy.is_some_and(|x| x.abs() > 0.005))
            .count();
        writeln!(f, "  Entries:     {} ({} with P&L mismatch)", self.psychology.len(), mismatched)?;
        write_cohorts(f, "BY EMOTION", &self.by_emotion)?;
        write_cohorts(f, "BY STRATEGY", &self.by_strategy)?;
        write_cohorts(f, "BY INSTRUMENT", &self.by_instrument)?;

        if !self.weekly.is_empty() {
            writeln!(f)?;
            writeln!(f, "  WEEKLY")?;
            writeln!(f, "  ───────────────────────────────────")?;
            for w in &self.weekly {
                writeln!(
                    f,
                    "  {}: {} trades | vol {} | PnL ${:+.2} | Avg ${:+.2}",
                    w.week.format("%Y-%m-%d"),
                    w.stats.trades,
                    w.stats.total_volume,
                    w.stats.total_pnl,
                    w.stats.avg_pnl
                )?;
            }
        }

        write!(f, "{}", "=".repeat(70))
    }
}
