mod common;

use chrono::NaiveDate;

use trade_journal::analytics::adherence::{score, AdherenceLevel};
use trade_journal::analytics::buckets::{bucket_weekly, daily_summaries, DAILY_WINDOW};
use trade_journal::analytics::cohorts::{by_adherence_level, by_checklist_item};
use trade_journal::analytics::mood::mood_score;
use trade_journal::analytics::performance::{total_pnl, win_rate};
use trade_journal::analytics::risk_reward;
use trade_journal::analytics::strategy_filter::filter_active;
use trade_journal::config::Config;
use trade_journal::models::{AdherenceMap, Numeric, TradeRecord};
use trade_journal::reporting::Dashboard;

use common::{make_trade, sample_snapshot};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn strategy_filter_feeds_every_metric() {
    let snap = sample_snapshot();
    let active = filter_active(&snap.trades, &snap.strategies);
    let ids: Vec<&str> = active.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);

    // t5's P&L text does not parse and counts as a flat trade
    assert_eq!(total_pnl(&active), 260.0);
    assert_eq!(win_rate(&active), 60.0);
}

#[test]
fn weekly_buckets_from_ingested_records() {
    let snap = sample_snapshot();
    let active = filter_active(&snap.trades, &snap.strategies);
    let weeks = bucket_weekly(&active);
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].week_start, day("2024-03-03"));
    assert_eq!(weeks[0].trades.len(), 3);
    assert_eq!(weeks[1].week_start, day("2024-03-10"));
    assert_eq!(weeks[1].trades.len(), 2);
}

#[test]
fn daily_window_is_sparse_and_ordered() {
    let snap = sample_snapshot();
    let days = daily_summaries(&snap.trades, DAILY_WINDOW);
    let keys: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
    assert_eq!(
        keys,
        vec![
            day("2024-03-04"),
            day("2024-03-05"),
            day("2024-03-08"),
            day("2024-03-10"),
            day("2024-03-11"),
            day("2024-03-12"),
        ]
    );
    let mar11 = &days[4];
    assert_eq!(mar11.stats.trades, 2);
    assert_eq!(mar11.stats.total_pnl, 900.0);
}

#[test]
fn checklist_impact_from_notes_envelopes() {
    let snap = sample_snapshot();
    let active = filter_active(&snap.trades, &snap.strategies);
    let impact = by_checklist_item(&snap.checklist, &active);

    // "review" never appears in any map and is dropped
    assert_eq!(impact.len(), 2);
    let plan = impact.iter().find(|i| i.item_id == "plan").unwrap();
    assert_eq!(plan.followed_trades, 2);
    assert_eq!(plan.not_followed_trades, 2);
    assert_eq!(plan.impact, 150.0 - (-20.0));
    // |size| = 175 outranks |plan| = 170
    assert_eq!(impact[0].item_id, "size");

    let size = impact.iter().find(|i| i.item_id == "size").unwrap();
    assert_eq!(size.followed_pnl, 25.0);
    assert_eq!(size.not_followed_pnl, 200.0);
    assert_eq!(size.impact, -175.0);
}

#[test]
fn adherence_cohorts_rank_fixed_order() {
    let snap = sample_snapshot();
    let active = filter_active(&snap.trades, &snap.strategies);
    let cohorts = by_adherence_level(&active);
    let labels: Vec<&str> = cohorts.iter().map(|c| c.label.as_str()).collect();
    // t1 = 100, t2/t3 = 50, t4/t5 = 0
    assert_eq!(labels, vec!["Excellent", "Fair", "Very Poor"]);
    assert_eq!(cohorts[1].trades, 2);
    assert_eq!(cohorts[1].avg_pnl, 75.0);
}

#[test]
fn score_properties() {
    assert_eq!(score(&AdherenceMap::new()), 0.0);
    let mut m = AdherenceMap::new();
    for i in 0..10 {
        m.insert(format!("i{}", i), i != 0);
    }
    assert_eq!(score(&m), 90.0);
    assert_eq!(AdherenceLevel::from_score(score(&m)), AdherenceLevel::Excellent);
}

#[test]
fn risk_reward_requires_all_prices() {
    let mut with_all: TradeRecord = make_trade("rr", "2024-03-04", 10.0);
    with_all.exit_price = Some(Numeric::Number(110.0));
    with_all.stop_loss = Some(Numeric::Number(95.0));
    let mut no_stop = with_all.clone();
    no_stop.id = "no_stop".to_string();
    no_stop.stop_loss = None;

    let out = risk_reward::analyze(&[with_all, no_stop]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].risk, 5.0);
    assert_eq!(out[0].reward, 10.0);
    assert_eq!(out[0].ratio, 2.0);
}

#[test]
fn unknown_mood_label_is_neutral() {
    assert_eq!(mood_score(Some("Zen")), 3);
}

#[test]
fn empty_inputs_never_produce_nan() {
    let none: Vec<TradeRecord> = Vec::new();
    assert_eq!(total_pnl(&none), 0.0);
    assert_eq!(win_rate(&none), 0.0);
    assert!(by_adherence_level(&none).is_empty());
}

#[test]
fn dashboard_end_to_end() {
    let snap = sample_snapshot();
    let cfg = Config::default();
    let d = Dashboard::build(&snap, &cfg);

    assert_eq!(d.recorded_trades, 7);
    assert_eq!(d.analyzed_trades, 5);
    assert_eq!(d.performance.total_pnl, 260.0);
    assert_eq!(d.adherence.trades_with_checklist, 4);
    assert_eq!(d.adherence.usage_rate, 80.0);
    assert_eq!(d.by_strategy[0].label, "Opening range");

    let mar05 = d.psychology.iter().find(|p| p.date == day("2024-03-05")).unwrap();
    assert_eq!(mar05.declared_pnl, Some(180.0));
    assert_eq!(mar05.computed_pnl, 200.0);
    assert_eq!(mar05.discrepancy, Some(-20.0));
    assert_eq!(mar05.best_trade_pnl, Some(200.0));
    assert_eq!(d.psychology[0].date, day("2024-03-04"));

    // Same input, same output
    let again = Dashboard::build(&snap, &cfg);
    assert_eq!(d, again);

    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["performance"]["totalPnL"], 260.0);
    assert!(json["checklistImpact"][0]["followedPnL"].is_number());
}
