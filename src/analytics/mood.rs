use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::analytics::buckets::bucket_daily;
use crate::analytics::performance::{group_by, safe_div, total_pnl, CohortStats};
use crate::models::{Emotion, TradeRecord};

/// Score for labels outside the vocabulary, and for trades with no label.
pub const NEUTRAL_SCORE: u8 = 3;

const EMOTION_SCORES: [(Emotion, u8); 7] = [
    (Emotion::Confident, 5),
    (Emotion::Excited, 4),
    (Emotion::Disciplined, 4),
    (Emotion::Neutral, 3),
    (Emotion::Anxious, 2),
    (Emotion::Fearful, 1),
    (Emotion::Greedy, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

const MOOD_BANDS: [(f64, MoodLabel); 4] = [
    (4.5, MoodLabel::VeryPositive),
    (3.5, MoodLabel::Positive),
    (2.5, MoodLabel::Neutral),
    (1.5, MoodLabel::Negative),
];

impl MoodLabel {
    pub fn from_score(score: f64) -> MoodLabel {
        MOOD_BANDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, label)| *label)
            .unwrap_or(MoodLabel::VeryNegative)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::VeryPositive => "Very Positive",
            MoodLabel::Positive => "Positive",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Negative => "Negative",
            MoodLabel::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn emotion_score(emotion: Emotion) -> u8 {
    EMOTION_SCORES
        .iter()
        .find(|(e, _)| *e == emotion)
        .map(|(_, s)| *s)
        .unwrap_or(NEUTRAL_SCORE)
}

/// Score a raw label; anything unrecognized is Neutral.
pub fn mood_score(label: Option<&str>) -> u8 {
    label
        .and_then(Emotion::from_label)
        .map(emotion_score)
        .unwrap_or(NEUTRAL_SCORE)
}

pub fn trade_mood(trade: &TradeRecord) -> u8 {
    mood_score(trade.emotion.as_deref())
}

fn mean_mood(trades: &[&TradeRecord]) -> f64 {
    let total: f64 = trades.iter().map(|t| trade_mood(t) as f64).sum();
    safe_div(total, trades.len() as f64)
}

/// Mean mood score per trading day.
pub fn daily_mood<T: Borrow<TradeRecord>>(trades: &[T]) -> BTreeMap<NaiveDate, f64> {
    bucket_daily(trades)
        .into_iter()
        .map(|(day, members)| (day, mean_mood(&members)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMood {
    pub date: NaiveDate,
    pub mood: f64,
    pub label: MoodLabel,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    pub trades: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPerformance {
    pub days: Vec<DailyMood>,
    /// Pearson correlation of daily mood against daily P&L.
    pub correlation: f64,
}

pub fn mood_performance<T: Borrow<TradeRecord>>(trades: &[T]) -> MoodPerformance {
    let days: Vec<DailyMood> = bucket_daily(trades)
        .into_iter()
        .map(|(date, members)| {
            let mood = mean_mood(&members);
            DailyMood {
                date,
                mood,
                label: MoodLabel::from_score(mood),
                total_pnl: total_pnl(&members),
                trades: members.len(),
            }
        })
        .collect();

    let moods: Vec<f64> = days.iter().map(|d| d.mood).collect();
    let pnls: Vec<f64> = days.iter().map(|d| d.total_pnl).collect();
    let correlation = pearson(&moods, &pnls);

    MoodPerformance { days, correlation }
}

/// Pearson's r; 0 for fewer than two points or a flat series.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    safe_div(cov, (var_x * var_y).sqrt())
}

/// Stats per recognized emotion, most positive emotion first.
///
/// Trades without a recognized label are not grouped.
pub fn by_emotion<T: Borrow<TradeRecord>>(trades: &[T]) -> Vec<CohortStats> {
    let tagged: Vec<&TradeRecord> = trades
        .iter()
        .map(|t| t.borrow())
        .filter(|t| t.emotion().is_some())
        .collect();
    let groups = group_by(&tagged, |t| {
        let emotion = t.emotion().unwrap_or(Emotion::Neutral);
        let position = Emotion::ALL.iter().position(|e| *e == emotion).unwrap_or(0);
        (std::cmp::Reverse(emotion_score(emotion)), position)
    });
    groups
        .into_values()
        .filter_map(|members| {
            let emotion = members.first()?.emotion()?;
            Some(CohortStats::from_trades(emotion.as_str(), &members))
        })
        .collect()
}
