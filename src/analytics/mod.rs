pub mod adherence;
pub mod buckets;
pub mod cohorts;
pub mod mood;
pub mod performance;
pub mod psychology;
pub mod risk_reward;
pub mod strategy_filter;

pub use adherence::{AdherenceLevel, AdherenceSummary};
pub use buckets::{
    bucket_daily, bucket_weekly, week_start, BucketStats, DaySummary, WeekBucket, WeekSummary,
};
pub use cohorts::{by_adherence_level, by_checklist_item, ChecklistItemImpact};
pub use mood::{MoodLabel, MoodPerformance};
pub use performance::{CohortStats, PerformanceStats};
pub use risk_reward::{RiskReward, RiskRewardSummary};
pub use strategy_filter::filter_active;
