use serde::{Deserialize, Serialize};

const VIEW_WEIGHT: f64 = 1.0;
const LIKE_WEIGHT: f64 = 3.0;
const MINUTE_WEIGHT: f64 = 2.0;
/// Dwell time stops contributing after this many minutes.
const MAX_SCORED_MINUTES: f64 = 10.0;
const MS_PER_MINUTE: f64 = 60_000.0;

/// Aggregated engagement counts for one article, read fresh from the
/// event store on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub view_count: u64,
    pub like_count: u64,
    pub time_spent_ms: u64,
}

impl EngagementSummary {
    pub fn new(view_count: u64, like_count: u64, time_spent_ms: u64) -> Self {
        Self {
            view_count,
            like_count,
            time_spent_ms,
        }
    }

    /// Dwell time in minutes, capped so a single long session cannot
    /// dominate the ranking.
    pub fn capped_minutes(&self) -> f64 {
        (self.time_spent_ms as f64 / MS_PER_MINUTE).min(MAX_SCORED_MINUTES)
    }

    /// Popularity score: `views + 3 * likes + 2 * min(minutes, 10)`.
    pub fn score(&self) -> f64 {
        self.view_count as f64 * VIEW_WEIGHT
            + self.like_count as f64 * LIKE_WEIGHT
            + self.capped_minutes() * MINUTE_WEIGHT
    }
}
