use crate::domain::error::DomainError;
use crate::domain::values::engagement::EngagementSummary;

/// Read access to aggregated engagement counts.
pub trait EngagementSource: Send + Sync {
    /// Views, likes and summed dwell time for one article. Articles without
    /// any events yield an all-zero summary.
    fn engagement_summary(&self, article_id: i64) -> Result<EngagementSummary, DomainError>;
}
