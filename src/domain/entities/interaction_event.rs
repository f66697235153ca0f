use crate::domain::values::event_type::EventType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged reader interaction. Only the event store writes these;
/// the engine reads them back as an aggregated `EngagementSummary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub id: Option<i64>,
    pub article_id: i64,
    pub user_id: Option<i64>,
    pub event_type: EventType,
    pub duration_ms: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl InteractionEvent {
    pub fn new(
        article_id: i64,
        event_type: EventType,
        user_id: Option<i64>,
        duration_ms: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            article_id,
            user_id,
            event_type,
            duration_ms,
            created_at: Utc::now(),
        }
    }
}
