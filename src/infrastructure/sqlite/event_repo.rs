use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::ports::event_repository::EventRepository;
use crate::domain::values::engagement::EngagementSummary;
use crate::infrastructure::sqlite::{lock, SharedConnection};
use chrono::DateTime;
use rusqlite::params;
use tracing::warn;

pub struct SqliteEventRepo {
    conn: SharedConnection,
}

impl SqliteEventRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Rows with an event type this build does not know are skipped with a
    /// warning rather than failing the whole listing.
    fn row_to_event(row: &rusqlite::Row) -> Result<Option<InteractionEvent>, rusqlite::Error> {
        let type_str: String = row.get(3)?;
        let created_str: String = row.get(5)?;
        let event_type = match type_str.parse() {
            Ok(t) => t,
            Err(_) => {
                warn!(event_type = %type_str, "skipping event with unknown type");
                return Ok(None);
            }
        };
        Ok(Some(InteractionEvent {
            id: row.get(0)?,
            article_id: row.get(1)?,
            user_id: row.get(2)?,
            event_type,
            duration_ms: row.get(4)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        }))
    }
}

impl EngagementSource for SqliteEventRepo {
    fn engagement_summary(&self, article_id: i64) -> Result<EngagementSummary, DomainError> {
        let conn = lock(&self.conn)?;
        let (views, likes, time_spent): (i64, i64, i64) = conn
            .query_row(
                "SELECT
                    COALESCE(SUM(CASE WHEN event_type = 'view' THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN event_type = 'like' THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN event_type = 'time_spent' THEN duration_ms END), 0)
                 FROM interaction_events WHERE article_id = ?1",
                params![article_id],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .map_err(|e| DomainError::Database(format!("Failed to summarize events: {e}")))?;
        Ok(EngagementSummary::new(
            views.max(0) as u64,
            likes.max(0) as u64,
            time_spent.max(0) as u64,
        ))
    }
}

impl EventRepository for SqliteEventRepo {
    fn log_event(&self, event: &InteractionEvent) -> Result<i64, DomainError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO interaction_events
                (article_id, user_id, event_type, duration_ms, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.article_id,
                event.user_id,
                event.event_type.as_str(),
                event.duration_ms,
                event.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to log event: {e}")))?;
        Ok(conn.last_insert_rowid())
    }

    fn list_for_article(
        &self,
        article_id: i64,
        limit: usize,
    ) -> Result<Vec<InteractionEvent>, DomainError> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(
            "SELECT id, article_id, user_id, event_type, duration_ms, created_at
             FROM interaction_events WHERE article_id = ?1
             ORDER BY id DESC LIMIT ?2",
        )?;
        let rows = stmt
            .query_map(params![article_id, limit as i64], Self::row_to_event)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().flatten().collect())
    }
}
