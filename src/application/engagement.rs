use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::event_repository::EventRepository;
use crate::domain::values::engagement::EngagementSummary;
use crate::domain::values::event_type::EventType;

pub struct EngagementUseCase {
    articles: Arc<dyn ArticleSource>,
    events: Arc<dyn EventRepository>,
}

impl EngagementUseCase {
    pub fn new(articles: Arc<dyn ArticleSource>, events: Arc<dyn EventRepository>) -> Self {
        Self { articles, events }
    }

    pub fn log_event(
        &self,
        article_id: i64,
        event_type: EventType,
        user_id: Option<i64>,
        duration_ms: Option<i64>,
    ) -> Result<InteractionEvent, DomainError> {
        match (event_type, duration_ms) {
            (EventType::TimeSpent, None) => {
                return Err(DomainError::InvalidInput(
                    "time_spent events require a duration".into(),
                ));
            }
            (_, Some(ms)) if ms < 0 => {
                return Err(DomainError::InvalidInput(format!(
                    "Duration must be non-negative, got {ms}"
                )));
            }
            _ => {}
        }
        if self.articles.get_article(article_id)?.is_none() {
            return Err(DomainError::NotFound(format!("Article not found: {article_id}")));
        }

        let mut event = InteractionEvent::new(article_id, event_type, user_id, duration_ms);
        event.id = Some(self.events.log_event(&event)?);
        debug!(article_id, event_type = %event_type, "event logged");
        Ok(event)
    }

    pub fn summary(&self, article_id: i64) -> Result<EngagementSummary, DomainError> {
        self.events.engagement_summary(article_id)
    }

    pub fn recent_events(
        &self,
        article_id: i64,
        limit: usize,
    ) -> Result<Vec<InteractionEvent>, DomainError> {
        self.events.list_for_article(article_id, limit)
    }
}
