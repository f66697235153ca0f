use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::engagement_source::EngagementSource;

pub trait EventRepository: EngagementSource {
    /// Persist an event and return its assigned id.
    fn log_event(&self, event: &InteractionEvent) -> Result<i64, DomainError>;
    /// Most recent events for an article, newest first.
    fn list_for_article(
        &self,
        article_id: i64,
        limit: usize,
    ) -> Result<Vec<InteractionEvent>, DomainError>;
}
