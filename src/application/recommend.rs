use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::application::factory::StrategyFactory;
use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::values::strategy_kind::StrategyKind;

/// What was asked for, what actually ran, and the ranked articles.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub article_id: i64,
    pub requested_strategy: String,
    pub actual_strategy: StrategyKind,
    pub recommendations: Vec<Article>,
}

pub struct RecommendUseCase {
    articles: Arc<dyn ArticleSource>,
    events: Arc<dyn EngagementSource>,
    default_strategy: String,
}

impl RecommendUseCase {
    pub fn new(
        articles: Arc<dyn ArticleSource>,
        events: Arc<dyn EngagementSource>,
        default_strategy: String,
    ) -> Self {
        Self {
            articles,
            events,
            default_strategy,
        }
    }

    /// Rank related articles. `None` falls back to the configured default
    /// strategy name.
    #[instrument(skip(self), fields(strategy = tracing::field::Empty))]
    pub fn execute(
        &self,
        strategy_name: Option<&str>,
        article_id: i64,
        limit: usize,
    ) -> Result<RecommendationResponse, DomainError> {
        let requested = strategy_name.unwrap_or(&self.default_strategy);
        let strategy =
            StrategyFactory::create(requested, self.articles.clone(), self.events.clone());
        tracing::Span::current().record("strategy", strategy.kind().as_str());

        let recommendations = strategy.recommend(article_id, limit)?;
        info!(results = recommendations.len(), "recommendations computed");

        Ok(RecommendationResponse {
            article_id,
            requested_strategy: requested.to_string(),
            actual_strategy: strategy.kind(),
            recommendations,
        })
    }
}
