pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analytics::{AnalyticsUseCase, ArticleAnalytics};
use crate::application::catalog::CatalogUseCase;
use crate::application::engagement::EngagementUseCase;
use crate::application::recommend::{RecommendUseCase, RecommendationResponse};
use crate::config::Config;
use crate::domain::entities::article::Article;
use crate::domain::entities::category::Category;
use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::catalog_repository::CatalogRepository;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::ports::event_repository::EventRepository;
use crate::domain::values::engagement::EngagementSummary;
use crate::domain::values::event_type::EventType;
use crate::infrastructure::sqlite::catalog_repo::SqliteCatalogRepo;
use crate::infrastructure::sqlite::event_repo::SqliteEventRepo;
use std::sync::Arc;

pub struct ReadNext {
    catalog_uc: CatalogUseCase,
    engagement_uc: EngagementUseCase,
    recommend_uc: RecommendUseCase,
    analytics_uc: AnalyticsUseCase,
    default_limit: usize,
}

impl ReadNext {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let mut rn = Self::open(&config.db_path, &config.default_strategy)?;
        rn.default_limit = config.default_limit;
        Ok(rn)
    }

    /// Open a SQLite-backed engine. `":memory:"` gives a throwaway database.
    pub fn open(db_path: &str, default_strategy: &str) -> Result<Self, DomainError> {
        let conn = infrastructure::sqlite::open(db_path)?;
        let catalog = Arc::new(SqliteCatalogRepo::new(conn.clone()));
        let events = Arc::new(SqliteEventRepo::new(conn));
        Ok(Self::with_sources(
            catalog.clone(),
            catalog,
            events.clone(),
            events,
            default_strategy,
        ))
    }

    /// Wire the use cases to arbitrary collaborators.
    pub fn with_sources(
        catalog: Arc<dyn CatalogRepository>,
        articles: Arc<dyn ArticleSource>,
        event_repo: Arc<dyn EventRepository>,
        events: Arc<dyn EngagementSource>,
        default_strategy: &str,
    ) -> Self {
        Self {
            catalog_uc: CatalogUseCase::new(catalog),
            engagement_uc: EngagementUseCase::new(articles.clone(), event_repo),
            recommend_uc: RecommendUseCase::new(
                articles.clone(),
                events.clone(),
                default_strategy.to_string(),
            ),
            analytics_uc: AnalyticsUseCase::new(articles, events),
            default_limit: config::DEFAULT_LIMIT,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    // Delegating methods
    pub fn add_category(&self, name: &str) -> Result<Category, DomainError> {
        self.catalog_uc.add_category(name)
    }

    pub fn add_article(
        &self,
        title: &str,
        body: &str,
        category: Option<&str>,
    ) -> Result<Article, DomainError> {
        self.catalog_uc.add_article(title, body, category)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>, DomainError> {
        self.catalog_uc.list_articles()
    }

    pub fn get_article(&self, id: i64) -> Result<Option<Article>, DomainError> {
        self.catalog_uc.get_article(id)
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.catalog_uc.list_categories()
    }

    pub fn log_event(
        &self,
        article_id: i64,
        event_type: EventType,
        user_id: Option<i64>,
        duration_ms: Option<i64>,
    ) -> Result<InteractionEvent, DomainError> {
        self.engagement_uc.log_event(article_id, event_type, user_id, duration_ms)
    }

    pub fn engagement_summary(&self, article_id: i64) -> Result<EngagementSummary, DomainError> {
        self.engagement_uc.summary(article_id)
    }

    pub fn recent_events(
        &self,
        article_id: i64,
        limit: usize,
    ) -> Result<Vec<InteractionEvent>, DomainError> {
        self.engagement_uc.recent_events(article_id, limit)
    }

    pub fn recommend(
        &self,
        strategy_name: Option<&str>,
        article_id: i64,
        limit: usize,
    ) -> Result<RecommendationResponse, DomainError> {
        self.recommend_uc.execute(strategy_name, article_id, limit)
    }

    pub fn analytics(
        &self,
        article_id: i64,
        top_n: usize,
    ) -> Result<ArticleAnalytics, DomainError> {
        self.analytics_uc.analytics(article_id, top_n)
    }

    pub fn top_keywords(&self, article_id: i64, n: usize) -> Result<Vec<String>, DomainError> {
        self.analytics_uc.top_keywords(article_id, n)
    }
}
