//! Popularity strategy.
//!
//! Ranks every other article by its engagement score, most engaged first.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::strategy_kind::StrategyKind;

pub struct PopularityStrategy {
    articles: Arc<dyn ArticleSource>,
    events: Arc<dyn EngagementSource>,
}

impl PopularityStrategy {
    pub fn new(articles: Arc<dyn ArticleSource>, events: Arc<dyn EngagementSource>) -> Self {
        Self { articles, events }
    }
}

impl Recommender for PopularityStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Popularity
    }

    fn recommend(&self, article_id: i64, limit: usize) -> Result<Vec<Article>, DomainError> {
        if limit == 0 {
            return Ok(vec![]);
        }

        let mut seen: HashSet<i64> = HashSet::from([article_id]);
        let mut scored: Vec<(Article, f64)> = Vec::new();
        for article in self.articles.list_articles()? {
            if !seen.insert(article.id) {
                continue;
            }
            let score = self.events.engagement_summary(article.id)?.score();
            scored.push((article, score));
        }

        // sort_by is stable: equal scores keep the listing order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(article_id, candidates = scored.len(), "popularity ranking");
        Ok(scored.into_iter().take(limit).map(|(a, _)| a).collect())
    }
}
