//! Per-article analytics: engagement totals plus the article's most
//! distinctive keywords from the TF-IDF model.

use std::sync::Arc;

use serde::Serialize;

use crate::application::relevance::TextRelevanceModel;
use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::engagement_source::EngagementSource;

pub const DEFAULT_TOP_KEYWORDS: usize = 3;
const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
pub struct ArticleAnalytics {
    pub article_id: i64,
    pub views: u64,
    pub likes: u64,
    pub time_spent_seconds: f64,
    pub time_spent_minutes: f64,
    pub category: String,
    pub engagement_score: f64,
    pub top_keywords: Vec<String>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub struct AnalyticsUseCase {
    articles: Arc<dyn ArticleSource>,
    events: Arc<dyn EngagementSource>,
}

impl AnalyticsUseCase {
    pub fn new(articles: Arc<dyn ArticleSource>, events: Arc<dyn EngagementSource>) -> Self {
        Self { articles, events }
    }

    pub fn analytics(
        &self,
        article_id: i64,
        top_n: usize,
    ) -> Result<ArticleAnalytics, DomainError> {
        let summary = self.events.engagement_summary(article_id)?;
        let category = self
            .articles
            .get_article(article_id)?
            .and_then(|a| a.category_name)
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        Ok(ArticleAnalytics {
            article_id,
            views: summary.view_count,
            likes: summary.like_count,
            time_spent_seconds: round2(summary.time_spent_ms as f64 / 1000.0),
            time_spent_minutes: round2(summary.time_spent_ms as f64 / 60_000.0),
            category,
            engagement_score: summary.score(),
            top_keywords: self.top_keywords(article_id, top_n)?,
        })
    }

    /// Highest-weighted terms of the article against the whole corpus.
    /// Empty when the article is not listed or has no vocabulary terms.
    pub fn top_keywords(&self, article_id: i64, n: usize) -> Result<Vec<String>, DomainError> {
        let articles = self.articles.list_articles()?;
        let Some(index) = articles.iter().position(|a| a.id == article_id) else {
            return Ok(vec![]);
        };
        let documents: Vec<String> = articles.iter().map(Article::document_text).collect();
        Ok(TextRelevanceModel::fit(&documents)
            .map(|m| m.top_terms(index, n).into_iter().map(|(t, _)| t).collect())
            .unwrap_or_default())
    }
}
