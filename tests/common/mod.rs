//! Shared test helpers: in-memory collaborators and article builders.
#![allow(dead_code)]

use readnext::domain::entities::article::Article;
use readnext::domain::error::DomainError;
use readnext::domain::ports::article_source::ArticleSource;
use readnext::domain::ports::engagement_source::EngagementSource;
use readnext::domain::ports::recommender::Recommender;
use readnext::domain::values::engagement::EngagementSummary;
use readnext::domain::values::strategy_kind::StrategyKind;
use readnext::ReadNext;
use std::collections::HashMap;
use std::sync::Arc;

pub fn setup() -> ReadNext {
    ReadNext::open(":memory:", "popular").unwrap()
}

pub fn article(id: i64, title: &str, body: &str, category: Option<(i64, &str)>) -> Article {
    Article {
        id,
        title: title.to_string(),
        category_id: category.map(|(id, _)| id),
        body: body.to_string(),
        category_name: category.map(|(_, name)| name.to_string()),
    }
}

pub fn ids(articles: &[Article]) -> Vec<i64> {
    articles.iter().map(|a| a.id).collect()
}

/// Corpus provider backed by a fixed listing.
pub struct FakeCorpus {
    pub articles: Vec<Article>,
}

impl FakeCorpus {
    pub fn new(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self { articles })
    }
}

impl ArticleSource for FakeCorpus {
    fn list_articles(&self) -> Result<Vec<Article>, DomainError> {
        Ok(self.articles.clone())
    }

    fn get_article(&self, id: i64) -> Result<Option<Article>, DomainError> {
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }
}

/// Event store backed by fixed summaries; unknown articles have none.
#[derive(Default)]
pub struct FakeEvents {
    pub summaries: HashMap<i64, EngagementSummary>,
}

impl FakeEvents {
    pub fn new(entries: &[(i64, u64, u64, u64)]) -> Arc<Self> {
        Arc::new(Self {
            summaries: entries
                .iter()
                .map(|&(id, views, likes, ms)| (id, EngagementSummary::new(views, likes, ms)))
                .collect(),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl EngagementSource for FakeEvents {
    fn engagement_summary(&self, article_id: i64) -> Result<EngagementSummary, DomainError> {
        Ok(self.summaries.get(&article_id).copied().unwrap_or_default())
    }
}

/// Event store whose every read fails.
pub struct FailingEvents;

impl EngagementSource for FailingEvents {
    fn engagement_summary(&self, _article_id: i64) -> Result<EngagementSummary, DomainError> {
        Err(DomainError::Database("event store unavailable".into()))
    }
}

/// Ranker that always returns the same list, truncated to the limit.
pub struct FixedRanker {
    pub kind: StrategyKind,
    pub articles: Vec<Article>,
}

impl Recommender for FixedRanker {
    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn recommend(&self, _article_id: i64, limit: usize) -> Result<Vec<Article>, DomainError> {
        Ok(self.articles.iter().take(limit).cloned().collect())
    }
}

/// A small newsroom corpus spanning three categories.
pub fn newsroom() -> Vec<Article> {
    let tech = Some((1, "Technology"));
    let life = Some((2, "Lifestyle"));
    let travel = Some((3, "Travel"));
    vec![
        article(
            1,
            "AI in Everyday Apps",
            "AI is increasingly used to personalize user experiences in mobile and web applications.",
            tech,
        ),
        article(
            2,
            "Healthy Habits for Better Productivity",
            "Small daily habits can have a big impact on energy, focus, and productivity.",
            life,
        ),
        article(
            3,
            "Understanding AR and VR Basics",
            "AR overlays information on the real world, while VR immerses users in a fully virtual environment.",
            tech,
        ),
        article(
            4,
            "Travel Tips for Budget Explorers",
            "Planning ahead and using local options can significantly reduce travel costs.",
            travel,
        ),
        article(
            5,
            "Mobile AI Assistants",
            "Assistants on mobile phones use AI models to answer questions for users.",
            tech,
        ),
        article(
            6,
            "Remote Work Productivity",
            "Focus and energy matter when working from home; habits shape productivity.",
            life,
        ),
    ]
}
