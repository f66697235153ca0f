//! Hybrid strategy.
//!
//! Interleaves content-based and popularity rankings position by position,
//! content first, skipping anything already taken.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::application::strategies::content_based::ContentBasedStrategy;
use crate::application::strategies::popularity::PopularityStrategy;
use crate::domain::entities::article::Article;
use crate::domain::error::DomainError;
use crate::domain::ports::article_source::ArticleSource;
use crate::domain::ports::engagement_source::EngagementSource;
use crate::domain::ports::recommender::Recommender;
use crate::domain::values::strategy_kind::StrategyKind;

pub struct HybridStrategy {
    content: Box<dyn Recommender>,
    popularity: Box<dyn Recommender>,
}

impl HybridStrategy {
    pub fn new(articles: Arc<dyn ArticleSource>, events: Arc<dyn EngagementSource>) -> Self {
        Self::from_parts(
            Box::new(ContentBasedStrategy::new(articles.clone())),
            Box::new(PopularityStrategy::new(articles, events)),
        )
    }

    /// Compose from two already-built rankers.
    pub fn from_parts(content: Box<dyn Recommender>, popularity: Box<dyn Recommender>) -> Self {
        Self { content, popularity }
    }
}

/// Round-robin merge of two ranked lists.
///
/// At position `i`, `primary[i]` is offered before `secondary[i]`. An article
/// is taken only if it is not `exclude_id` and has not been taken already.
/// Stops at `limit` articles or when both lists run out.
pub fn interleave(
    primary: Vec<Article>,
    secondary: Vec<Article>,
    exclude_id: i64,
    limit: usize,
) -> Vec<Article> {
    let mut merged = Vec::with_capacity(limit.min(primary.len() + secondary.len()));
    let mut seen: HashSet<i64> = HashSet::new();
    let mut primary = primary.into_iter();
    let mut secondary = secondary.into_iter();

    while merged.len() < limit {
        let (p, s) = (primary.next(), secondary.next());
        if p.is_none() && s.is_none() {
            break;
        }
        for candidate in [p, s].into_iter().flatten() {
            if merged.len() >= limit {
                break;
            }
            if candidate.id != exclude_id && seen.insert(candidate.id) {
                merged.push(candidate);
            }
        }
    }
    merged
}

impl Recommender for HybridStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Hybrid
    }

    fn recommend(&self, article_id: i64, limit: usize) -> Result<Vec<Article>, DomainError> {
        if limit == 0 {
            return Ok(vec![]);
        }
        let content = self.content.recommend(article_id, limit)?;
        let popular = self.popularity.recommend(article_id, limit)?;
        debug!(
            article_id,
            content = content.len(),
            popular = popular.len(),
            "hybrid merge"
        );
        Ok(interleave(content, popular, article_id, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            category_id: None,
            body: String::new(),
            category_name: None,
        }
    }

    fn ids(articles: &[Article]) -> Vec<i64> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_interleave_skips_seen() {
        // content [P, Q], popularity [Q, R] -> [P, Q, R]
        let merged = interleave(vec![article(1), article(2)], vec![article(2), article(3)], 99, 3);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn test_interleave_stops_at_limit_mid_step() {
        let merged = interleave(vec![article(1), article(2)], vec![article(3), article(4)], 99, 3);
        assert_eq!(ids(&merged), vec![1, 3, 2]);
    }

    #[test]
    fn test_interleave_uneven_lengths() {
        let merged = interleave(vec![article(1)], vec![article(2), article(3), article(4)], 99, 10);
        assert_eq!(ids(&merged), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_interleave_excludes_source() {
        let merged = interleave(vec![article(5), article(1)], vec![article(2)], 5, 10);
        assert_eq!(ids(&merged), vec![2, 1]);
    }

    #[test]
    fn test_interleave_zero_limit() {
        assert!(interleave(vec![article(1)], vec![article(2)], 99, 0).is_empty());
    }

    #[test]
    fn test_interleave_both_empty() {
        assert!(interleave(vec![], vec![], 1, 5).is_empty());
    }
}
